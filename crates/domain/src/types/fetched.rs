//! Outcome of a lookup that may fall back to local data

use serde::{Deserialize, Serialize};

/// Result of a fetch with an explicit degraded state.
///
/// `Degraded` carries usable data from a fallback source alongside the
/// reason the primary source failed, so callers can render the data and
/// still tell the user it may be stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Fetched<T> {
    Fresh { data: T },
    Degraded { data: T, reason: String },
    Failed { reason: String },
}

impl<T> Fetched<T> {
    pub fn fresh(data: T) -> Self {
        Self::Fresh { data }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Fresh { data } | Self::Degraded { data, .. } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Fresh { data } | Self::Degraded { data, .. } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Fresh { .. } => None,
            Self::Degraded { reason, .. } | Self::Failed { reason } => Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
