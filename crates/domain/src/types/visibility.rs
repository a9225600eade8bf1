//! Schedule visibility scope

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Access scope of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    /// Visible to everyone
    Public,
    /// Visible to a cohort decided by the backend
    Group,
    /// Visible to the author and administrators
    Private,
}

impl_wire_enum_conversions!(Visibility {
    Public => "PUBLIC",
    Group => "GROUP",
    Private => "PRIVATE",
});

/// Legacy synonym still emitted by older clients for [`Visibility::Group`].
pub const DEPARTMENT_SYNONYM: &str = "DEPARTMENT";

impl Visibility {
    /// Parse a wire value, accepting the `DEPARTMENT` synonym for `GROUP`.
    ///
    /// Returns `None` for anything unrecognized.
    pub fn from_wire(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case(DEPARTMENT_SYNONYM) {
            return Some(Self::Group);
        }
        value.parse().ok()
    }

    /// Short human-readable label; localisation happens at the boundary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Group => "group",
            Self::Private => "private",
        }
    }

    pub fn icon(&self) -> VisibilityIcon {
        match self {
            Self::Public => VisibilityIcon::Eye,
            Self::Group => VisibilityIcon::Group,
            Self::Private => VisibilityIcon::Lock,
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}

/// Presentation category for a visibility badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityIcon {
    Eye,
    Group,
    Lock,
}

impl VisibilityIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eye => "eye",
            Self::Group => "group",
            Self::Lock => "lock",
        }
    }
}
