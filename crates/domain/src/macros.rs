//! Macro for implementing Display and FromStr for wire enums
//!
//! The backend exchanges enums as upper-case strings (`"PUBLIC"`,
//! `"UPCOMING"`, ...). This macro provides a single implementation for both
//! Display and FromStr so every enum renders the exact wire value and parses
//! it case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use gagso_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum AlarmStatus {
//!     None,
//!     Scheduled,
//!     Sent,
//! }
//!
//! impl_wire_enum_conversions!(AlarmStatus {
//!     None => "NONE",
//!     Scheduled => "SCHEDULED",
//!     Sent => "SENT",
//! });
//!
//! assert_eq!(AlarmStatus::Sent.to_string(), "SENT");
//! assert_eq!("scheduled".parse::<AlarmStatus>(), Ok(AlarmStatus::Scheduled));
//! ```

/// Implements Display, FromStr and `as_str` for wire enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
///
/// Parsing ignores ASCII case and surrounding whitespace; the error message
/// names the enum and the rejected input.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Done,
    }

    impl_wire_enum_conversions!(TestStatus {
        Pending => "PENDING",
        Done => "DONE",
    });

    #[test]
    fn display_uses_wire_value() {
        assert_eq!(TestStatus::Pending.to_string(), "PENDING");
        assert_eq!(TestStatus::Done.as_str(), "DONE");
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(TestStatus::from_str("pending").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str(" Done ").unwrap(), TestStatus::Done);
    }

    #[test]
    fn parsing_rejects_unknown_values() {
        let err = TestStatus::from_str("archived").unwrap_err();
        assert!(err.contains("Invalid TestStatus: archived"));
        assert!(TestStatus::from_str("").is_err());
    }
}
