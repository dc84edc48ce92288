//! Common error infrastructure for game-core.
//!
//! Comparison and grading are total and never fail; only session
//! transitions can be refused. Domain errors such as
//! [`SessionError`](crate::session::SessionError) live beside the state they
//! guard and implement [`GameError`] so callers can classify them uniformly.

/// Severity level of an error, used to pick a recovery strategy.
///
/// - **Recoverable**: the player can act differently and try again
/// - **Validation**: the request makes no sense in the current state
/// - **Internal**: an invariant was broken and should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// Error enums derive `thiserror::Error` for `Display` and classify each
/// variant by recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier of the variant, stable across releases.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
