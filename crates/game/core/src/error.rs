//! Common error infrastructure for shroud-core.
//!
//! Domain-specific errors (`MoveError`, `MeleeError`, `MapError`, ...) live next
//! to the code that raises them. This module only provides the classification
//! shared by all of them.
//!
//! Nothing a player can do is fatal: illegal moves and missing targets are
//! rejected and absorbed by the engine, while grid-size mismatches are
//! programming errors and panic instead of surfacing here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player may simply submit another action
/// - **Validation**: the input itself was malformed and should not be retried as-is
/// - **Internal**: state inconsistency that indicates a bug
/// - **Fatal**: the engine cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: destination is a wall, destination occupied, nothing to attack.
    Recoverable,

    /// Examples: unknown entity id, spawning outside the map.
    Validation,

    /// Examples: actor vanished between validation and apply.
    Internal,

    /// Examples: action submitted after the engine exited.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all shroud-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable upper-case code per variant from `error_code`
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for core::convert::Infallible {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
