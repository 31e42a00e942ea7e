//! # Validation Error Types
//!
//! The two ways a correctness check can fail.
//!
//! Raising and handling these is the caller's business; nothing in this
//! crate catches them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed correctness check.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Violation detectable independent of program state or timing.
    #[error("validation failed: {0}")]
    Fail(String),

    /// Violation tied to runtime conditions.
    #[error("runtime validation failed: {0}")]
    FailRuntime(String),
}

/// Result type for validated operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Creates a state-independent validation failure.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    /// Creates a runtime-dependent validation failure.
    #[must_use]
    pub fn fail_runtime(message: impl Into<String>) -> Self {
        Self::FailRuntime(message.into())
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Fail(message) | Self::FailRuntime(message) => message,
        }
    }

    /// Returns true for [`ValidationError::FailRuntime`].
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::FailRuntime(_))
    }

    /// Returns `Ok(())` if `condition` holds, otherwise a [`ValidationError::Fail`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Fail`] carrying `message` when `condition` is false.
    pub fn ensure(condition: bool, message: impl Into<String>) -> ValidationResult<()> {
        if condition {
            return Ok(());
        }
        let err = Self::fail(message);
        tracing::debug!(error = %err, "check failed");
        Err(err)
    }

    /// Returns `Ok(())` if `condition` holds, otherwise a [`ValidationError::FailRuntime`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FailRuntime`] carrying `message` when `condition` is false.
    pub fn ensure_runtime(condition: bool, message: impl Into<String>) -> ValidationResult<()> {
        if condition {
            return Ok(());
        }
        let err = Self::fail_runtime(message);
        tracing::debug!(error = %err, "runtime check failed");
        Err(err)
    }
}
