//! Core error type for agenda-core operations
//!
//! Provides the unified `CoreError` enum surfaced by the overlap resolver.
//! Designed for easy propagation with `?` and structured matching.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Resolution is all-or-nothing: the full partition is returned or an error,
//!   never a partial timeline
//! - Retrying without changing input is pointless; the computation is pure
//!   and deterministic

use alloc::string::{String, ToString};
use core::fmt;

use crate::event::{Event, Timestamp};

#[cfg(feature = "std")]
use thiserror::Error;

/// Main error type for overlap resolution.
///
/// Input problems are recoverable by fixing the offending event; internal
/// invariant violations indicate a bug and are not.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input event with `start >= finish`; rejected before sweeping
    InvalidInterval {
        /// Label of the offending event
        label: String,
        /// Its claimed start instant
        start: Timestamp,
        /// Its claimed finish instant
        finish: Timestamp,
    },

    /// Internal consistency error (should not happen)
    Internal(String),
}

impl CoreError {
    /// Create an invalid-interval error from the offending event.
    #[must_use]
    pub fn invalid_interval(event: &Event<'_>) -> Self {
        Self::InvalidInterval {
            label: event.label.to_string(),
            start: event.start,
            finish: event.finish,
        }
    }

    /// Create internal error (indicates a bug)
    pub fn internal<T: fmt::Display>(message: T) -> Self {
        Self::Internal(message.to_string())
    }

    /// Check if error is recoverable by correcting the input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidInterval { .. } => true,
            Self::Internal(_) => false,
        }
    }

    /// Check if error indicates a bug in the library
    #[must_use]
    pub const fn is_internal_bug(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval {
                label,
                start,
                finish,
            } => {
                write!(
                    f,
                    "Invalid interval for event '{label}': start {start} is not before finish {finish}"
                )
            }
            Self::Internal(msg) => {
                write!(f, "Internal error: {msg} (this is a bug, please report)")
            }
        }
    }
}

/// no_std compatible Error implementation
#[cfg(not(feature = "std"))]
impl core::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn invalid_interval_from_event() {
        let event = Event::new("backwards", 2, 50, 10);
        let err = CoreError::invalid_interval(&event);
        assert!(matches!(err, CoreError::InvalidInterval { .. }));
        assert!(err.is_recoverable());
        assert!(!err.is_internal_bug());
        assert!(format!("{err}").contains("backwards"));
    }

    #[test]
    fn internal_error() {
        let err = CoreError::internal("active set empty");
        assert!(err.is_internal_bug());
        assert!(!err.is_recoverable());
        assert!(format!("{err}").contains("bug"));
    }
}
