//! Error types for siegelz

use thiserror::Error;

/// Result type alias using siegelz's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating the Hardy Z function
#[derive(Error, Debug)]
pub enum Error {
    /// An input argument failed validation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Requested working precision is outside the supported range
    #[error("Working precision must be a multiple of 64 bits in [128, 1024], got {bits}")]
    PrecisionOutOfRange {
        /// The rejected bit count
        bits: u32,
    },

    /// t is so large that the main-sum term count no longer fits 32 bits
    #[error("t = {t} exceeds the supported magnitude (about 1.15e20)")]
    MagnitudeOverflow {
        /// The offending t value
        t: String,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a magnitude overflow error for the given t
    pub fn magnitude_overflow(t: &rug::Float) -> Self {
        Self::MagnitudeOverflow {
            t: format!("{:e}", t),
        }
    }
}
