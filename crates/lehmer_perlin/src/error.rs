//! # Noise Error Types
//!
//! Sampling and table construction cannot fail. These errors come only
//! from the host-facing surfaces: config loading and raw buffer casts.

use thiserror::Error;

/// Errors from the host-facing surfaces of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// Config text could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A flat coordinate buffer does not hold whole xyz triples.
    #[error("point buffer of {len} values is not a multiple of 3")]
    MalformedPointBuffer {
        /// Number of `f64` values in the buffer.
        len: usize,
    },
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            NoiseError::InvalidConfig("missing seed".into()).to_string(),
            "invalid configuration: missing seed"
        );
        assert_eq!(
            NoiseError::MalformedPointBuffer { len: 4 }.to_string(),
            "point buffer of 4 values is not a multiple of 3"
        );
    }
}
