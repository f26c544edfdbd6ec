//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! precondition violations, rejected sampler configurations and undersized output buffers.
//! Singular matrices are not errors; see the `inverse` methods in [`crate::linalg`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("buffer too small: {required} values required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

/// Checks that a destination buffer can hold `required` values.
pub(crate) fn ensure_capacity(required: usize, available: usize) -> Result<()> {
    if available < required {
        return Err(Error::BufferTooSmall {
            required,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn ensure_capacity_reports_sizes() {
        assert!(ensure_capacity(16, 16).is_ok());
        let err = ensure_capacity(16, 9).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall {
                required: 16,
                available: 9
            }
        ));
        assert_eq!(
            err.to_string(),
            "buffer too small: 16 values required, 9 available"
        );
    }
}
