//! Error types for the checked IR layer and the harness.
//!
//! The unchecked operation catalog never produces these: it has no failure
//! channel at all.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{op}: expected {expected} operand, found {found}")]
    ViewMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{op}: integer division by zero")]
    DivisionByZero { op: &'static str },

    #[error("{op}: integer overflow")]
    Overflow { op: &'static str },

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::ViewMismatch {
            op: "addi",
            expected: "int",
            found: "float",
        };
        assert_eq!(err.to_string(), "addi: expected int operand, found float");

        let err = Error::DivisionByZero { op: "divi" };
        assert_eq!(err.to_string(), "divi: integer division by zero");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
