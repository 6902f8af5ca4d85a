use math::error::{MathError, MatrixError, RadixError};
use thiserror::Error;

use crate::interpolation::Method;

/// Result type specialized for secret recovery.
pub type Result<T, E = RecoveryError> = std::result::Result<T, E>;

/// Errors raised while decoding shares or interpolating the secret.
///
/// Every variant is deterministic: retrying the same input fails the same way.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("unsupported base {0}: expected a base between 2 and 36")]
    InvalidBase(u32),
    #[error("share value is empty")]
    EmptyValue,
    #[error("insufficient points: need {required}, got {available}")]
    InsufficientPoints { required: usize, available: usize },
    #[error("duplicate abscissa x = {x}: interpolation is undefined")]
    DuplicateAbscissa { x: u64 },
    #[error("singular Vandermonde system: zero pivot in column {column}")]
    SingularSystem { column: usize },
    #[error("evaluation point 0 coincides with the node x = {x}")]
    EvaluationAtNode { x: u64 },
    #[error("invalid threshold configuration: k = {k} must satisfy 1 <= k <= n = {n}")]
    InvalidThreshold { k: usize, n: usize },
    #[error("{method} interpolation produced a non-finite value")]
    NonFiniteResult { method: Method },
    #[error("malformed share document: {0}")]
    MalformedDocument(String),
    #[error(transparent)]
    Matrix(MatrixError),
}

impl From<RadixError> for RecoveryError {
    fn from(value: RadixError) -> Self {
        match value {
            RadixError::InvalidDigit { digit, base } => {
                RecoveryError::InvalidDigit { digit, base }
            }
            RadixError::InvalidBase(base) => RecoveryError::InvalidBase(base),
            RadixError::EmptyValue => RecoveryError::EmptyValue,
            other => RecoveryError::MalformedDocument(other.to_string()),
        }
    }
}

impl From<MatrixError> for RecoveryError {
    fn from(value: MatrixError) -> Self {
        match value {
            MatrixError::Singular { column } => {
                RecoveryError::SingularSystem { column }
            }
            other => RecoveryError::Matrix(other),
        }
    }
}

impl From<MathError> for RecoveryError {
    fn from(value: MathError) -> Self {
        match value {
            MathError::Radix(err) => err.into(),
            MathError::Matrix(err) => err.into(),
            other => RecoveryError::MalformedDocument(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(value: serde_json::Error) -> Self {
        RecoveryError::MalformedDocument(value.to_string())
    }
}
