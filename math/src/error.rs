use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("unsupported base {0}: expected a base between 2 and 36")]
        InvalidBase(u32),
        #[error("cannot decode an empty digit string")]
        EmptyValue,
        #[error("invalid digit '{digit}' for base {base}")]
        InvalidDigit { digit: char, base: u32 },
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("Matrix cannot be empty for {operation}")]
        Empty { operation: &'static str },
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("matrix must be square for {operation}, got {rows}x{cols}")]
        NotSquare {
            operation: &'static str,
            rows: usize,
            cols: usize,
        },
        #[error("right-hand side has {rhs_len} entries but the matrix has {rows} rows")]
        RhsLengthMismatch { rows: usize, rhs_len: usize },
        #[error("matrix is singular: zero pivot in column {column}")]
        Singular { column: usize },
    }
}

pub use matrix::Error as MatrixError;
pub use radix::Error as RadixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Error = MathError;
