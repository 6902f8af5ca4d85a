pub mod error;
pub mod macros;
pub mod matrix;
pub mod poly;
pub mod prelude;
pub mod radix;
pub mod scalar;

pub use matrix::Matrix;
pub use num_bigint;
pub use num_rational;
pub use num_rational::BigRational;
pub use poly::Polynomial;
pub use scalar::Scalar;
