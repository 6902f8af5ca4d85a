pub use crate::poly;
pub use crate::{
    error::{MathError, MatrixError, RadixError},
    matrix::Matrix,
    poly::Polynomial,
    radix::{decode, encode},
    scalar::Scalar,
};
pub use num_bigint::{BigInt, BigUint};
pub use num_rational::BigRational;
