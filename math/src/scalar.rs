use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

/// Arithmetic backend used by the interpolation routines.
///
/// Implemented for [`BigRational`] (exact) and `f64` (native floating
/// point). Both round half away from zero, so results produced by either
/// backend are directly comparable.
pub trait Scalar:
    Clone
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Short backend name used in logs and reports.
    const NAME: &'static str;

    fn from_biguint(value: &BigUint) -> Self;

    fn from_bigint(value: &BigInt) -> Self;

    /// Lift an interpolation node (share index) into the backend.
    fn from_abscissa(x: u64) -> Self;

    /// Absolute value, used for pivot selection.
    fn magnitude(&self) -> Self;

    /// Nearest integer, halves rounded away from zero.
    ///
    /// Returns `None` when the value has no integer counterpart (NaN or an
    /// infinity on the floating-point backend).
    fn round_half_away(&self) -> Option<BigInt>;
}

impl Scalar for BigRational {
    const NAME: &'static str = "exact";

    fn from_biguint(value: &BigUint) -> Self {
        BigRational::from_integer(BigInt::from(value.clone()))
    }

    fn from_bigint(value: &BigInt) -> Self {
        BigRational::from_integer(value.clone())
    }

    fn from_abscissa(x: u64) -> Self {
        BigRational::from_integer(BigInt::from(x))
    }

    fn magnitude(&self) -> Self {
        Signed::abs(self)
    }

    fn round_half_away(&self) -> Option<BigInt> {
        Some(self.round().to_integer())
    }
}

impl Scalar for f64 {
    const NAME: &'static str = "float";

    fn from_biguint(value: &BigUint) -> Self {
        value.to_f64().unwrap_or(f64::INFINITY)
    }

    fn from_bigint(value: &BigInt) -> Self {
        value.to_f64().unwrap_or(if value.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    fn from_abscissa(x: u64) -> Self {
        x as f64
    }

    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn round_half_away(&self) -> Option<BigInt> {
        if self.is_finite() {
            BigInt::from_f64(self.round())
        } else {
            None
        }
    }
}
