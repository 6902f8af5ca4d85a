//! Strategies that evaluate the interpolating polynomial at `x = 0`.
//!
//! Every strategy consumes the same `k` points, needs pairwise distinct
//! x-coordinates and rounds its real-valued result half away from zero.

pub mod barycentric;
pub mod gaussian;
pub mod lagrange;
pub mod newton;

use std::fmt;
use std::str::FromStr;

use math::{num_bigint::BigInt, Scalar};
use serde::{Deserialize, Serialize};

use crate::{
    error::{RecoveryError, Result},
    params::UnknownVariant,
    points::Point,
};

pub use barycentric::{BarycentricEvaluator, BarycentricWeights};
pub use gaussian::{GaussianSolver, VandermondeSystem};
pub use lagrange::LagrangeInterpolator;
pub use newton::{DividedDifferences, NewtonForm, NewtonInterpolator};

/// A way of computing `f(0)` from `k` points.
pub trait Interpolator<S: Scalar>: Send + Sync {
    fn method(&self) -> Method;

    /// Real-valued `f(0)` of the degree-`(k - 1)` interpolant.
    fn evaluate_at_zero(&self, points: &[Point]) -> Result<S>;

    /// `f(0)` rounded to the nearest integer.
    fn solve(&self, points: &[Point]) -> Result<BigInt> {
        let value = self.evaluate_at_zero(points)?;
        round_secret(&value, self.method())
    }
}

/// Round half away from zero, rejecting non-finite values.
pub fn round_secret<S: Scalar>(value: &S, method: Method) -> Result<BigInt> {
    value
        .round_half_away()
        .ok_or(RecoveryError::NonFiniteResult { method })
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Newton,
    Gaussian,
    Barycentric,
    Lagrange,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Newton,
        Method::Gaussian,
        Method::Barycentric,
        Method::Lagrange,
    ];

    /// Methods compared by default during cross-validation.
    pub const CROSS_CHECK: [Method; 3] =
        [Method::Newton, Method::Gaussian, Method::Barycentric];

    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Newton => "newton",
            Method::Gaussian => "gaussian",
            Method::Barycentric => "barycentric",
            Method::Lagrange => "lagrange",
        }
    }

    /// Human-readable name used in reports.
    pub const fn title(self) -> &'static str {
        match self {
            Method::Newton => "Newton's divided differences",
            Method::Gaussian => "Gaussian elimination",
            Method::Barycentric => "Barycentric Lagrange",
            Method::Lagrange => "Classical Lagrange",
        }
    }

    pub fn interpolator<S: Scalar>(self) -> &'static dyn Interpolator<S> {
        match self {
            Method::Newton => &NewtonInterpolator,
            Method::Gaussian => &GaussianSolver,
            Method::Barycentric => &BarycentricEvaluator,
            Method::Lagrange => &LagrangeInterpolator,
        }
    }

    pub fn evaluate_at_zero<S: Scalar>(self, points: &[Point]) -> Result<S> {
        self.interpolator::<S>().evaluate_at_zero(points)
    }

    pub fn solve<S: Scalar>(self, points: &[Point]) -> Result<BigInt> {
        self.interpolator::<S>().solve(points)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("method", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;
    use math::{poly, BigRational, Polynomial};
    use proptest::prelude::*;
    use proptest::sample::subsequence;
    use test_strategy::proptest;

    fn sample(poly: &Polynomial<BigRational>, nodes: &[u64]) -> Vec<Point> {
        nodes
            .iter()
            .map(|&x| Point::new(x, poly.evaluate_at(x).to_integer()))
            .collect()
    }

    fn distinct_nodes() -> impl Strategy<Value = Vec<u64>> {
        subsequence((1u64..=16).collect::<Vec<_>>(), 1..=6).prop_shuffle()
    }

    #[test]
    fn all_methods_recover_the_constant_term() {
        let pts = points![(1, 4), (2, 7), (3, 12)];
        for method in Method::ALL {
            assert_eq!(method.solve::<BigRational>(&pts), Ok(BigInt::from(3)));
            assert_eq!(method.solve::<f64>(&pts), Ok(BigInt::from(3)));
        }
    }

    #[test]
    fn sampled_quadratic_recovers_two() {
        let pts = sample(&poly![2, 1, 1], &[1, 2, 3]);
        assert_eq!(pts, points![(1, 4), (2, 8), (3, 14)]);
        for method in Method::ALL {
            assert_eq!(method.solve::<BigRational>(&pts), Ok(BigInt::from(2)));
        }
    }

    #[test]
    fn single_point_is_a_constant_polynomial() {
        let pts = points![(5, 42)];
        for method in Method::ALL {
            assert_eq!(method.solve::<BigRational>(&pts), Ok(BigInt::from(42)));
            assert_eq!(method.solve::<f64>(&pts), Ok(BigInt::from(42)));
        }
    }

    #[test]
    fn empty_input_is_insufficient() {
        for method in Method::ALL {
            assert_eq!(
                method.solve::<BigRational>(&[]),
                Err(RecoveryError::InsufficientPoints {
                    required: 1,
                    available: 0
                })
            );
        }
    }

    #[test]
    fn interpolator_reports_its_method() {
        for method in Method::ALL {
            assert_eq!(method.interpolator::<f64>().method(), method);
        }
    }

    #[test]
    fn fractional_secret_rounds_half_away_from_zero() {
        // line through (1, 1) and (3, 2): f(0) = 1/2
        let pts = points![(1, 1), (3, 2)];
        for method in Method::ALL {
            assert_eq!(
                method.evaluate_at_zero::<BigRational>(&pts),
                Ok(BigRational::new(BigInt::from(1), BigInt::from(2)))
            );
            assert_eq!(method.solve::<BigRational>(&pts), Ok(BigInt::from(1)));
        }
        // exactly representable along the Newton path
        assert_eq!(Method::Newton.solve::<f64>(&pts), Ok(BigInt::from(1)));
    }

    #[test]
    fn method_names_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
        assert_eq!("Newton".parse::<Method>(), Ok(Method::Newton));
        assert!("spline".parse::<Method>().is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            round_secret(&f64::NAN, Method::Gaussian),
            Err(RecoveryError::NonFiniteResult {
                method: Method::Gaussian
            })
        );
    }

    #[proptest(cases = 64)]
    fn exact_methods_recover_sampled_constant(
        #[strategy(distinct_nodes())] nodes: Vec<u64>,
        #[strategy(proptest::collection::vec(-1000i64..1000, #nodes.len()))]
        coefficients: Vec<i64>,
    ) {
        let poly: Polynomial<BigRational> =
            Polynomial::from_integers(coefficients.iter().copied().map(BigInt::from));
        let pts = sample(&poly, &nodes);
        for method in Method::ALL {
            assert_eq!(
                method.solve::<BigRational>(&pts),
                Ok(BigInt::from(coefficients[0]))
            );
        }
    }

    #[proptest(cases = 32)]
    fn secret_is_invariant_to_point_order(
        #[strategy(distinct_nodes())] nodes: Vec<u64>,
        #[strategy(proptest::collection::vec(-50i64..50, #nodes.len()))]
        coefficients: Vec<i64>,
        #[strategy(Just(#nodes.clone()).prop_shuffle())] shuffled: Vec<u64>,
    ) {
        let poly: Polynomial<BigRational> =
            Polynomial::from_integers(coefficients.iter().copied().map(BigInt::from));
        let original = sample(&poly, &nodes);
        let permuted = sample(&poly, &shuffled);
        for method in Method::CROSS_CHECK {
            assert_eq!(
                method.solve::<BigRational>(&original),
                method.solve::<BigRational>(&permuted)
            );
            assert_eq!(
                method.solve::<f64>(&original),
                method.solve::<f64>(&permuted)
            );
        }
    }
}
