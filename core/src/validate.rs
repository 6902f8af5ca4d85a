//! Run several interpolation methods over the same points and compare the
//! rounded secrets they produce.

use math::{num_bigint::BigInt, Scalar};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{error::Result, interpolation::Method, points::Point};

/// Rounded secrets keyed by the method that produced them, in run order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossValidation {
    values: Vec<(Method, BigInt)>,
    agree: bool,
}

impl CrossValidation {
    fn new(values: Vec<(Method, BigInt)>) -> Self {
        let agree = values.windows(2).all(|pair| pair[0].1 == pair[1].1);
        Self { values, agree }
    }

    pub fn values(&self) -> &[(Method, BigInt)] {
        &self.values
    }

    pub fn get(&self, method: Method) -> Option<&BigInt> {
        self.values
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, value)| value)
    }

    /// True when every method produced the same integer.
    pub fn agree(&self) -> bool {
        self.agree
    }

    /// The Newton value when present, otherwise the first method's value.
    pub fn consensus(&self) -> Option<&BigInt> {
        self.get(Method::Newton)
            .or_else(|| self.values.first().map(|(_, value)| value))
    }
}

/// Cross-check Newton, Gaussian elimination and barycentric Lagrange.
pub fn cross_validate<S: Scalar>(points: &[Point]) -> Result<CrossValidation> {
    cross_validate_with::<S>(points, &Method::CROSS_CHECK)
}

/// Run `methods` in the given order. The first failing method aborts the
/// check; disagreement is only logged.
#[instrument(skip_all, fields(backend = S::NAME, k = points.len()))]
pub fn cross_validate_with<S: Scalar>(
    points: &[Point],
    methods: &[Method],
) -> Result<CrossValidation> {
    let validation = CrossValidation::new(run_methods::<S>(points, methods)?);
    if !validation.agree() {
        let summary = validation
            .values()
            .iter()
            .map(|(method, value)| format!("{method}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        warn!(%summary, "interpolation methods disagree");
    }
    Ok(validation)
}

#[cfg(not(feature = "parallel"))]
fn run_methods<S: Scalar>(
    points: &[Point],
    methods: &[Method],
) -> Result<Vec<(Method, BigInt)>> {
    methods
        .iter()
        .map(|&method| Ok((method, method.solve::<S>(points)?)))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_methods<S: Scalar>(
    points: &[Point],
    methods: &[Method],
) -> Result<Vec<(Method, BigInt)>> {
    use rayon::prelude::*;

    // indexed collect keeps the input order
    methods
        .par_iter()
        .map(|&method| Ok((method, method.solve::<S>(points)?)))
        .collect()
}
