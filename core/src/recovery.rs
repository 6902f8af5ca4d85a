use math::{num_bigint::BigInt, BigRational, Scalar};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    error::Result,
    interpolation::Method,
    params::{Backend, ThresholdConfig},
    points::{select_first_k, Point},
    share::ShareSet,
    validate::{cross_validate, CrossValidation},
};

/// Outcome of recovering one share document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recovery {
    pub config: ThresholdConfig,
    /// Every decoded point, ascending by index.
    pub points: Vec<Point>,
    pub validation: CrossValidation,
    /// Method whose value was taken as the secret.
    pub answer: Method,
    pub secret: BigInt,
}

impl Recovery {
    /// The first `k` points, the ones the interpolators consumed.
    pub fn selected(&self) -> &[Point] {
        &self.points[..self.config.k()]
    }
}

/// Decode, select the first `k` points and cross-validate; the Newton value
/// is the secret.
pub fn recover_secret<S: Scalar>(shares: &ShareSet) -> Result<Recovery> {
    recover_with::<S>(shares, Method::Newton)
}

/// Like [`recover_secret`] but reports `answer`'s value as the secret. A
/// method outside the default cross-check set is run on its own.
#[instrument(skip_all, fields(backend = S::NAME, n = shares.config().n(), k = shares.config().k()))]
pub fn recover_with<S: Scalar>(
    shares: &ShareSet,
    answer: Method,
) -> Result<Recovery> {
    let config = shares.config();
    let points = shares.points()?;
    let selected = select_first_k(&points, config.k())?;
    info!(
        available = points.len(),
        degree = config.degree(),
        "interpolating from the first k points"
    );

    let validation = cross_validate::<S>(selected)?;
    let secret = match validation.get(answer) {
        Some(value) => value.clone(),
        None => answer.solve::<S>(selected)?,
    };
    info!(%secret, method = %answer, agree = validation.agree(), "recovered secret");

    Ok(Recovery {
        config,
        points,
        validation,
        answer,
        secret,
    })
}

/// [`recover_with`] on the chosen backend.
pub fn recover(
    shares: &ShareSet,
    backend: Backend,
    answer: Method,
) -> Result<Recovery> {
    match backend {
        Backend::Exact => recover_with::<BigRational>(shares, answer),
        Backend::Float => recover_with::<f64>(shares, answer),
    }
}
