use std::collections::BTreeMap;
use std::fmt;

use math::{num_bigint::BigInt, Scalar};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{RecoveryError, Result},
    share::Share,
};

/// A decoded sample `(x, y)`: `x` is the share index, `y` its decimal value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    /// `x` lifted into the scalar backend.
    #[inline]
    pub fn abscissa<S: Scalar>(&self) -> S {
        S::from_abscissa(self.x)
    }

    /// `y` lifted into the scalar backend.
    #[inline]
    pub fn ordinate<S: Scalar>(&self) -> S {
        S::from_bigint(&self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Decode the shares with indices `1..=n`, in increasing index order.
///
/// Missing indices are skipped. The first share that fails to decode aborts
/// the whole build.
#[instrument(skip_all, fields(n = n, available = records.len()))]
pub fn build_points(
    records: &BTreeMap<u64, Share>,
    n: usize,
) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(records.len().min(n));
    for (&index, share) in records.range(1..=n as u64) {
        let decoded = share.decode()?;
        debug!(
            index,
            base = share.base,
            value = %share.value,
            decimal = %decoded,
            "decoded share"
        );
        points.push(Point::new(index, decoded));
    }
    Ok(points)
}

/// The first `k` points, or [`RecoveryError::InsufficientPoints`].
pub fn select_first_k(points: &[Point], k: usize) -> Result<&[Point]> {
    if points.len() < k {
        return Err(RecoveryError::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }
    Ok(&points[..k])
}

/// Build a `Vec<Point>` from `(x, y)` pairs.
///
/// ```
/// use recovery_core::points;
///
/// let pts = points![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(pts[1].x, 2);
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::points::Point::new($x, $y)),*]
    };
}
