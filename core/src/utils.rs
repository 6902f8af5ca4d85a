use math::Scalar;

use crate::{
    error::{RecoveryError, Result},
    points::Point,
};

/// Interpolation needs at least one point.
pub(crate) fn ensure_non_empty(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(RecoveryError::InsufficientPoints {
            required: 1,
            available: 0,
        });
    }
    Ok(())
}

pub fn abscissae<S: Scalar>(points: &[Point]) -> Vec<S> {
    points.iter().map(Point::abscissa::<S>).collect()
}

pub fn ordinates<S: Scalar>(points: &[Point]) -> Vec<S> {
    points.iter().map(Point::ordinate::<S>).collect()
}

/// `x_i - x_j`, or [`RecoveryError::DuplicateAbscissa`] when it vanishes.
pub(crate) fn node_gap<S: Scalar>(
    points: &[Point],
    nodes: &[S],
    i: usize,
    j: usize,
) -> Result<S> {
    let gap = nodes[i].clone() - nodes[j].clone();
    if gap.is_zero() {
        return Err(RecoveryError::DuplicateAbscissa { x: points[i].x });
    }
    Ok(gap)
}
