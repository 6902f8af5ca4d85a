use math::Scalar;

use super::{Interpolator, Method};
use crate::{
    error::Result,
    points::Point,
    utils::{abscissae, ensure_non_empty, node_gap},
};

/// Lagrange basis polynomials evaluated at zero:
/// `L_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)`.
pub fn basis_at_zero<S: Scalar>(points: &[Point]) -> Result<Vec<S>> {
    ensure_non_empty(points)?;
    let xs: Vec<S> = abscissae(points);
    let mut basis = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        let mut li = S::one();
        for j in (0..points.len()).filter(|&j| j != i) {
            let gap = node_gap(points, &xs, i, j)?;
            li = li * ((S::zero() - xs[j].clone()) / gap);
        }
        basis.push(li);
    }
    Ok(basis)
}

/// Classical Lagrange form `f(0) = sum(y_i L_i(0))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LagrangeInterpolator;

impl<S: Scalar> Interpolator<S> for LagrangeInterpolator {
    fn method(&self) -> Method {
        Method::Lagrange
    }

    fn evaluate_at_zero(&self, points: &[Point]) -> Result<S> {
        let basis = basis_at_zero::<S>(points)?;
        Ok(points
            .iter()
            .zip(basis)
            .fold(S::zero(), |acc, (p, li)| acc + p.ordinate::<S>() * li))
    }
}
