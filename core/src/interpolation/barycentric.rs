use math::Scalar;

use super::{Interpolator, Method};
use crate::{
    error::{RecoveryError, Result},
    points::Point,
    utils::{abscissae, ensure_non_empty, node_gap, ordinates},
};

/// Barycentric weights `w_i = 1 / prod_{j != i} (x_i - x_j)` of a point set,
/// kept together with the nodes and values they were built from.
#[derive(Clone, Debug, PartialEq)]
pub struct BarycentricWeights<S: Scalar> {
    nodes: Vec<u64>,
    values: Vec<S>,
    weights: Vec<S>,
}

impl<S: Scalar> BarycentricWeights<S> {
    pub fn new(points: &[Point]) -> Result<Self> {
        ensure_non_empty(points)?;
        let xs: Vec<S> = abscissae(points);
        let mut weights = Vec::with_capacity(points.len());
        for i in 0..points.len() {
            let mut weight = S::one();
            for j in (0..points.len()).filter(|&j| j != i) {
                weight = weight / node_gap(points, &xs, i, j)?;
            }
            weights.push(weight);
        }

        Ok(Self {
            nodes: points.iter().map(|p| p.x).collect(),
            values: ordinates(points),
            weights,
        })
    }

    pub fn weights(&self) -> &[S] {
        &self.weights
    }

    pub fn nodes(&self) -> &[u64] {
        &self.nodes
    }

    /// Second barycentric form at `x = 0`:
    /// `sum(y_i t_i) / sum(t_i)` with `t_i = w_i / (0 - x_i)`.
    ///
    /// A node at zero makes `t_i` undefined and is reported as
    /// [`RecoveryError::EvaluationAtNode`].
    pub fn evaluate_at_zero(&self) -> Result<S> {
        let mut numerator = S::zero();
        let mut denominator = S::zero();
        for ((&x, y), w) in self.nodes.iter().zip(&self.values).zip(&self.weights)
        {
            if x == 0 {
                return Err(RecoveryError::EvaluationAtNode { x });
            }
            let term = w.clone() / (S::zero() - S::from_abscissa(x));
            numerator = numerator + y.clone() * term.clone();
            denominator = denominator + term;
        }
        Ok(numerator / denominator)
    }
}

/// Barycentric Lagrange evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BarycentricEvaluator;

impl<S: Scalar> Interpolator<S> for BarycentricEvaluator {
    fn method(&self) -> Method {
        Method::Barycentric
    }

    fn evaluate_at_zero(&self, points: &[Point]) -> Result<S> {
        BarycentricWeights::new(points)?.evaluate_at_zero()
    }
}
