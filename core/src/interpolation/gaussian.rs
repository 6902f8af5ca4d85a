use math::{Matrix, Polynomial, Scalar};

use super::{Interpolator, Method};
use crate::{
    error::Result,
    points::Point,
    utils::{abscissae, ensure_non_empty, ordinates},
};

/// The `k x k` Vandermonde system `V a = y` for a point set.
#[derive(Clone, Debug, PartialEq)]
pub struct VandermondeSystem<S: Scalar> {
    matrix: Matrix<S>,
    rhs: Vec<S>,
}

impl<S: Scalar> VandermondeSystem<S> {
    /// Row `i` is `[x_i^0, ..., x_i^(k-1)]`; the right-hand side is `y`.
    pub fn new(points: &[Point]) -> Result<Self> {
        ensure_non_empty(points)?;
        let xs: Vec<S> = abscissae(points);
        Ok(Self {
            matrix: Matrix::vandermonde(&xs, points.len()),
            rhs: ordinates(points),
        })
    }

    pub fn matrix(&self) -> &Matrix<S> {
        &self.matrix
    }

    pub fn rhs(&self) -> &[S] {
        &self.rhs
    }

    /// Monomial coefficients `a_0, ..., a_{k-1}` of the interpolant.
    ///
    /// Elimination runs on a working copy; `self` stays intact for reporting.
    pub fn solve(&self) -> Result<Polynomial<S>> {
        let mut matrix = self.matrix.clone();
        let mut rhs = self.rhs.clone();
        let coefficients = matrix.solve_in_place(&mut rhs)?;
        Ok(Polynomial::new(coefficients))
    }
}

/// Gaussian elimination with partial pivoting on the Vandermonde system.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianSolver;

impl<S: Scalar> Interpolator<S> for GaussianSolver {
    fn method(&self) -> Method {
        Method::Gaussian
    }

    fn evaluate_at_zero(&self, points: &[Point]) -> Result<S> {
        Ok(VandermondeSystem::new(points)?.solve()?.constant_term())
    }
}
