use std::fmt;

use math::Scalar;

use super::{Interpolator, Method};
use crate::{
    error::Result,
    points::Point,
    utils::{abscissae, ensure_non_empty, node_gap},
};

/// Triangular divided-difference table of a point set.
///
/// Row `i` holds `f[x_i]`, `f[x_i, x_{i+1}]`, ... and therefore has `k - i`
/// entries. Row 0 carries the Newton-form coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct DividedDifferences<S: Scalar> {
    nodes: Vec<u64>,
    table: Vec<Vec<S>>,
}

impl<S: Scalar> DividedDifferences<S> {
    pub fn new(points: &[Point]) -> Result<Self> {
        ensure_non_empty(points)?;
        let k = points.len();
        let xs: Vec<S> = abscissae(points);

        let mut table: Vec<Vec<S>> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut row = Vec::with_capacity(k - i);
                row.push(p.ordinate::<S>());
                row
            })
            .collect();

        for j in 1..k {
            for i in 0..k - j {
                let gap = node_gap(points, &xs, i + j, i)?;
                let value =
                    (table[i + 1][j - 1].clone() - table[i][j - 1].clone()) / gap;
                table[i].push(value);
            }
        }

        Ok(Self {
            nodes: points.iter().map(|p| p.x).collect(),
            table,
        })
    }

    pub fn nodes(&self) -> &[u64] {
        &self.nodes
    }

    pub fn table(&self) -> &[Vec<S>] {
        &self.table
    }

    /// `f[x_0]`, `f[x_0, x_1]`, ..., `f[x_0, ..., x_{k-1}]`.
    pub fn coefficients(&self) -> &[S] {
        &self.table[0]
    }

    /// Evaluate the Newton form at `x = 0`.
    pub fn evaluate_at_zero(&self) -> S {
        let coefficients = self.coefficients();
        let mut result = coefficients[0].clone();
        let mut product = S::one();
        for (i, c) in coefficients.iter().enumerate().skip(1) {
            product = product * (S::zero() - S::from_abscissa(self.nodes[i - 1]));
            result = result + c.clone() * product.clone();
        }
        result
    }

    /// `P(x) = c0 + c1(x-x0) + c2(x-x0)(x-x1) + ...`
    pub fn newton_form(&self) -> NewtonForm<'_, S> {
        NewtonForm(self)
    }
}

/// Display adapter for the Newton form of a [`DividedDifferences`] table.
pub struct NewtonForm<'a, S: Scalar>(&'a DividedDifferences<S>);

impl<S: Scalar> fmt::Display for NewtonForm<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.0.coefficients();
        write!(f, "P(x) = {}", coefficients[0])?;
        for (i, c) in coefficients.iter().enumerate().skip(1) {
            write!(f, " + {c}")?;
            for x in &self.0.nodes[..i] {
                write!(f, "(x-{x})")?;
            }
        }
        Ok(())
    }
}

/// Newton's divided differences.
#[derive(Clone, Copy, Debug, Default)]
pub struct NewtonInterpolator;

impl<S: Scalar> Interpolator<S> for NewtonInterpolator {
    fn method(&self) -> Method {
        Method::Newton
    }

    fn evaluate_at_zero(&self, points: &[Point]) -> Result<S> {
        Ok(DividedDifferences::new(points)?.evaluate_at_zero())
    }
}
