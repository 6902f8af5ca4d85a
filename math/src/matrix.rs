use std::fmt;
use std::ops::{Deref, Index, IndexMut};

use crate::{
    error::{MatrixError, Result},
    scalar::Scalar,
};

/// A dense, rectangular, row-major matrix of scalars.
///
/// Shape is validated once at construction; the panicking constructor mirrors
/// the fallible one for call sites that build matrices from trusted loops.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<S: Scalar> {
    rows: Vec<Vec<S>>,
}

const LINEAR_SOLVE_OP: &str = "linear solve";

impl<S: Scalar> Matrix<S> {
    /// Construct a new matrix from rows. Panics if rows have differing lengths.
    pub fn new(rows: Vec<Vec<S>>) -> Self {
        Self::try_new(rows).expect("All matrix rows must have the same length")
    }

    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(rows: Vec<Vec<S>>) -> Result<Self> {
        ensure_rectangular_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Create a zero matrix of size (rows x cols).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![S::zero(); cols]; rows],
        }
    }

    /// Vandermonde matrix whose row `i` is `[x_i^0, x_i^1, ..., x_i^(cols-1)]`.
    pub fn vandermonde(nodes: &[S], cols: usize) -> Self {
        let rows = nodes
            .iter()
            .map(|x| {
                let mut row = Vec::with_capacity(cols);
                let mut power = S::one();
                for _ in 0..cols {
                    row.push(power.clone());
                    power = power * x.clone();
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<S>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Solve `self * a = rhs` by Gaussian elimination with partial pivoting.
    ///
    /// Both `self` and `rhs` are reduced in place: on success `self` holds the
    /// upper-triangular factor and `rhs` the matching transformed vector.
    /// For each pivot column the row with the largest magnitude in that
    /// column (first one wins on ties) is swapped into place. A pivot that is
    /// exactly zero after the swap yields [`MatrixError::Singular`].
    pub fn solve_in_place(&mut self, rhs: &mut [S]) -> Result<Vec<S>> {
        let n = self.rows();
        if n == 0 {
            return Err(MatrixError::Empty {
                operation: LINEAR_SOLVE_OP,
            }
            .into());
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                operation: LINEAR_SOLVE_OP,
                rows: n,
                cols: self.cols(),
            }
            .into());
        }
        if rhs.len() != n {
            return Err(MatrixError::RhsLengthMismatch {
                rows: n,
                rhs_len: rhs.len(),
            }
            .into());
        }

        for col in 0..n {
            let pivot = self.pivot_row(col);
            self.rows.swap(col, pivot);
            rhs.swap(col, pivot);

            if self.rows[col][col].is_zero() {
                return Err(MatrixError::Singular { column: col }.into());
            }

            for row in col + 1..n {
                let factor =
                    self.rows[row][col].clone() / self.rows[col][col].clone();
                for j in col..n {
                    let reduced = self.rows[row][j].clone()
                        - factor.clone() * self.rows[col][j].clone();
                    self.rows[row][j] = reduced;
                }
                let reduced = rhs[row].clone() - factor * rhs[col].clone();
                rhs[row] = reduced;
            }
        }

        let mut solution = vec![S::zero(); n];
        for i in (0..n).rev() {
            let mut acc = rhs[i].clone();
            for j in i + 1..n {
                acc = acc - self.rows[i][j].clone() * solution[j].clone();
            }
            solution[i] = acc / self.rows[i][i].clone();
        }

        Ok(solution)
    }

    fn pivot_row(&self, col: usize) -> usize {
        let mut best = col;
        for row in col + 1..self.rows() {
            if self.rows[row][col].magnitude() > self.rows[best][col].magnitude()
            {
                best = row;
            }
        }
        best
    }
}

fn ensure_rectangular_rows<S>(
    rows: &[Vec<S>],
) -> core::result::Result<usize, MatrixError> {
    if let Some((first, rest)) = rows.split_first() {
        let expected = first.len();
        for (offset, row) in rest.iter().enumerate() {
            if row.len() != expected {
                return Err(MatrixError::Ragged {
                    row: offset + 1,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(expected)
    } else {
        Ok(0)
    }
}

/// Immutable indexing by row.
impl<S: Scalar> Index<usize> for Matrix<S> {
    type Output = Vec<S>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

/// Mutable indexing by row.
impl<S: Scalar> IndexMut<usize> for Matrix<S> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// Deref to a slice of rows.
impl<S: Scalar> Deref for Matrix<S> {
    type Target = [Vec<S>];
    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_row(f, row)?;
        }
        Ok(())
    }
}

/// Write `[a, b, c]`.
pub fn write_row<S: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    row: &[S],
) -> fmt::Result {
    write!(f, "[")?;
    for (j, value) in row.iter().enumerate() {
        if j > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}
