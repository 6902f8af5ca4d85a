//! Polynomials in the monomial basis `a_0 + a_1 x + ... + a_d x^d`.

use std::fmt;

use num_bigint::BigInt;

use crate::scalar::Scalar;

/// Dense polynomial with coefficients stored lowest degree first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<S: Scalar> {
    coefficients: Vec<S>,
}

impl<S: Scalar> Polynomial<S> {
    pub fn new(coefficients: Vec<S>) -> Self {
        Self { coefficients }
    }

    /// Build from integer coefficients, lowest degree first.
    pub fn from_integers<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = BigInt>,
    {
        Self::new(
            coefficients
                .into_iter()
                .map(|c| S::from_bigint(&c))
                .collect(),
        )
    }

    pub fn coefficients(&self) -> &[S] {
        &self.coefficients
    }

    /// `a_0`, or zero for the empty polynomial.
    pub fn constant_term(&self) -> S {
        self.coefficients.first().cloned().unwrap_or_else(S::zero)
    }

    /// Index of the highest non-zero coefficient; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, x: &S) -> S {
        self.coefficients
            .iter()
            .rev()
            .fold(S::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Evaluate at an integer node.
    pub fn evaluate_at(&self, x: u64) -> S {
        self.evaluate(&S::from_abscissa(x))
    }
}

impl<S: Scalar> From<Vec<S>> for Polynomial<S> {
    fn from(coefficients: Vec<S>) -> Self {
        Self::new(coefficients)
    }
}

impl<S: Scalar> fmt::Display for Polynomial<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        for (power, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if wrote {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x^{power}")?,
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;
    use num_rational::BigRational;
    use proptest::collection::vec;
    use test_strategy::proptest;

    type P = Polynomial<BigRational>;

    fn q(v: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(v))
    }

    #[test]
    fn evaluates_with_horner() {
        let p: P = poly![2, 1, 1];
        assert_eq!(p.evaluate_at(0), q(2));
        assert_eq!(p.evaluate_at(1), q(4));
        assert_eq!(p.evaluate_at(3), q(14));
    }

    #[test]
    fn empty_polynomial_is_zero() {
        let p: P = Polynomial::new(Vec::new());
        assert_eq!(p.constant_term(), q(0));
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate_at(5), q(0));
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn degree_ignores_trailing_zeros() {
        let p: P = poly![1, 2, 0, 0];
        assert_eq!(p.degree(), Some(1));
        let zero: P = poly![0, 0];
        assert_eq!(zero.degree(), None);
    }

    #[test]
    fn display_skips_zero_terms() {
        let p: P = poly![3, 0, 1];
        assert_eq!(p.to_string(), "3 + 1x^2");
        let q: Polynomial<f64> = poly![0, 2];
        assert_eq!(q.to_string(), "2x");
    }

    #[proptest]
    fn float_and_exact_agree_on_small_inputs(
        #[strategy(vec(-50i64..50, 1..5))] coefficients: Vec<i64>,
        #[strategy(0u64..20)] x: u64,
    ) {
        let exact: P = Polynomial::from_integers(
            coefficients.iter().copied().map(BigInt::from),
        );
        let float: Polynomial<f64> = Polynomial::from_integers(
            coefficients.iter().copied().map(BigInt::from),
        );
        assert_eq!(
            exact.evaluate_at(x).round_half_away(),
            float.evaluate_at(x).round_half_away()
        );
    }
}
