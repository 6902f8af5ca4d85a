//! Shared macros for constructing core math primitives.

/// Construct a [`Polynomial`](crate::poly::Polynomial) from integer
/// coefficients, lowest degree first.
///
/// The scalar backend is inferred from context.
///
/// ```
/// use math::prelude::*;
///
/// let p: Polynomial<BigRational> = poly![3, 0, 1];
/// assert_eq!(p.evaluate_at(2), BigRational::from_abscissa(7));
/// ```
#[macro_export]
macro_rules! poly {
    ($($c:expr),* $(,)?) => {
        $crate::poly::Polynomial::from_integers([
            $($crate::num_bigint::BigInt::from($c)),*
        ])
    };
}
