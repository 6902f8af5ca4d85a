//! Human-readable walkthrough of a recovery.
//!
//! All artifacts are computed when the report is built; `Display` only
//! formats them.

use std::fmt;

use math::{matrix::write_row, num_bigint::BigInt, BigRational, Polynomial, Scalar};

use crate::{
    error::Result,
    interpolation::{BarycentricWeights, DividedDifferences, Method, VandermondeSystem},
    params::Backend,
    points::Point,
    recovery::Recovery,
    validate::{cross_validate, CrossValidation},
};

const RULE_WIDTH: usize = 50;

pub struct Report<S: Scalar> {
    points: Vec<Point>,
    selected: Vec<Point>,
    newton: DividedDifferences<S>,
    system: VandermondeSystem<S>,
    coefficients: Polynomial<S>,
    barycentric: BarycentricWeights<S>,
    validation: CrossValidation,
    answer: Method,
    secret: BigInt,
}

impl<S: Scalar> Report<S> {
    /// Report on `selected`, a prefix of `points`, with Newton as the answer.
    pub fn new(points: &[Point], selected: &[Point]) -> Result<Self> {
        let validation = cross_validate::<S>(selected)?;
        Self::build(points, selected, validation, Method::Newton, None)
    }

    /// Report on an existing recovery without recomputing its secret.
    pub fn from_recovery(recovery: &Recovery) -> Result<Self> {
        Self::build(
            &recovery.points,
            recovery.selected(),
            recovery.validation.clone(),
            recovery.answer,
            Some(recovery.secret.clone()),
        )
    }

    fn build(
        points: &[Point],
        selected: &[Point],
        validation: CrossValidation,
        answer: Method,
        secret: Option<BigInt>,
    ) -> Result<Self> {
        let newton = DividedDifferences::new(selected)?;
        let system = VandermondeSystem::new(selected)?;
        let coefficients = system.solve()?;
        let barycentric = BarycentricWeights::new(selected)?;
        let secret = match secret.or_else(|| validation.get(answer).cloned()) {
            Some(secret) => secret,
            None => answer.solve::<S>(selected)?,
        };

        Ok(Self {
            points: points.to_vec(),
            selected: selected.to_vec(),
            newton,
            system,
            coefficients,
            barycentric,
            validation,
            answer,
            secret,
        })
    }

    pub fn divided_differences(&self) -> &DividedDifferences<S> {
        &self.newton
    }

    pub fn vandermonde(&self) -> &VandermondeSystem<S> {
        &self.system
    }

    pub fn coefficients(&self) -> &Polynomial<S> {
        &self.coefficients
    }

    pub fn barycentric(&self) -> &BarycentricWeights<S> {
        &self.barycentric
    }

    pub fn validation(&self) -> &CrossValidation {
        &self.validation
    }

    pub fn secret(&self) -> &BigInt {
        &self.secret
    }

    fn write_newton(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.newton.table();
        write!(f, "x_i\tf[x_i]")?;
        for i in 1..table.len() {
            write!(f, "\tf[x0..x{i}]")?;
        }
        writeln!(f)?;
        for (x, row) in self.newton.nodes().iter().zip(table) {
            write!(f, "{x}")?;
            for value in row {
                write!(f, "\t{value}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", self.newton.newton_form())
    }

    fn write_gaussian(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vandermonde matrix | y:")?;
        for (row, y) in self.system.matrix().iter().zip(self.system.rhs()) {
            write_row(f, row)?;
            writeln!(f, " | {y}")?;
        }
        write!(f, "Coefficients (a0, a1, ...): ")?;
        write_row(f, self.coefficients.coefficients())?;
        writeln!(f)?;
        writeln!(f, "Polynomial: {}", self.coefficients)
    }

    fn write_barycentric(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weights: ")?;
        write_row(f, self.barycentric.weights())?;
        writeln!(f)
    }

    fn write_method_secret(
        &self,
        f: &mut fmt::Formatter<'_>,
        method: Method,
    ) -> fmt::Result {
        match self.validation.get(method) {
            Some(value) => writeln!(f, "Secret from {}: {value}", method.title()),
            None => Ok(()),
        }
    }
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f)?;
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

impl<S: Scalar> fmt::Display for Report<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Backend: {}", S::NAME)?;
        for point in &self.points {
            writeln!(f, "Point {}: decimal {}", point.x, point.y)?;
        }
        writeln!(f, "Total points available: {}", self.points.len())?;
        write!(f, "Selected points:")?;
        for point in &self.selected {
            write!(f, " {point}")?;
        }
        writeln!(f)?;

        banner(f, "METHOD 1: NEWTON'S DIVIDED DIFFERENCES")?;
        self.write_newton(f)?;
        self.write_method_secret(f, Method::Newton)?;

        banner(f, "METHOD 2: GAUSSIAN ELIMINATION")?;
        self.write_gaussian(f)?;
        self.write_method_secret(f, Method::Gaussian)?;

        banner(f, "METHOD 3: BARYCENTRIC LAGRANGE")?;
        self.write_barycentric(f)?;
        self.write_method_secret(f, Method::Barycentric)?;

        banner(f, "VERIFICATION")?;
        for (method, value) in self.validation.values() {
            writeln!(f, "{} result: {value}", method.title())?;
        }
        writeln!(
            f,
            "All methods agree: {}",
            if self.validation.agree() { "YES" } else { "NO" }
        )?;

        banner(
            f,
            &format!(
                "FINAL ANSWER ({}): the secret (constant term) is {}",
                self.answer, self.secret
            ),
        )
    }
}

/// Build and render the report for `recovery` on `backend`.
pub fn render_report(recovery: &Recovery, backend: Backend) -> Result<String> {
    Ok(match backend {
        Backend::Exact => Report::<BigRational>::from_recovery(recovery)?.to_string(),
        Backend::Float => Report::<f64>::from_recovery(recovery)?.to_string(),
    })
}
