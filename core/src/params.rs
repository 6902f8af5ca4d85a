use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{RecoveryError, Result},
    interpolation::Method,
};

/// Share documents looked up when none are named on the command line.
pub const DEFAULT_FILES: [&str; 2] = ["test1.json", "test2.json"];

/// Share count `n` and reconstruction threshold `k`.
///
/// `k` points determine a polynomial of degree `k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawThreshold")]
pub struct ThresholdConfig {
    n: usize,
    k: usize,
}

#[derive(Deserialize)]
struct RawThreshold {
    n: usize,
    k: usize,
}

impl TryFrom<RawThreshold> for ThresholdConfig {
    type Error = RecoveryError;

    fn try_from(raw: RawThreshold) -> Result<Self> {
        Self::new(raw.n, raw.k)
    }
}

impl ThresholdConfig {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if !validate_threshold_config(k, n) {
            return Err(RecoveryError::InvalidThreshold { k, n });
        }
        Ok(Self { n, k })
    }

    #[inline]
    pub const fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Degree of the reconstructed polynomial.
    #[inline]
    pub const fn degree(&self) -> usize {
        self.k - 1
    }
}

/// `1 <= k <= n`.
pub fn validate_threshold_config(k: usize, n: usize) -> bool {
    (1..=n).contains(&k)
}

/// Arithmetic used by the interpolators.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Arbitrary-precision rationals; results are exact.
    #[default]
    Exact,
    /// Native `f64`, adequate for modest coefficient magnitudes.
    Float,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Exact, Backend::Float];

    pub const fn as_str(self) -> &'static str {
        match self {
            Backend::Exact => "exact",
            Backend::Float => "float",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("backend", s))
    }
}

/// Error raised when a backend or method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Settings for one run of the `recover` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryConfig {
    pub backend: Backend,
    /// Print the diagnostic report for every document.
    pub report: bool,
    /// Method whose value is reported as the secret.
    pub answer: Method,
    pub files: Vec<PathBuf>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            report: false,
            answer: Method::Newton,
            files: DEFAULT_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}
