pub mod error;
pub mod interpolation;
pub mod params;
pub mod points;
pub mod recovery;
pub mod report;
pub mod share;
pub mod utils;
pub mod validate;

pub use error::{RecoveryError, Result};
pub use interpolation::{Interpolator, Method};
pub use math::{BigRational, Scalar};
pub use params::{Backend, RecoveryConfig, ThresholdConfig};
pub use points::Point;
pub use recovery::{recover, recover_secret, recover_with, Recovery};
pub use report::{render_report, Report};
pub use share::{Share, ShareSet};
pub use validate::{cross_validate, cross_validate_with, CrossValidation};
