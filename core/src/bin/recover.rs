use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{bail, Result, WrapErr};
use math::num_bigint::BigInt;
use recovery_core::{
    params::DEFAULT_FILES, recover, render_report, Backend, Method, RecoveryConfig,
    ShareSet,
};
use tracing::{error, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

const EXPECTED_FORMAT: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    ...
}"#;

/// Recover the constant term of a polynomial from base-encoded shares.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Share documents to process
    #[arg(value_name = "FILE", default_values = DEFAULT_FILES)]
    files: Vec<PathBuf>,

    /// Arithmetic backend: exact or float
    #[arg(short, long, default_value = "exact")]
    backend: Backend,

    /// Print the step-by-step report for every document
    #[arg(short, long)]
    report: bool,

    /// Method whose result is reported as the secret
    #[arg(short, long, default_value = "newton")]
    method: Method,
}

impl From<Cli> for RecoveryConfig {
    fn from(cli: Cli) -> Self {
        Self {
            backend: cli.backend,
            report: cli.report,
            answer: cli.method,
            files: cli.files,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = RecoveryConfig::from(Cli::parse());

    let existing: Vec<&PathBuf> = config
        .files
        .iter()
        .filter(|path| {
            let found = path.is_file();
            if found {
                info!(file = %path.display(), "found share document");
            } else {
                warn!(file = %path.display(), "share document not found");
            }
            found
        })
        .collect();

    if existing.is_empty() {
        eprintln!("No share documents found. Expected format:\n{EXPECTED_FORMAT}");
        bail!("none of the {} requested files exist", config.files.len());
    }

    let mut results = Vec::with_capacity(existing.len());
    for path in existing {
        match process_file(path, &config) {
            Ok(secret) => results.push((path, secret)),
            Err(err) => error!(file = %path.display(), "{err:#}"),
        }
    }

    println!("{}", "=".repeat(60));
    println!("SUMMARY ({} backend)", config.backend);
    println!("{}", "=".repeat(60));
    for (path, secret) in &results {
        println!("{}: {secret}", path.display());
    }
    println!("Processed {} document(s)", results.len());

    if results.is_empty() {
        bail!("no share document could be processed");
    }
    Ok(())
}

fn process_file(path: &Path, config: &RecoveryConfig) -> Result<BigInt> {
    let input = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let shares = ShareSet::from_json(&input)
        .wrap_err_with(|| format!("parsing {}", path.display()))?;
    let recovery = recover(&shares, config.backend, config.answer)
        .wrap_err_with(|| format!("recovering the secret of {}", path.display()))?;

    if config.report {
        println!("{}", render_report(&recovery, config.backend)?);
    }
    if !recovery.validation.agree() {
        warn!(
            file = %path.display(),
            "methods disagree; reporting the {} value",
            recovery.answer
        );
    }
    println!("{}: secret = {}", path.display(), recovery.secret);
    Ok(recovery.secret)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
