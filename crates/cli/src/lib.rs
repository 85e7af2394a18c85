//! Command-line front end for the CES consumer problem solver.
//!
//! Parameters come from flags, a TOML parameter file, or both (flags win).
//! The result is printed as the same short messages a form-based front end
//! would show, or as JSON with `--json`.

mod input;
mod logger;
mod message;

use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use ces_consumer::CurveConfig;
use clap::Parser;

pub use input::{InputError, ParameterFile, resolve_parameters};
pub use logger::init_logger;
pub use message::{json_output, message, summary};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Find the utility-maximizing bundle for a consumer with CES utility",
    long_about = None
)]
pub struct Args {
    /// TOML file with any of the keys a, p, px, py, m
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Utility share of good X, strictly between 0 and 1
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Substitution parameter, at most 1 (0 is Cobb-Douglas)
    #[arg(long, allow_negative_numbers = true)]
    pub p: Option<f64>,

    /// Price of good X
    #[arg(long, allow_negative_numbers = true)]
    pub px: Option<f64>,

    /// Price of good Y
    #[arg(long, allow_negative_numbers = true)]
    pub py: Option<f64>,

    /// Income
    #[arg(long, allow_negative_numbers = true)]
    pub m: Option<f64>,

    /// Number of x samples per curve
    #[arg(long, default_value_t = CurveConfig::default().samples())]
    pub samples: usize,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Open a window plotting the solution
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,
}

/// Solves the problem described by `args` and prints the outcome to stdout.
///
/// Invalid parameters and unsolvable problems are reported as messages, not
/// errors.
///
/// # Errors
///
/// Returns an error if the parameters cannot be read, the sampling settings
/// are invalid, or output fails.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let parameters = resolve_parameters(args)?;
    let defaults = CurveConfig::default();
    let config = CurveConfig::new(args.samples, defaults.x_min(), defaults.margin())?;

    let result = ces_consumer::solve(&parameters, &config);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &json_output(&parameters, &result))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary(&parameters))?;
        writeln!(out, "{}", message(&result))?;
    }

    #[cfg(feature = "plot")]
    if args.plot {
        if let Ok(report) = result {
            ces_plot::SolutionPlot::new(report.curves)
                .legend()
                .show()
                .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))?;
        }
    }

    Ok(())
}
