use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ces_consumer::{Parameter, Parameters};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::Args;

/// Errors that can occur while collecting the five parameters.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read parameter file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse parameter file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing value for '{0}' (pass --{0} or set it in the parameter file)")]
    Missing(Parameter),
}

/// A parameter file; every key is optional so flags can fill the gaps.
///
/// ```toml
/// a = 0.5
/// p = 0
/// px = 1.0
/// py = 2.0
/// m = 100
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    pub a: Option<f64>,
    pub p: Option<f64>,
    pub px: Option<f64>,
    pub py: Option<f64>,
    pub m: Option<f64>,
}

impl ParameterFile {
    /// Reads and parses a parameter file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML with
    /// the expected keys.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_owned(),
            source,
        })?;
        let file = toml::from_str(&text).map_err(|source| InputError::Parse {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), ?file, "loaded parameter file");
        Ok(file)
    }
}

/// Merges the parameter file (if any) with command-line flags.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or a parameter is missing
/// from both sources.
pub fn resolve_parameters(args: &Args) -> Result<Parameters, InputError> {
    let file = match &args.params {
        Some(path) => ParameterFile::load(path)?,
        None => ParameterFile::default(),
    };

    let pick = |flag: Option<f64>, stored: Option<f64>, parameter: Parameter| {
        flag.or(stored).ok_or(InputError::Missing(parameter))
    };

    Ok(Parameters {
        a: pick(args.a, file.a, Parameter::A)?,
        p: pick(args.p, file.p, Parameter::P)?,
        px: pick(args.px, file.px, Parameter::Px)?,
        py: pick(args.py, file.py, Parameter::Py)?,
        m: pick(args.m, file.m, Parameter::M)?,
    })
}
