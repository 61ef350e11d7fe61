use serde::Serialize;
use thiserror::Error;

/// Why a salinity inversion gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The finite-difference slope vanished or the Newton step was not finite.
    DegenerateDerivative,
    /// The iteration budget ran out before the step fell below tolerance.
    IterationLimit,
}

impl core::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::DegenerateDerivative => "degenerate_derivative",
            Self::IterationLimit => "iteration_limit",
        })
    }
}

/// The salinity solver found no salinity consistent with the observed density.
///
/// Returned as a value, never raised, so batch callers can tell
/// "no physically consistent salinity" apart from a programming error.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum NonConvergence {
    #[error(
        "salinity inversion broke down at iteration {iteration}: degenerate derivative at S = {salinity}"
    )]
    DegenerateDerivative { salinity: f64, iteration: usize },

    #[error("salinity inversion did not converge within {iterations} iterations (last S = {salinity})")]
    IterationLimit { salinity: f64, iterations: usize },
}

impl NonConvergence {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DegenerateDerivative { .. } => FailureKind::DegenerateDerivative,
            Self::IterationLimit { .. } => FailureKind::IterationLimit,
        }
    }

    /// Last salinity iterate (PSU); may be NaN or far outside [0, 42].
    pub fn last_salinity(&self) -> f64 {
        match *self {
            Self::DegenerateDerivative { salinity, .. } | Self::IterationLimit { salinity, .. } => {
                salinity
            }
        }
    }

    /// Iterations spent before giving up.
    pub fn iterations(&self) -> usize {
        match *self {
            Self::DegenerateDerivative { iteration, .. } => iteration,
            Self::IterationLimit { iterations, .. } => iterations,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not initialise logging: {0}")]
    Logging(String),

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide a subcommand or --input")]
    MissingInputData,

    #[error(transparent)]
    NonConvergence(#[from] NonConvergence),
}
