//! Seawater properties: UNESCO EOS-80 density, its Newton-Raphson inversion
//! for salinity, and temperature-compensated conductivity/TDS conversion.

pub mod adapters;
pub mod conductivity;
pub mod eos;
pub mod error;
pub mod models;
pub mod salinity;

pub use crate::conductivity::{concentration_to_conductivity, conductivity_to_concentration};
pub use crate::eos::{density_of, exact_density_of, surface_density_of};
pub use crate::error::{AppError, FailureKind, NonConvergence};
pub use crate::models::{Request, SolverSettings, WaterSample};
pub use crate::salinity::calculator::{CalculationSummary, compute_summary};
pub use crate::salinity::{
    NonConvergenceEvent, SalinitySolver, SolveObserver, SolveReport, TracingObserver, salinity_of,
};
