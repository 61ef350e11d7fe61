//! Salinity inversion of the EOS-80 surface density.

pub mod calculator;
pub mod observer;
pub mod solver;

pub use observer::{NonConvergenceEvent, SolveObserver, TracingObserver};
pub use solver::{
    DERIVATIVE_STEP, INVERSION_PRESSURE_DBAR, SalinitySolver, SolveReport, salinity_of,
};
