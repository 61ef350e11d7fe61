use serde::Serialize;

use crate::error::{FailureKind, NonConvergence};

use super::solver::SolveReport;

/// Structured record of a failed salinity inversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NonConvergenceEvent {
    pub kind: FailureKind,
    pub last_salinity: f64,
    pub iterations: usize,
    pub observed_density: f64,
    pub temperature: f64,
}

impl NonConvergenceEvent {
    pub fn new(err: &NonConvergence, observed_density: f64, temperature: f64) -> Self {
        Self {
            kind: err.kind(),
            last_salinity: err.last_salinity(),
            iterations: err.iterations(),
            observed_density,
            temperature,
        }
    }
}

/// Receives solver outcomes.
///
/// Closures taking `&NonConvergenceEvent` are observers too, which makes it
/// easy to collect failures in tests or batch jobs.
pub trait SolveObserver {
    fn on_converged(&self, _report: &SolveReport) {}

    fn on_non_convergence(&self, event: &NonConvergenceEvent);
}

impl<F> SolveObserver for F
where
    F: Fn(&NonConvergenceEvent),
{
    fn on_non_convergence(&self, event: &NonConvergenceEvent) {
        self(event)
    }
}

/// Default observer: forwards outcomes to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn on_converged(&self, report: &SolveReport) {
        tracing::debug!(
            salinity = report.salinity,
            iterations = report.iterations,
            "salinity inversion converged"
        );
    }

    fn on_non_convergence(&self, event: &NonConvergenceEvent) {
        tracing::warn!(
            kind = %event.kind,
            last_salinity = event.last_salinity,
            iterations = event.iterations,
            observed_density = event.observed_density,
            temperature = event.temperature,
            "salinity inversion did not converge"
        );
    }
}
