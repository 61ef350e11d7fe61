use serde::Serialize;

use crate::eos::exact_density_of;
use crate::error::NonConvergence;
use crate::models::SolverSettings;

use super::observer::{NonConvergenceEvent, SolveObserver, TracingObserver};

/// Central finite-difference step (PSU).
pub const DERIVATIVE_STEP: f64 = 1e-5;

/// The inversion only ever works on surface density.
pub const INVERSION_PRESSURE_DBAR: f64 = 0.0;

/// A converged inversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolveReport {
    /// Practical salinity (PSU). Not clamped to the oceanographic range.
    pub salinity: f64,
    pub iterations: usize,
}

struct SolverState {
    salinity: f64,
    iteration: usize,
    last_increment: f64,
}

/// Inverts the EOS-80 surface density for salinity with Newton-Raphson.
///
/// The residual is `f(S) = ρ_obs − ρ(S, T, 0)` on the unrounded density
/// surface; its slope comes from a central difference with step
/// [`DERIVATIVE_STEP`]. Iteration stops as soon as a Newton step is smaller
/// than the tolerance. A vanishing or non-finite slope ends the solve
/// immediately as [`NonConvergence::DegenerateDerivative`]; running out of
/// iterations yields [`NonConvergence::IterationLimit`]. Either way the
/// observer sees a [`NonConvergenceEvent`].
///
/// # Examples
/// ```rust
/// use seawater_rs::salinity::SalinitySolver;
///
/// let s = SalinitySolver::new().solve(1023.343, 25.0).unwrap();
/// assert!((s - 35.0).abs() < 1e-2);
///
/// assert!(SalinitySolver::new().solve(1.0, 25.0).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SalinitySolver<O = TracingObserver> {
    settings: SolverSettings,
    observer: O,
}

impl SalinitySolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: SolveObserver> SalinitySolver<O> {
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_observer<P: SolveObserver>(self, observer: P) -> SalinitySolver<P> {
        SalinitySolver {
            settings: self.settings,
            observer,
        }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Salinity (PSU) whose surface density at `temperature` equals `density`.
    pub fn solve(&self, density: f64, temperature: f64) -> Result<f64, NonConvergence> {
        self.solve_report(density, temperature).map(|r| r.salinity)
    }

    /// Like [`solve`](Self::solve), also reporting the iteration count.
    pub fn solve_report(
        &self,
        density: f64,
        temperature: f64,
    ) -> Result<SolveReport, NonConvergence> {
        let residual =
            |s: f64| density - exact_density_of(s, temperature, INVERSION_PRESSURE_DBAR);
        self.newton(residual, density, temperature)
    }

    /// Newton-Raphson on `residual`; `density` and `temperature` only feed the
    /// failure event.
    fn newton<R>(
        &self,
        residual: R,
        density: f64,
        temperature: f64,
    ) -> Result<SolveReport, NonConvergence>
    where
        R: Fn(f64) -> f64,
    {
        let slope = |s: f64| {
            (residual(s + DERIVATIVE_STEP) - residual(s - DERIVATIVE_STEP))
                / (2.0 * DERIVATIVE_STEP)
        };

        let mut state = SolverState {
            salinity: self.settings.initial_salinity,
            iteration: 0,
            last_increment: f64::INFINITY,
        };

        while state.iteration < self.settings.max_iterations {
            state.iteration += 1;

            let derivative = slope(state.salinity);
            let increment = residual(state.salinity) / derivative;
            if derivative == 0.0 || !derivative.is_finite() || !increment.is_finite() {
                let err = NonConvergence::DegenerateDerivative {
                    salinity: state.salinity,
                    iteration: state.iteration,
                };
                return Err(self.fail(err, density, temperature));
            }

            state.salinity -= increment;
            state.last_increment = increment.abs();

            if state.last_increment < self.settings.tolerance {
                let report = SolveReport {
                    salinity: state.salinity,
                    iterations: state.iteration,
                };
                self.observer.on_converged(&report);
                return Ok(report);
            }
        }

        tracing::trace!(
            last_increment = state.last_increment,
            "salinity iteration budget exhausted"
        );
        let err = NonConvergence::IterationLimit {
            salinity: state.salinity,
            iterations: state.iteration,
        };
        Err(self.fail(err, density, temperature))
    }

    fn fail(&self, err: NonConvergence, density: f64, temperature: f64) -> NonConvergence {
        self.observer
            .on_non_convergence(&NonConvergenceEvent::new(&err, density, temperature));
        err
    }
}

/// Salinity (PSU) from surface density (kg/m³) and temperature (°C) with the
/// default solver settings.
pub fn salinity_of(density: f64, temperature: f64) -> Result<f64, NonConvergence> {
    SalinitySolver::new().solve(density, temperature)
}
