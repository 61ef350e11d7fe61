use serde::Serialize;

use crate::conductivity::{conductivity_to_concentration, concentration_to_conductivity};
use crate::eos::density_of;
use crate::error::NonConvergence;
use crate::models::{Request, WaterSample};

use super::observer::SolveObserver;
use super::solver::SalinitySolver;

/// Result of one [`Request`], shaped for UI or API responses.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CalculationSummary {
    Density {
        sample: WaterSample,
        density_kg_per_m3: f64,
    },
    Salinity {
        density_kg_per_m3: f64,
        temperature: f64,
        salinity_psu: f64,
        iterations: usize,
    },
    Conductivity {
        ppm: f64,
        temperature: f64,
        us_per_cm: f64,
    },
    Concentration {
        us_per_cm: f64,
        temperature: f64,
        ppm: f64,
    },
}

/// Evaluate a request.
///
/// `solver` carries the observer; per-request `settings` in a salinity
/// request override the solver's own.
pub fn compute_summary<O: SolveObserver + Clone>(
    request: &Request,
    solver: &SalinitySolver<O>,
) -> Result<CalculationSummary, NonConvergence> {
    let summary = match *request {
        Request::Density(sample) => CalculationSummary::Density {
            sample,
            density_kg_per_m3: density_of(sample.salinity, sample.temperature, sample.pressure),
        },
        Request::Salinity {
            density,
            temperature,
            settings,
        } => {
            let report = match settings {
                Some(settings) => solver
                    .clone()
                    .with_settings(settings)
                    .solve_report(density, temperature)?,
                None => solver.solve_report(density, temperature)?,
            };
            CalculationSummary::Salinity {
                density_kg_per_m3: density,
                temperature,
                salinity_psu: report.salinity,
                iterations: report.iterations,
            }
        }
        Request::Conductivity { ppm, temperature } => CalculationSummary::Conductivity {
            ppm,
            temperature,
            us_per_cm: concentration_to_conductivity(ppm, temperature),
        },
        Request::Concentration { us_cm, temperature } => CalculationSummary::Concentration {
            us_per_cm: us_cm,
            temperature,
            ppm: conductivity_to_concentration(us_cm, temperature),
        },
    };
    Ok(summary)
}
