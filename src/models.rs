use serde::{Deserialize, Serialize};

use crate::eos::density_of;

/// A seawater sample as the equation of state sees it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    /// Practical salinity (PSU).
    pub salinity: f64,
    /// Temperature (°C).
    pub temperature: f64,
    /// Pressure (dbar); 0 at the surface.
    #[serde(default)]
    pub pressure: f64,
}

impl WaterSample {
    pub fn new(salinity: f64, temperature: f64, pressure: f64) -> Self {
        Self {
            salinity,
            temperature,
            pressure,
        }
    }

    pub fn at_surface(salinity: f64, temperature: f64) -> Self {
        Self::new(salinity, temperature, 0.0)
    }

    /// Density (kg/m³) rounded to hundredths.
    pub fn density(&self) -> f64 {
        density_of(self.salinity, self.temperature, self.pressure)
    }
}

/// Newton-Raphson settings for the salinity inversion.
///
/// The defaults are the reference behaviour: start at 35 PSU, give up after
/// 1000 iterations, stop once a step is smaller than 1e-6 PSU.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub initial_salinity: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_salinity: 35.0,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// One calculation request, as read from a JSON document.
///
/// ```json
/// { "op": "salinity", "density": 1023.34, "temperature": 25.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Density(WaterSample),
    Salinity {
        density: f64,
        temperature: f64,
        #[serde(default)]
        settings: Option<SolverSettings>,
    },
    Conductivity {
        ppm: f64,
        temperature: f64,
    },
    Concentration {
        us_cm: f64,
        temperature: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_density_uses_rounded_model() {
        let sample = WaterSample::at_surface(35.0, 25.0);
        assert_eq!(sample.density(), 1023.34);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let s: SolverSettings = serde_json::from_str(r#"{ "max_iterations": 5 }"#).unwrap();
        assert_eq!(s.max_iterations, 5);
        assert_eq!(s.initial_salinity, 35.0);
        assert_eq!(s.tolerance, 1e-6);
    }

    #[test]
    fn requests_are_tagged_by_op() {
        let r: Request =
            serde_json::from_str(r#"{ "op": "density", "salinity": 35.0, "temperature": 0.0 }"#)
                .unwrap();
        assert_eq!(r, Request::Density(WaterSample::at_surface(35.0, 0.0)));

        let r: Request =
            serde_json::from_str(r#"{ "op": "salinity", "density": 1028.11, "temperature": 0.0 }"#)
                .unwrap();
        assert!(matches!(r, Request::Salinity { settings: None, .. }));
    }
}
