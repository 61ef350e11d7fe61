//! Conductivity ↔ dissolved-solids conversion with linear temperature compensation.
//!
//! Meter readings are referenced to 25 °C and corrected with a fixed
//! coefficient of 2.12 % per °C:
//!
//! `factor(T) = 1 + 0.0212 · (T − 25)`
//!
//! - `concentration_to_conductivity(ppm, T) = ppm · factor(T)` (µS/cm)
//! - `conductivity_to_concentration(µS/cm, T) = µS/cm / factor(T)` (ppm)
//!
//! Both are pure. Near T ≈ −22.17 °C the factor reaches zero and the inverse
//! returns ±∞ or NaN; no validation is applied.
//!
//! # Examples
//! ```rust
//! use seawater_rs::conductivity::{concentration_to_conductivity, conductivity_to_concentration};
//!
//! let us = concentration_to_conductivity(500.0, 20.0);
//! assert!((conductivity_to_concentration(us, 20.0) - 500.0).abs() < 1e-9);
//! ```

/// Temperature the compensation is referenced to (°C).
pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;

/// Change of conductivity per °C, in percent.
pub const TEMPERATURE_COEFFICIENT_PCT: f64 = 2.12;

/// `1 + 0.0212 · (T − 25)`.
pub fn compensation_factor(temperature_c: f64) -> f64 {
    1.0 + (TEMPERATURE_COEFFICIENT_PCT / 100.0) * (temperature_c - REFERENCE_TEMPERATURE_C)
}

/// Dissolved-solids concentration (ppm) to conductivity (µS/cm).
pub fn concentration_to_conductivity(ppm: f64, temperature_c: f64) -> f64 {
    ppm * compensation_factor(temperature_c)
}

/// Conductivity (µS/cm) to dissolved-solids concentration (ppm).
pub fn conductivity_to_concentration(us_per_cm: f64, temperature_c: f64) -> f64 {
    us_per_cm / compensation_factor(temperature_c)
}
