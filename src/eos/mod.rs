//! Seawater equation of state: UNESCO 1980 International Equation of State (EOS-80).
//!
//! This module provides:
//! - One-atmosphere (reference) density ρ(S, T)
//! - Secant bulk modulus K(S, T, P)
//! - In-situ density ρ(S, T, P) = ρ(S, T) / (1 − P/K), both exact and rounded
//!
//! Units conventions:
//! - Salinity `s` in PSU
//! - Temperature `t` in °C
//! - Pressure `p_dbar` in decibar (gauge, 0 at the sea surface)
//! - Density in kg/m³
//!
//! Design notes:
//! - No range validation. The oceanographic validity range is S ∈ [0, 42],
//!   T ∈ [−2, 40], P ∈ [0, 10000]; outside of it the polynomial is simply
//!   evaluated and the result may be unphysical, NaN or infinite.
//! - `S^1.5` is evaluated as `S·√|S|`. For S ≥ 0 this is the usual power; for
//!   S < 0 it keeps the surface finite and continuously differentiable so that
//!   Newton iterates overshooting below zero can walk back.
//! - Pressure enters K and the compression term `1 − P/K` exactly as given.
//! - [`density_of`] rounds to [`DENSITY_DECIMALS`]; the rounded value is the
//!   public contract. Use [`exact_density_of`] where a smooth surface is
//!   needed (numerical derivatives).
//!
//! # Examples
//! ```rust
//! use seawater_rs::eos::density_of;
//!
//! assert_eq!(density_of(35.0, 25.0, 0.0), 1023.34);
//! assert_eq!(density_of(0.0, 5.0, 0.0), 999.97);
//! ```
//!
//! # Panics
//! None of the functions panic.

mod coefficients;

use coefficients::*;

/// Number of decimal places kept by [`density_of`].
pub const DENSITY_DECIMALS: i32 = 2;

/// Evaluate `c[0] + c[1]·x + c[2]·x² + …` (Horner scheme).
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// `S^1.5`, odd-extended to negative salinity.
fn s_pow_1_5(s: f64) -> f64 {
    s * s.abs().sqrt()
}

/// One-atmosphere density ρ(S, T) in kg/m³ (P = 0).
pub fn reference_density(s: f64, t: f64) -> f64 {
    poly(&RHO_W, t) + poly(&RHO_S, t) * s + poly(&RHO_S15, t) * s_pow_1_5(s) + RHO_S2 * s * s
}

/// Secant bulk modulus K(S, T, P).
pub fn secant_bulk_modulus(s: f64, t: f64, p: f64) -> f64 {
    let s15 = s_pow_1_5(s);

    let k0 = poly(&K_W, t) + poly(&K_S, t) * s + poly(&K_S15, t) * s15;
    let a = poly(&K_P, t) + poly(&K_PS, t) * s + K_PS15 * s15;
    let b = poly(&K_P2, t) + poly(&K_P2S, t) * s;

    k0 + a * p + b * p * p
}

/// Unrounded in-situ density in kg/m³.
pub fn exact_density_of(s: f64, t: f64, p_dbar: f64) -> f64 {
    let rho = reference_density(s, t);
    if p_dbar == 0.0 {
        return rho;
    }
    let k = secant_bulk_modulus(s, t, p_dbar);
    rho / (1.0 - p_dbar / k)
}

/// In-situ seawater density in kg/m³, rounded to hundredths.
///
/// Inputs:
/// - `s`: practical salinity (PSU)
/// - `t`: temperature (°C)
/// - `p_dbar`: pressure (dbar), `0.0` for surface water
///
/// Rounding is half away from zero at the second decimal.
pub fn density_of(s: f64, t: f64, p_dbar: f64) -> f64 {
    round_to(exact_density_of(s, t, p_dbar), DENSITY_DECIMALS)
}

/// [`density_of`] at the sea surface (P = 0).
pub fn surface_density_of(s: f64, t: f64) -> f64 {
    density_of(s, t, 0.0)
}

/// Round a floating-point value to a specified number of decimal digits.
///
/// Ties round away from zero (`f64::round`). Non-finite values pass through.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pure_water_has_maximum_density_near_four_degrees() {
        let at_4 = reference_density(0.0, 4.0);
        assert!(at_4 > reference_density(0.0, 2.0));
        assert!(at_4 > reference_density(0.0, 6.0));
        assert_abs_diff_eq!(at_4, 999.975, epsilon = 1e-3);
    }

    #[test]
    fn odd_extension_matches_power_for_positive_salinity() {
        for s in [0.0, 0.5, 10.0, 35.0, 42.0] {
            assert_abs_diff_eq!(s_pow_1_5(s), f64::powf(s, 1.5), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(s_pow_1_5(-4.0), -8.0, epsilon = 1e-12);
    }

    #[test]
    fn surface_density_skips_compression() {
        assert_eq!(
            exact_density_of(35.0, 10.0, 0.0),
            reference_density(35.0, 10.0)
        );
    }

    #[test]
    fn bulk_modulus_matches_unesco_check_values() {
        // UNESCO (1981) check values; P is used as given.
        assert_abs_diff_eq!(secant_bulk_modulus(0.0, 5.0, 0.0), 20_337.80375, epsilon = 0.01);
        assert_abs_diff_eq!(secant_bulk_modulus(35.0, 5.0, 0.0), 22_185.93358, epsilon = 0.01);
        assert_abs_diff_eq!(
            secant_bulk_modulus(35.0, 25.0, 1_000.0),
            27_108.94504,
            epsilon = 0.05
        );
    }

    #[test]
    fn pressure_increases_density() {
        let surface = exact_density_of(35.0, 10.0, 0.0);
        let deep = exact_density_of(35.0, 10.0, 4_000.0);
        assert!(deep > surface);
    }

    #[test]
    fn non_finite_inputs_propagate_without_panicking() {
        assert!(exact_density_of(f64::NAN, 10.0, 0.0).is_nan());
        assert!(density_of(35.0, f64::NAN, 100.0).is_nan());
        assert!(!density_of(35.0, 10.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn round_to_two_decimals_is_half_away_from_zero() {
        assert_eq!(round_to(1.005_000_1, 2), 1.01);
        assert_eq!(round_to(-2.345_1, 2), -2.35);
        assert_eq!(round_to(1023.343, 2), 1023.34);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
