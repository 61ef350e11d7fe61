use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use seawater_rs::{
    FailureKind, NonConvergenceEvent, SalinitySolver, density_of, exact_density_of, salinity_of,
};
use std::sync::Mutex;

const SALINITIES: [f64; 5] = [0.0, 10.0, 20.0, 35.0, 40.0];
const TEMPERATURES: [f64; 5] = [-2.0, 0.0, 10.0, 25.0, 35.0];

#[test]
fn reference_densities_at_surface() {
    assert_eq!(density_of(35.0, 25.0, 0.0), 1023.34);
    assert_eq!(density_of(0.0, 5.0, 0.0), 999.97);
    assert_eq!(density_of(35.0, 0.0, 0.0), 1028.11);
}

#[test]
fn reference_densities_under_pressure() {
    assert_eq!(density_of(35.0, 25.0, 100.0), 1027.61);
    assert_eq!(density_of(35.0, 25.0, 1_000.0), 1062.54);
    assert_eq!(density_of(0.0, 5.0, 1_000.0), 1044.13);
    assert_abs_diff_eq!(density_of(35.0, 25.0, 10_000.0), 1252.18, epsilon = 0.011);
}

#[test]
fn density_has_at_most_two_decimals() {
    for s in [0.0, 3.3, 17.77, 35.0, 41.9] {
        for t in [-2.0, 4.4, 18.25, 39.9] {
            for p in [0.0, 123.4, 5000.0] {
                let d = density_of(s, t, p);
                let cents = d * 100.0;
                assert_eq!(cents.round() / 100.0, d, "residue in {d}");
            }
        }
    }
}

#[test]
fn round_trip_on_exact_surface() {
    for s in SALINITIES {
        for t in TEMPERATURES {
            let recovered = salinity_of(exact_density_of(s, t, 0.0), t)
                .unwrap_or_else(|e| panic!("S={s} T={t}: {e}"));
            assert_abs_diff_eq!(recovered, s, epsilon = 1e-3);
        }
    }
}

#[test]
fn round_trip_through_rounded_density_stays_within_rounding_quantum() {
    // 0.005 kg/m^3 of rounding over dρ/dS >= 0.73 is below 0.007 PSU.
    for s in SALINITIES {
        for t in TEMPERATURES {
            let recovered = salinity_of(density_of(s, t, 0.0), t)
                .unwrap_or_else(|e| panic!("S={s} T={t}: {e}"));
            assert_abs_diff_eq!(recovered, s, epsilon = 1e-2);
        }
    }
}

#[test]
fn density_increases_with_salinity() {
    for t in TEMPERATURES {
        let mut prev = density_of(0.0, t, 0.0);
        for i in 1..=42 {
            let d = density_of(i as f64, t, 0.0);
            assert!(d > prev, "not increasing at S={i}, T={t}");
            prev = d;
        }

        let mut prev = exact_density_of(0.0, t, 0.0);
        for i in 1..=4200 {
            let d = exact_density_of(i as f64 / 100.0, t, 0.0);
            assert!(d > prev);
            prev = d;
        }
    }
}

#[test]
fn unreachable_density_is_a_failure_not_a_value() {
    let events = Mutex::new(Vec::new());
    let solver = SalinitySolver::new()
        .with_observer(|e: &NonConvergenceEvent| events.lock().unwrap().push(*e));

    let err = solver.solve(1.0, 25.0).unwrap_err();
    assert!(matches!(
        err.kind(),
        FailureKind::DegenerateDerivative | FailureKind::IterationLimit
    ));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, err.kind());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = density_of(33.3, 12.7, 250.0);
    let b = density_of(33.3, 12.7, 250.0);
    assert_eq!(a.to_bits(), b.to_bits());

    let s1 = salinity_of(1025.12, 12.0).unwrap();
    let s2 = salinity_of(1025.12, 12.0).unwrap();
    assert_eq!(s1.to_bits(), s2.to_bits());
}

#[test]
fn solver_is_shareable_across_threads() {
    let solver = SalinitySolver::new();
    let expected = solver.solve(1026.0, 8.0).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(solver.solve(1026.0, 8.0).unwrap(), expected));
        }
    });
}

proptest! {
    #[test]
    fn inversion_recovers_oceanographic_salinity(s in 0.0_f64..42.0, t in -2.0_f64..40.0) {
        let recovered = salinity_of(exact_density_of(s, t, 0.0), t).unwrap();
        prop_assert!((recovered - s).abs() < 1e-3, "S={} T={} got {}", s, t, recovered);
    }
}
