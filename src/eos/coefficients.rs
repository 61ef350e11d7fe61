//! EOS-80 coefficient tables.
//!
//! Every table is ordered by ascending power of temperature, so entry `i`
//! multiplies `T^i`. The values are the UNESCO (1981) fit; `K_W[3]` is
//! `1.360447e-2`.
#![allow(clippy::excessive_precision)]

/// Pure water density ρ_w(T) (kg/m³), SMOW polynomial of degree 5.
pub const RHO_W: [f64; 6] = [
    999.842_594,
    6.793_952e-2,
    -9.095_29e-3,
    1.001_685e-4,
    -1.120_083e-6,
    6.536_332e-9,
];

/// Coefficient of `S` in the one-atmosphere density.
pub const RHO_S: [f64; 5] = [8.244_93e-1, -4.089_9e-3, 7.643_8e-5, -8.246_7e-7, 5.387_5e-9];

/// Coefficient of `S^1.5` in the one-atmosphere density.
pub const RHO_S15: [f64; 3] = [-5.724_66e-3, 1.022_7e-4, -1.654_6e-6];

/// Coefficient of `S²` in the one-atmosphere density.
pub const RHO_S2: f64 = 4.831_4e-4;

/// Pure water secant bulk modulus K_w(T) (bar).
pub const K_W: [f64; 5] = [
    19_652.21,
    148.420_6,
    -2.327_105,
    1.360_447e-2,
    -5.155_288e-5,
];

/// Coefficient of `S` in K(S, T, 0).
pub const K_S: [f64; 4] = [54.674_6, -0.603_459, 1.099_87e-2, -6.167e-5];

/// Coefficient of `S^1.5` in K(S, T, 0).
pub const K_S15: [f64; 3] = [7.944e-2, 1.648_3e-2, -5.300_9e-4];

/// Pure water coefficient of `P` (A_w).
pub const K_P: [f64; 4] = [3.239_908, 1.437_13e-3, 1.160_92e-4, -5.779_05e-7];

/// Coefficient of `P·S`.
pub const K_PS: [f64; 3] = [2.283_8e-3, -1.098_1e-5, -1.607_8e-6];

/// Coefficient of `P·S^1.5`.
pub const K_PS15: f64 = 1.910_75e-4;

/// Pure water coefficient of `P²` (B_w).
pub const K_P2: [f64; 3] = [8.509_35e-5, -6.122_93e-6, 5.278_7e-8];

/// Coefficient of `P²·S`.
pub const K_P2S: [f64; 3] = [-9.934_8e-7, 2.081_6e-8, 9.169_7e-10];
