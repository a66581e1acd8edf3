//! Knud Thomsen's approximation of an ellipsoid's surface area.
//!
//! `S ≈ 4π * ((a^p b^p + a^p c^p + b^p c^p) / 3)^(1/p)` with `p ≈ 1.6075`,
//! which stays within about 1% of the exact value.

use std::f64::consts::PI;

use super::Vector3;

/// Exponent giving the smallest worst-case relative error.
pub const THOMSEN_P: f64 = 1.6075;

/// Selects which expression [`surface_area`] evaluates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaFormula {
    /// The Thomsen approximation over the three radius pairs.
    #[default]
    Thomsen,
    /// Reproduces an earlier expression that used `rx * ry` for all three
    /// terms, so `rz` is ignored. It only matches [`AreaFormula::Thomsen`]
    /// when `rx * ry == ry * rz == rz * rx`, i.e. for spheres.
    Legacy,
}

/// Approximate surface area of an ellipsoid with the given radii.
#[must_use]
pub fn surface_area(radii: &Vector3, formula: AreaFormula) -> f64 {
    let (rx, ry, rz) = (radii.x, radii.y, radii.z);
    let mean = match formula {
        AreaFormula::Thomsen => {
            ((rx * ry).powf(THOMSEN_P) + (ry * rz).powf(THOMSEN_P) + (rz * rx).powf(THOMSEN_P))
                / 3.0
        }
        // Three copies of the same pair, see `AreaFormula::Legacy`.
        AreaFormula::Legacy => {
            ((rx * ry).powf(THOMSEN_P) + (rx * ry).powf(THOMSEN_P) + (rx * ry).powf(THOMSEN_P))
                / 3.0
        }
    };
    4.0 * PI * mean.powf(1.0 / THOMSEN_P)
}
