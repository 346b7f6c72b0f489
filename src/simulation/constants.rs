//! Physical constants and unit conversion factors.
//!
//! Everything inside the simulation is in metres, kilograms, seconds and
//! radians; these factors translate input data into those base units.

use std::f64::consts::{PI, TAU};

pub const M_PER_AU: f64 = 149_597_870_691.0;
pub const KM_PER_AU: f64 = 1.496e8;
pub const M_PER_KM: f64 = 1000.0;
pub const SEC_PER_DAY: f64 = 86_400.0;
pub const SEC_PER_YR: f64 = 31_556_952.0;

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Solar mass (kg)
pub const M_SUN: f64 = 1.9891e30;

/// Julian date of the J2000.0 epoch
pub const J2000_JD: f64 = 2_451_545.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Wrap an angle into [0, 2pi)
pub fn normalize_radians(x: f64) -> f64 {
    let a = x % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn normalize_wraps_negative_and_large_angles() {
        assert_relative_eq!(normalize_radians(-PI / 2.0), 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_radians(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(normalize_radians(0.0), 0.0);
    }

    #[test]
    fn degrees_convert_to_radians() {
        assert_relative_eq!(to_radians(180.0), PI, epsilon = 1e-12);
        assert_relative_eq!(to_radians(-90.0), -PI / 2.0, epsilon = 1e-12);
    }
}
