//! Initial-condition representations.
//!
//! A body can be specified either directly by its state vectors or by its
//! Keplerian orbital elements around a central mass. Both resolve to
//! `OrbitalStateVectors` before any `CelestialBody` is built, so the
//! integrator only ever sees Cartesian state.

use nalgebra::Matrix3;

use crate::error::{SimError, SimResult};
use crate::simulation::constants::{normalize_radians, G, SEC_PER_DAY};
use crate::simulation::states::Coord;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 50;

/// Cartesian initial state of a body
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalStateVectors {
    pub name: String,
    pub pos: Coord, // m
    pub vel: Coord, // m/s
    pub mass: f64,  // kg
}

/// Classical Keplerian elements, angles in radians, referenced to J2000
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64, // m
    pub eccentricity: f64,
    pub inclination: f64,
    pub longitude_of_ascending_node: f64,
    pub longitude_of_perihelion: f64,
    pub mean_anomaly: f64, // at J2000
}

impl OrbitalElements {
    fn validate(&self, name: &str) -> SimResult<()> {
        let invalid = |reason: String| SimError::InvalidElements {
            name: name.to_string(),
            reason,
        };

        let values = [
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.longitude_of_ascending_node,
            self.longitude_of_perihelion,
            self.mean_anomaly,
        ];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(invalid("all elements must be finite".to_string()));
        }
        if self.semi_major_axis <= 0.0 {
            return Err(invalid(format!(
                "semi-major axis must be positive, got {}",
                self.semi_major_axis
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(invalid(format!(
                "only elliptic orbits are supported (0 <= e < 1), got e = {}",
                self.eccentricity
            )));
        }
        Ok(())
    }

    /// Argument of perihelion, w = longitude of perihelion - longitude of node
    pub fn argument_of_perihelion(&self) -> f64 {
        self.longitude_of_perihelion - self.longitude_of_ascending_node
    }

    /// Mean motion (rad/s) for gravitational parameter `mu`
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Mean anomaly propagated `days` past J2000, wrapped to [0, 2pi)
    pub fn mean_anomaly_at(&self, mu: f64, days: f64) -> f64 {
        normalize_radians(self.mean_anomaly + self.mean_motion(mu) * days * SEC_PER_DAY)
    }

    /// Solve Kepler's equation M = E - e sin E by Newton-Raphson
    pub fn eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let m = normalize_radians(mean_anomaly);
        let mut ea = if e < 0.8 { m } else { std::f64::consts::PI };

        for _ in 0..KEPLER_MAX_ITER {
            let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
            ea -= delta;
            if delta.abs() < KEPLER_TOLERANCE {
                break;
            }
        }
        ea
    }

    /// Rotation from the perifocal frame into the ecliptic frame
    fn perifocal_to_ecliptic(&self) -> Matrix3<f64> {
        let (sin_o, cos_o) = self.longitude_of_ascending_node.sin_cos();
        let (sin_i, cos_i) = self.inclination.sin_cos();
        let (sin_w, cos_w) = self.argument_of_perihelion().sin_cos();

        Matrix3::new(
            cos_o * cos_w - sin_o * sin_w * cos_i,
            -cos_o * sin_w - sin_o * cos_w * cos_i,
            sin_o * sin_i,

            sin_o * cos_w + cos_o * sin_w * cos_i,
            -sin_o * sin_w + cos_o * cos_w * cos_i,
            -cos_o * sin_i,

            sin_w * sin_i,
            cos_w * sin_i,
            cos_i,
        )
    }

    /// Convert to Cartesian state relative to a central body of mass
    /// `central_mass` sitting at the origin at rest, `days` after J2000.
    pub fn to_state_vectors(
        &self,
        name: &str,
        mass: f64,
        central_mass: f64,
        days: f64,
    ) -> SimResult<OrbitalStateVectors> {
        self.validate(name)?;

        let mu = G * (central_mass + mass);
        let a = self.semi_major_axis;
        let e = self.eccentricity;

        let ea = self.eccentric_anomaly(self.mean_anomaly_at(mu, days));
        let (sin_e, cos_e) = ea.sin_cos();
        let root = (1.0 - e * e).sqrt();

        // perifocal frame, x towards perihelion
        let pos_pf = Coord::new(a * (cos_e - e), a * root * sin_e, 0.0);
        let r = a * (1.0 - e * cos_e);
        let speed_factor = (mu * a).sqrt() / r;
        let vel_pf = Coord::new(-speed_factor * sin_e, speed_factor * root * cos_e, 0.0);

        let rot = self.perifocal_to_ecliptic();

        Ok(OrbitalStateVectors {
            name: name.to_string(),
            pos: rot * pos_pf,
            vel: rot * vel_pf,
            mass,
        })
    }
}

/// Either representation of a body's starting conditions
#[derive(Debug, Clone, PartialEq)]
pub enum InitialState {
    StateVectors(OrbitalStateVectors),
    Elements {
        name: String,
        mass: f64,
        elements: OrbitalElements,
        central_mass: f64,
    },
}

impl InitialState {
    pub fn name(&self) -> &str {
        match self {
            InitialState::StateVectors(sv) => &sv.name,
            InitialState::Elements { name, .. } => name,
        }
    }

    /// Resolve to Cartesian state at `days` past J2000
    pub fn into_state_vectors(self, days: f64) -> SimResult<OrbitalStateVectors> {
        match self {
            InitialState::StateVectors(sv) => Ok(sv),
            InitialState::Elements {
                name,
                mass,
                elements,
                central_mass,
            } => elements.to_state_vectors(&name, mass, central_mass, days),
        }
    }
}
