//! Core state types for the N-body simulation.
//!
//! - `Coord` is the position/velocity/force vector (metres, m/s, newtons)
//! - `CelestialBody` is one simulated body
//! - `System` holds the list of bodies and the current simulation time `t`
//!
//! Bodies are created once at setup and mutated in place by the integrator
//! for the whole run.

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};
use crate::simulation::elements::OrbitalStateVectors;

pub type Coord = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub m: f64, // mass (kg)
    pub x: Coord, // position (m)
    pub v: Coord, // velocity (m/s)
}

impl CelestialBody {
    /// Build a body, rejecting non-positive or non-finite masses
    pub fn new(name: impl Into<String>, m: f64, x: Coord, v: Coord) -> SimResult<Self> {
        let name = name.into();
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidBody {
                name,
                reason: format!("mass must be positive and finite, got {m}"),
            });
        }
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::InvalidBody {
                name,
                reason: "position and velocity must be finite".to_string(),
            });
        }
        Ok(Self { name, m, x, v })
    }

    pub fn momentum(&self) -> Coord {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

impl TryFrom<OrbitalStateVectors> for CelestialBody {
    type Error = SimError;

    fn try_from(sv: OrbitalStateVectors) -> SimResult<Self> {
        CelestialBody::new(sv.name, sv.mass, sv.pos, sv.vel)
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<CelestialBody>,
    pub t: f64, // elapsed simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> Coord {
        self.bodies.iter().fold(Coord::zeros(), |p, b| p + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(CelestialBody::kinetic_energy).sum()
    }

    /// Gravitational potential energy; coincident pairs contribute nothing,
    /// matching the force policy
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = (self.bodies[j].x - self.bodies[i].x).norm();
                if r > 0.0 {
                    pe -= g * self.bodies[i].m * self.bodies[j].m / r;
                }
            }
        }
        pe
    }

    pub fn total_energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<Coord> {
        let m = self.total_mass();
        if m <= 0.0 {
            return None;
        }
        let weighted = self.bodies.iter().fold(Coord::zeros(), |acc, b| acc + b.m * b.x);
        Some(weighted / m)
    }

    /// Shift every body so the centre of mass sits at the origin at rest
    pub fn to_barycentric_frame(&mut self) {
        let Some(com) = self.center_of_mass() else {
            return;
        };
        let v_com = self.total_momentum() / self.total_mass();
        for b in self.bodies.iter_mut() {
            b.x -= com;
            b.v -= v_com;
        }
    }
}
