//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked with the forces at
//! the current positions, then positions drift with the *new* velocities.
//! The ordering matters for trajectory comparisons and must not be swapped.

use crate::simulation::constants::G;
use crate::simulation::forces::ForceSet;
use crate::simulation::states::{CelestialBody, Coord, System};

/// Integrator owning the per-step force scratch buffer.
///
/// `scratch[i]` accumulates the net force on `bodies[i]`; it is resized to the
/// body count and zeroed at the start of every step.
#[derive(Debug, Default)]
pub struct SymplecticEuler {
    scratch: Vec<Coord>,
}

impl SymplecticEuler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces computed during the most recent step
    pub fn last_forces(&self) -> &[Coord] {
        &self.scratch
    }

    /// Advance the system by one step of signed length `dt` seconds
    /// and increment `sys.t`
    pub fn step(&mut self, sys: &mut System, forces: &ForceSet, dt: f64) {
        self.step_bodies(&mut sys.bodies, forces, dt);
        sys.t += dt;
    }

    /// Advance a bare body slice by one step
    pub fn step_bodies(&mut self, bodies: &mut [CelestialBody], forces: &ForceSet, dt: f64) {
        let n = bodies.len();
        if n == 0 { // no bodies, return
            return;
        }

        self.scratch.resize(n, Coord::zeros());
        forces.accumulate_forces(bodies, &mut self.scratch);

        for (b, f) in bodies.iter_mut().zip(self.scratch.iter()) {
            // Kick: v_n+1 = v_n + dt * F_n / m
            b.v += (dt / b.m) * *f;
            // Drift: x_n+1 = x_n + dt * v_n+1
            b.x += dt * b.v;
        }
    }
}

/// Advance `bodies` by one step of `dt` seconds under Newtonian gravity with
/// the standard gravitational constant
pub fn update_bodies(bodies: &mut [CelestialBody], dt: f64) {
    let forces = ForceSet::gravity(G);
    SymplecticEuler::new().step_bodies(bodies, &forces, dt);
}
