//! Force contributors for the n-body engine
//!
//! Defines the `Force` trait, a `ForceSet` that sums several force terms
//! into one scratch buffer, and direct Newtonian gravity.

use tracing::trace;

use crate::simulation::constants::G;
use crate::simulation::states::{CelestialBody, Coord};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Force set with Newtonian gravity using constant `g`
    pub fn gravity(g: f64) -> Self {
        Self::new().with(NewtonianGravity { G: g })
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces on all `bodies`
    /// - `out[i]` is reset to zero, then receives every term's contribution
    pub fn accumulate_forces(&self, bodies: &[CelestialBody], out: &mut [Coord]) {
        for f in out.iter_mut() {
            *f = Coord::zeros();
        }
        for term in &self.terms {
            term.force(bodies, out);
        }
    }
}

/// Force source; implementations add their contribution into `out[i]`
pub trait Force {
    fn force(&self, bodies: &[CelestialBody], out: &mut [Coord]);
}

/// Unsoftened Newtonian gravity, direct O(n^2) pair sum
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G }
    }
}

impl NewtonianGravity {
    /// Force on `a` due to `b`: G m_a m_b / r^2 along the unit vector a -> b.
    ///
    /// Returns `None` when the bodies coincide. The force is undefined at
    /// r == 0, so such a pair contributes nothing; this keeps the step finite
    /// and is not a physical result.
    pub fn pair_force(&self, a: &CelestialBody, b: &CelestialBody) -> Option<Coord> {
        let r = b.x - a.x;
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            return None;
        }
        let dist = r2.sqrt();
        // G m_a m_b / r^2 * r / |r|; the mass product commutes exactly, so
        // pair_force(b, a) == -pair_force(a, b) bit for bit
        Some(r * (self.G * (a.m * b.m) / (r2 * dist)))
    }
}

impl Force for NewtonianGravity {
    fn force(&self, bodies: &[CelestialBody], out: &mut [Coord]) {
        let n = bodies.len();

        // each unordered pair once, equal and opposite
        for i in 0..n {
            for j in (i + 1)..n {
                match self.pair_force(&bodies[i], &bodies[j]) {
                    Some(f) => {
                        out[i] += f;
                        out[j] -= f;
                    }
                    None => trace!(
                        a = %bodies[i].name,
                        b = %bodies[j].name,
                        "coincident bodies, pair skipped"
                    ),
                }
            }
        }
    }
}
