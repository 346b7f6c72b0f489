//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step size and step count,
//! - gravitational constant,
//! - epoch (days since J2000) the initial conditions are taken at,
//! - whether to move into the barycentric frame before the first step

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s), signed
    pub steps: u64, // number of steps
    pub G: f64, // gravitational constant
    pub epoch_days: f64, // days since J2000
    pub barycentric: bool, // recentre on the centre of mass
}

impl Parameters {
    /// Total simulated time covered by the run
    pub fn duration(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
