pub mod constants;
pub mod elements;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scenario;
pub mod states;
