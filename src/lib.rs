pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod io;
pub mod error;

pub use simulation::states::{CelestialBody, System, Coord};
pub use simulation::elements::{InitialState, OrbitalElements, OrbitalStateVectors};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::{update_bodies, SymplecticEuler};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, RenderConfig, ScenarioConfig};

pub use visualization::picture::{Picture, PictureError, RgbColor};
pub use visualization::renderer::{draw_bodies, scale_value};

pub use error::{SimError, SimResult};
