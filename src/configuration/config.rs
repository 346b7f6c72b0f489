//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, step count, epoch, constants
//! - [`RenderConfig`]     – canvas size, physical extent, output file
//! - [`BodyConfig`]       – initial state for each body, either as state
//!                          vectors or as orbital elements
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0              # step size in seconds (may be negative)
//!   steps: 8766             # number of integration steps
//!   epoch: "2024-01-01"     # optional, elements are propagated to this date
//!   barycentric: true       # optional, recentre on the centre of mass
//!
//! render:
//!   width: 600
//!   height: 600
//!   system_size: 3.2e11     # metres spanned by the canvas on each axis
//!   scale: 2                # optional integer upscale before saving
//!   draw_every: 24          # optional, draw a trail point every n steps
//!   output: "inner.png"
//!
//! catalog: "planets.json"   # optional JSON catalog of orbital elements
//!
//! bodies:
//!   - kind: state            # metres and m/s
//!     name: Sun
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 1.9891e30
//!   - kind: elements         # AU and degrees
//!     name: Earth
//!     m: 5.9722e24
//!     a: 1.00000261
//!     e: 0.01671123
//!     i: -0.00001531
//!     long_node: 0.0
//!     long_peri: 102.93768193
//!     mean_anomaly: 357.52688973
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::constants::{to_radians, M_PER_AU, M_SUN};
use crate::simulation::elements::{InitialState, OrbitalElements, OrbitalStateVectors};
use crate::simulation::states::Coord;
use crate::visualization::picture::RgbColor;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // step size (s)
    pub steps: u64, // number of steps
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub epoch: Option<String>, // date the initial conditions refer to
    #[serde(default)]
    pub barycentric: bool, // move to the centre-of-mass frame before running
}

fn default_g() -> f64 {
    crate::simulation::constants::G
}

/// Canvas and output settings
#[derive(Deserialize, Debug, Clone)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub system_size: f64, // physical extent mapped onto the canvas (m)
    #[serde(default = "default_scale")]
    pub scale: usize, // nearest-neighbour upscale applied before saving
    #[serde(default = "default_draw_every")]
    pub draw_every: u64, // steps between trail points
    #[serde(default)]
    pub background: RgbColor,
    #[serde(default)]
    pub base_image: Option<PathBuf>, // draw on top of an existing image
    pub output: PathBuf,
}

fn default_scale() -> usize {
    1
}

fn default_draw_every() -> u64 {
    1
}

fn default_central_mass() -> f64 {
    M_SUN
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyConfig {
    /// Cartesian state in metres and metres per second
    State {
        name: String,
        x: Vec<f64>,
        v: Vec<f64>,
        m: f64,
    },
    /// Keplerian elements in AU and degrees
    Elements {
        name: String,
        m: f64,
        a: f64,
        e: f64,
        i: f64,
        long_node: f64,
        long_peri: f64,
        mean_anomaly: f64,
        #[serde(default = "default_central_mass")]
        central_mass: f64,
    },
}

impl BodyConfig {
    pub fn name(&self) -> &str {
        match self {
            BodyConfig::State { name, .. } | BodyConfig::Elements { name, .. } => name,
        }
    }

    /// Convert to the internal representation in base units
    pub fn to_initial_state(&self) -> SimResult<InitialState> {
        match self {
            BodyConfig::State { name, x, v, m } => Ok(InitialState::StateVectors(OrbitalStateVectors {
                name: name.clone(),
                pos: to_coord(name, "x", x)?,
                vel: to_coord(name, "v", v)?,
                mass: *m,
            })),
            BodyConfig::Elements {
                name,
                m,
                a,
                e,
                i,
                long_node,
                long_peri,
                mean_anomaly,
                central_mass,
            } => Ok(InitialState::Elements {
                name: name.clone(),
                mass: *m,
                central_mass: *central_mass,
                elements: OrbitalElements {
                    semi_major_axis: a * M_PER_AU,
                    eccentricity: *e,
                    inclination: to_radians(*i),
                    longitude_of_ascending_node: to_radians(*long_node),
                    longitude_of_perihelion: to_radians(*long_peri),
                    mean_anomaly: to_radians(*mean_anomaly),
                },
            }),
        }
    }
}

/// Accepts 2 or 3 components; a missing z is zero
fn to_coord(name: &str, field: &str, c: &[f64]) -> SimResult<Coord> {
    match c {
        [x, y] => Ok(Coord::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Coord::new(*x, *y, *z)),
        _ => Err(SimError::Config(format!(
            "body '{name}': `{field}` needs 2 or 3 components, got {}",
            c.len()
        ))),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub render: RenderConfig,
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> SimResult<Self> {
        serde_yaml::from_str(text).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Load a scenario file; a relative `catalog` or `base_image` path is
    /// resolved against the scenario file's directory
    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut cfg = Self::from_yaml_str(&text)?;

        if let Some(dir) = path.parent() {
            if let Some(catalog) = cfg.catalog.as_mut() {
                if catalog.is_relative() {
                    *catalog = dir.join(&*catalog);
                }
            }
            if let Some(base) = cfg.render.base_image.as_mut() {
                if base.is_relative() {
                    *base = dir.join(&*base);
                }
            }
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
parameters:
  dt: 60.0
  steps: 10
render:
  width: 100
  height: 80
  system_size: 1.0e9
  output: out.png
bodies:
  - kind: state
    name: A
    x: [1.0, 2.0]
    v: [0.0, 0.0, 3.0]
    m: 10.0
  - kind: elements
    name: B
    m: 1.0
    a: 1.0
    e: 0.0
    i: 0.0
    long_node: 0.0
    long_peri: 0.0
    mean_anomaly: 90.0
"#;

    #[test]
    fn parses_both_body_kinds_with_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(cfg.parameters.steps, 10);
        assert_eq!(cfg.parameters.G, crate::simulation::constants::G);
        assert!(!cfg.parameters.barycentric);
        assert_eq!(cfg.render.scale, 1);
        assert_eq!(cfg.render.draw_every, 1);
        assert_eq!(cfg.render.background, RgbColor::WHITE);
        assert_eq!(cfg.bodies.len(), 2);

        match cfg.bodies[0].to_initial_state().unwrap() {
            InitialState::StateVectors(sv) => {
                assert_eq!(sv.pos, Coord::new(1.0, 2.0, 0.0));
                assert_eq!(sv.vel, Coord::new(0.0, 0.0, 3.0));
            }
            other => panic!("unexpected {other:?}"),
        }

        match cfg.bodies[1].to_initial_state().unwrap() {
            InitialState::Elements { elements, central_mass, .. } => {
                assert_eq!(elements.semi_major_axis, M_PER_AU);
                assert_eq!(central_mass, M_SUN);
                assert!((elements.mean_anomaly - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_short_vectors() {
        let cfg = BodyConfig::State {
            name: "bad".into(),
            x: vec![1.0],
            v: vec![0.0, 0.0],
            m: 1.0,
        };
        assert!(matches!(cfg.to_initial_state(), Err(SimError::Config(_))));
    }
}
