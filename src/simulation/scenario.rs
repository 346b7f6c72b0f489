//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - render settings (`RenderConfig`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`) and the integrator
//!
//! `Scenario::run` then drives the step/draw loop onto a `Picture`.

use tracing::{debug, info, warn};

use crate::configuration::config::{BodyConfig, RenderConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::io::catalog::load_catalog;
use crate::io::date::days_since_j2000;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::SymplecticEuler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CelestialBody, System};
use crate::visualization::picture::Picture;
use crate::visualization::renderer::draw_bodies;

/// Number of progress log lines emitted over a run
const PROGRESS_REPORTS: u64 = 10;

pub struct Scenario {
    pub parameters: Parameters,
    pub render: RenderConfig,
    pub system: System,
    pub forces: ForceSet,
    integrator: SymplecticEuler,
}

impl Scenario {
    /// Build with the epoch taken from the configuration (J2000 if absent)
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let epoch_days = match cfg.parameters.epoch.as_deref() {
            Some(date) => days_since_j2000(date)?,
            None => 0.0,
        };
        Self::build_scenario_at(cfg, epoch_days)
    }

    /// Build with initial conditions taken `epoch_days` after J2000
    pub fn build_scenario_at(cfg: ScenarioConfig, epoch_days: f64) -> SimResult<Self> {
        if cfg.render.draw_every == 0 {
            return Err(SimError::Config("render.draw_every must be at least 1".to_string()));
        }
        if cfg.render.scale == 0 {
            return Err(SimError::Config("render.scale must be at least 1".to_string()));
        }
        if cfg.render.system_size.is_nan() || cfg.render.system_size <= 0.0 {
            return Err(SimError::Config(format!(
                "render.system_size must be positive, got {}",
                cfg.render.system_size
            )));
        }

        let mut body_cfgs: Vec<BodyConfig> = cfg.bodies;
        if let Some(path) = cfg.catalog.as_deref() {
            body_cfgs.extend(load_catalog(path)?);
        }

        // Bodies: config -> initial state -> state vectors -> runtime body
        let bodies = body_cfgs
            .iter()
            .map(|bc| {
                let sv = bc.to_initial_state()?.into_state_vectors(epoch_days)?;
                CelestialBody::try_from(sv)
            })
            .collect::<SimResult<Vec<_>>>()?;

        if bodies.is_empty() {
            warn!("scenario has no bodies");
        }

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            G: p_cfg.G,
            epoch_days,
            barycentric: p_cfg.barycentric,
        };

        let mut system = System::new(bodies);
        if parameters.barycentric {
            system.to_barycentric_frame();
        }

        let forces = ForceSet::gravity(parameters.G);

        info!(
            bodies = system.bodies.len(),
            dt = parameters.dt,
            steps = parameters.steps,
            duration = parameters.duration(),
            epoch_days,
            "scenario built"
        );

        Ok(Self {
            parameters,
            render: cfg.render,
            system,
            forces,
            integrator: SymplecticEuler::new(),
        })
    }

    /// Advance one step
    pub fn step(&mut self) {
        let Scenario {
            system,
            parameters,
            forces,
            integrator,
            ..
        } = self;
        integrator.step(system, forces, parameters.dt);
    }

    /// Run every step, drawing a trail point each `draw_every` steps and the
    /// final positions at the end
    pub fn run(&mut self, pic: &mut Picture) {
        let steps = self.parameters.steps;
        let every = self.render.draw_every.max(1);
        let report_every = (steps / PROGRESS_REPORTS).max(1);
        let e0 = self.system.total_energy(self.parameters.G);

        draw_bodies(&self.system.bodies, pic, self.render.system_size, false);

        for n in 1..=steps {
            self.step();

            if n % every == 0 {
                draw_bodies(&self.system.bodies, pic, self.render.system_size, false);
            }
            if n % report_every == 0 {
                debug!(step = n, t = self.system.t, "progress");
            }
        }

        draw_bodies(&self.system.bodies, pic, self.render.system_size, true);

        let e1 = self.system.total_energy(self.parameters.G);
        let drift = if e0 != 0.0 { ((e1 - e0) / e0).abs() } else { 0.0 };
        info!(steps, t = self.system.t, energy_drift = drift, "run finished");
    }

    /// Blank canvas of the configured size, or the configured base image
    pub fn canvas(&self) -> SimResult<Picture> {
        match &self.render.base_image {
            Some(path) => Ok(Picture::open(path)?),
            None => Ok(Picture::filled(
                self.render.width,
                self.render.height,
                self.render.background,
            )),
        }
    }

    /// Create the canvas, run the simulation onto it and apply the
    /// configured upscale
    pub fn render(&mut self) -> SimResult<Picture> {
        let mut pic = self.canvas()?;
        self.run(&mut pic);
        pic.scale(self.render.scale);
        Ok(pic)
    }
}
