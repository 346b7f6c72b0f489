use orbitsim::io::prompt::get_date;
use orbitsim::io::report::print_results;
use orbitsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulate an N-body system and draw the orbits to a PNG")]
struct Args {
    /// Scenario file, relative paths are looked up under `scenarios/`
    #[arg(short, default_value = "inner_planets.yaml")]
    file_name: String,

    /// Override the output image path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the start date (YYYY-MM-DD)
    #[arg(short, long)]
    epoch: Option<String>,

    /// Override the number of steps
    #[arg(short, long)]
    steps: Option<u64>,

    /// Ask for the start date on stdin
    #[arg(long)]
    prompt_date: bool,

    /// Print the final state of every body
    #[arg(long)]
    report: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let mut cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(output) = &args.output {
        cfg.render.output = output.clone();
    }
    if let Some(epoch) = &args.epoch {
        cfg.parameters.epoch = Some(epoch.clone());
    }
    if let Some(steps) = args.steps {
        cfg.parameters.steps = steps;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default `info` level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args)?;

    let mut scenario = if args.prompt_date {
        let mut stdin = BufReader::new(io::stdin());
        let days = get_date(&mut stdin, &mut io::stdout())?;
        Scenario::build_scenario_at(scenario_cfg, days)?
    } else {
        Scenario::build_scenario(scenario_cfg)?
    };

    let pic = scenario.render()?;
    let output = scenario.render.output.clone();
    pic.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), width = pic.width(), height = pic.height(), "image saved");

    if args.report {
        print_results(&scenario.system.bodies);
    }

    Ok(())
}
