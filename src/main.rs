use motionfield::{ScenarioConfig, Scenario};
use motionfield::run_viewer;
use motionfield::{bench_effects, run_headless};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "black_hole.yaml")]
    file_name: String,

    /// Run this many frames without a window and print a summary
    #[arg(long)]
    headless: Option<u64>,

    /// Time every effect over a range of viewport sizes
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
        bench_effects();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match args.headless {
        Some(frames) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
            let mut scenario = Scenario::build_scenario(scenario_cfg);
            run_headless(&mut scenario, frames);
            scenario.unmount();
        }
        // bevy installs its own logger
        None => run_viewer(Scenario::build_scenario(scenario_cfg)),
    }

    Ok(())
}
