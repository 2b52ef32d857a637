//! Daybreak CLI
//!
//! Drives the theme toggle without a window:
//! - `daybreak run <scenario.json>` executes a headless scenario and prints a JSON report
//! - `daybreak trace` prints one JSON line per frame of a toggle sequence
//! - `daybreak params [--dark]` prints the parameter set of a mode
//! - `daybreak init` writes a default daybreak.toml

mod config;
mod headless;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use config::{DaybreakConfig, LoadedConfig, CONFIG_FILE};
use daybreak_animation::AnimationScheduler;
use daybreak_theme::{ColorScheme, RootClassList};
use daybreak_toggle::{derive_params, Channel, Layer, ParameterSet, ThemeToggle};
use headless::{
    run_scenario, run_scenario_with_probe, HeadlessToggle, ProbeContext, ScenarioStep,
    ToggleScenario,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "daybreak")]
#[command(about = "Headless driver for the Daybreak theme toggle")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Config file, or a directory containing daybreak.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a headless scenario and print a JSON report
    Run(RunArgs),
    /// Print one JSON line per frame while toggling
    Trace(TraceArgs),
    /// Print the parameter set of a mode
    Params(ParamsArgs),
    /// Write a default daybreak.toml
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Also write the report to this relative path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Number of toggles
    #[arg(long, default_value_t = 1)]
    toggles: u32,

    /// Frames to run after each toggle
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Hover the control for the whole trace
    #[arg(long)]
    hover: bool,
}

#[derive(Args, Debug)]
struct ParamsArgs {
    /// Dark mode instead of light
    #[arg(long)]
    dark: bool,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => cmd_run(&cli.config, args),
        Commands::Trace(args) => cmd_trace(&cli.config, args).map(|()| ExitCode::SUCCESS),
        Commands::Params(args) => cmd_params(&cli.config, args).map(|()| ExitCode::SUCCESS),
        Commands::Init(args) => cmd_init(&cli.config, args).map(|()| ExitCode::SUCCESS),
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn mount(loaded: &LoadedConfig) -> Result<HeadlessToggle> {
    let config = &loaded.config;
    let bundle = config.bundle(&loaded.base_dir)?;
    Ok(ThemeToggle::mount(
        config.toggle_config(),
        bundle,
        RootClassList::with_marker(config.theme.marker.as_str()),
        AnimationScheduler::new(),
    ))
}

fn cmd_run(config_path: &Path, args: RunArgs) -> Result<ExitCode> {
    let loaded = DaybreakConfig::load(config_path)?;
    let scenario = ToggleScenario::from_path(&args.scenario)?;
    tracing::info!(
        scenario = %args.scenario.display(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut toggle = mount(&loaded)?;
    let report = run_scenario(&scenario, &mut toggle, loaded.config.headless);

    report.write_to_writer(&mut std::io::stdout().lock())?;
    if let Some(path) = &args.report {
        report
            .write_to_path(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
    }

    if report.is_failed() {
        tracing::error!(
            step = ?report.failed_step_index,
            message = report.message.as_deref().unwrap_or_default(),
            "scenario failed"
        );
        return Ok(ExitCode::FAILURE);
    }
    tracing::info!(frames = report.elapsed_frames, "scenario passed");
    Ok(ExitCode::SUCCESS)
}

/// One traced frame
#[derive(Serialize)]
struct TraceFrame {
    frame: u64,
    elapsed_ms: u64,
    step: usize,
    mode: ColorScheme,
    marker: bool,
    values: BTreeMap<String, f32>,
}

fn cmd_trace(config_path: &Path, args: TraceArgs) -> Result<()> {
    let loaded = DaybreakConfig::load(config_path)?;
    let mut toggle = mount(&loaded)?;

    let mut steps = Vec::new();
    if args.hover {
        steps.push(ScenarioStep::HoverStart);
    }
    for _ in 0..args.toggles {
        steps.push(ScenarioStep::Toggle);
        steps.push(ScenarioStep::Tick {
            frames: args.frames,
        });
    }
    let scenario = ToggleScenario { steps };

    let mut clock = loaded.config.headless;
    clock.probe_every_frames = 1;

    let mut frames = Vec::new();
    let report = run_scenario_with_probe(
        &scenario,
        &mut toggle,
        clock,
        &mut |ctx: &ProbeContext, toggle: &HeadlessToggle| {
            let values = Channel::all()
                .filter_map(|c| toggle.value(c).map(|v| (c.to_string(), v)))
                .collect();
            frames.push(TraceFrame {
                frame: ctx.elapsed_frames,
                elapsed_ms: ctx.elapsed_ms,
                step: ctx.step_index,
                mode: toggle.scheme(),
                marker: toggle.sink().has_marker(),
                values,
            });
        },
    );
    if report.is_failed() {
        bail!("trace stopped early: {:?}", report.message);
    }

    let mut out = std::io::stdout().lock();
    for frame in &frames {
        serde_json::to_writer(&mut out, frame)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ParamsOutput {
    params: ParameterSet,
    fills: BTreeMap<&'static str, String>,
}

fn cmd_params(config_path: &Path, args: ParamsArgs) -> Result<()> {
    let loaded = DaybreakConfig::load(config_path)?;
    let bundle = loaded.config.bundle(&loaded.base_dir)?;
    let params = derive_params(args.dark, &loaded.config.geometry);

    let fills = Layer::ALL
        .iter()
        .map(|&layer| {
            let (scheme, token) = params.fill(layer);
            (layer.as_str(), bundle.color(scheme, token).to_hex_string())
        })
        .collect();

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &ParamsOutput { params, fills })?;
    out.write_all(b"\n")?;
    Ok(())
}

fn cmd_init(config_path: &Path, args: InitArgs) -> Result<()> {
    let target = if config_path.extension().is_some_and(|ext| ext == "toml") {
        config_path.to_path_buf()
    } else {
        config_path.join(CONFIG_FILE)
    };

    if target.exists() && !args.force {
        bail!(
            "{} already exists. Pass --force to overwrite it.",
            target.display()
        );
    }

    let content = DaybreakConfig::default().to_toml()?;
    std::fs::write(&target, content)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), "wrote default config");
    Ok(())
}
