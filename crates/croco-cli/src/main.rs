mod cli;
mod logging;
mod prompt;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::debug;

use croco_core::{load_config, LocalFilesystem, ProcessRunner, RunArgs, ScaffoldRun, DEFAULT_CONFIG_FILE};

use cli::Cli;
use prompt::DialoguerPrompt;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} logging disabled: {e}", style("Warning:").yellow().bold());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = load_config(&config_path)
        .with_context(|| format!("could not load {}", config_path.display()))?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    debug!(path = %config_path.display(), ?config, "configuration resolved");

    let base_dir = match cli.dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("could not determine the current directory")?,
    };

    ui::render_banner();

    let use_case = ScaffoldRun::new(DialoguerPrompt::new(), LocalFilesystem, ProcessRunner, config)
        .with_progress(ui::print_progress);
    let report = use_case
        .execute(RunArgs {
            name: cli.name.clone(),
            install: cli.install_flag(),
            base_dir,
        })
        .context("project generation failed")?;

    ui::render_summary(&report);
    Ok(())
}
