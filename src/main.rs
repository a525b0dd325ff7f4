use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gunit::cli::{run, Cli};
use gunit::config::Settings;
use gunit::telemetry::init_telemetry;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_telemetry(&settings.logging)?;
    tracing::debug!("Configuration loaded");

    let mut stdout = std::io::stdout().lock();
    let code = run(cli, &settings, &mut stdout)?;

    Ok(code)
}
