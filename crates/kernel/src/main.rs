//! Passform
//!
//! Plays a script of user actions against the password form and prints the
//! resulting form.
//!
//! Usage:
//!   passform --script actions.jsonl --format html
//!   echo '{"action":"submit"}' | passform --each

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use passform_kernel::config::{Config, OutputFormat};
use passform_kernel::script::{Renderer, read_script, run_script};
use passform_kernel::theme::ThemeEngine;

/// Command-line arguments. Flags take precedence over the environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action script (JSON lines). Reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output format: html or json.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Directory with template overrides.
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Print the form after every action instead of only at the end.
    #[arg(long)]
    each: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let format = args.format.unwrap_or(config.output);
    let templates_dir = args.templates.or(config.templates_dir);

    let theme = match &templates_dir {
        Some(dir) => ThemeEngine::with_template_dir(dir)?,
        None => ThemeEngine::new()?,
    };
    info!(?format, templates = ?templates_dir, "Configuration loaded");

    let actions = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            read_script(BufReader::new(file))
        }
        None => read_script(io::stdin().lock()),
    }
    .context("failed to read action script")?;

    let renderer = Renderer::new(theme, format);
    let (controller, outputs) =
        run_script(&actions, &renderer, args.each).context("failed to run action script")?;

    let mut stdout = io::stdout().lock();
    for output in outputs {
        writeln!(stdout, "{output}").context("failed to write output")?;
    }

    info!(
        actions = actions.len(),
        phase = ?controller.state().phase(),
        "Script finished"
    );

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
