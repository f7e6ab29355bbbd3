use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use signup::config::DEFAULT_CONFIG_PATH;
use signup::{ValidationMode, WizardConfig, WizardManager};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod session;

use session::Session;

/// Fill in the signup form from the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(name = "signup-cli", version)]
struct Args {
    /// TOML configuration file; defaults are used if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// YAML schema replacing the built-in one
    #[arg(long)]
    schema: Option<PathBuf>,

    /// on-change or on-submit
    #[arg(long)]
    mode: Option<ValidationMode>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the active schema as YAML and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = WizardConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    if let Some(schema) = args.schema {
        config.form.schema_path = Some(schema);
    }
    if let Some(mode) = args.mode {
        config.form.validation_mode = mode;
    }

    let manager = WizardManager::from_config(&config).context("failed to set up the signup form")?;

    if args.print_schema {
        print!("{}", manager.validator().schema().to_yaml_string()?);
        return Ok(());
    }

    tracing::info!(mode = %config.form.validation_mode, "signup form ready");

    let stdout = io::stdout();
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Session::new(manager, stdout.lock()).run(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("{}", commands::HELP);
            }
            Session::new(manager, stdout.lock())
                .with_prompt(interactive)
                .run(stdin.lock())?;
        }
    }

    Ok(())
}
