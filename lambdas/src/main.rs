//! Prints the closure demonstration transcript.
//!
//! With no arguments the binary runs every step on its built-in inputs and
//! writes thirteen lines to stdout.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lambdas::config::{DemoConfig, load_config};
use lambdas::demo::run_demo;
use lambdas::{exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "lambdas",
    version,
    about = "Closure syntax and capture semantics, printed step by step"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every demonstration step and print the transcript (default).
    Run {
        /// TOML file overriding the built-in inputs.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the effective configuration as TOML.
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per transcript entry.
    Text,
    /// JSON array of `{section, text}` records.
    Json,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run {
        config: None,
        format: Format::Text,
    });
    match command {
        Command::Run { config, format } => cmd_run(config.as_deref(), format),
        Command::Config { config } => cmd_config(config.as_deref()),
    }
}

fn cmd_run(config: Option<&Path>, format: Format) -> Result<()> {
    let cfg = resolve_config(config)?;
    let transcript = run_demo(&cfg);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => transcript.write_text(&mut out)?,
        Format::Json => transcript.write_json(&mut out)?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_config(config: Option<&Path>) -> Result<()> {
    let cfg = resolve_config(config)?;
    print!("{}", cfg.to_toml()?);
    Ok(())
}

/// Built-in inputs unless a config path is given.
fn resolve_config(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(path).context("load demo config")
        }
        None => Ok(DemoConfig::default()),
    }
}
