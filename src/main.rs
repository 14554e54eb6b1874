//! Enigma command-line front end.
//!
//! Settings come from a JSON config file, from flags, or from interactive
//! prompts for whatever was not supplied. Validation failures print an
//! error and exit without building a machine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use enigma::config::MachineConfig;
use enigma::settings::{
    parse_plugboard, parse_ring_settings, parse_rotor_order, parse_rotor_positions,
};
use enigma::wiring::DEFAULT_ROTOR_ORDER;

/// Three-rotor Enigma machine: encrypts and decrypts text.
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(version, about)]
struct Cli {
    /// JSON machine configuration (rotors, positions, ring_settings, plugboard)
    #[arg(short, long, conflicts_with_all = ["positions", "rings", "plugboard", "rotors"])]
    config: Option<PathBuf>,

    /// Message to process
    #[arg(short, long)]
    message: Option<String>,

    /// Three rotor positions, e.g. "0 0 0"
    #[arg(short, long)]
    positions: Option<String>,

    /// Three ring settings, e.g. "0 0 0"
    #[arg(short, long)]
    rings: Option<String>,

    /// Plugboard pairs, e.g. "AB CD" (empty for none)
    #[arg(short = 'b', long)]
    plugboard: Option<String>,

    /// Rotor order as model indices (0 = I, 1 = II, 2 = III), e.g. "0 1 2"
    #[arg(long)]
    rotors: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Prompts on stdout and reads one line from stdin, without the newline.
fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn value_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt(label),
    }
}

fn resolve_config(cli: &mut Cli) -> Result<MachineConfig> {
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "using configuration file");
        let config = MachineConfig::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        config.validate()?;
        return Ok(config);
    }

    let positions = parse_rotor_positions(&value_or_prompt(
        cli.positions.take(),
        "Rotor positions (e.g. 0 0 0): ",
    )?)?;
    let ring_settings = parse_ring_settings(&value_or_prompt(
        cli.rings.take(),
        "Ring settings (e.g. 0 0 0): ",
    )?)?;
    let plugboard = value_or_prompt(cli.plugboard.take(), "Plugboard pairs (e.g. AB CD): ")?;
    parse_plugboard(&plugboard)?;

    let rotors = match &cli.rotors {
        Some(order) => parse_rotor_order(order)?,
        None => DEFAULT_ROTOR_ORDER,
    };

    Ok(MachineConfig::new(rotors, positions, ring_settings, &plugboard))
}

fn run(mut cli: Cli) -> Result<String> {
    let message = value_or_prompt(cli.message.take(), "Enter message: ")?;
    let config = resolve_config(&mut cli)?;
    debug!(?config, "settings validated");

    let mut machine = config.build()?;
    Ok(machine.process(&message))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("Output: {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
