//! ratectl - FPV Rate Profile CLI
//!
//! Command-line front end for tuning stick rate curves, inspecting them, and
//! moving them in and out of flight controller CLI dumps.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;

#[derive(Parser)]
#[command(name = "ratectl")]
#[command(about = "FPV Rate Profile CLI - Tune, plot, import and export stick rate curves")]
#[command(version)]
#[command(long_about = "
ratectl keeps an ACTUAL-rates profile (center sensitivity, max rate and expo
per axis, plus throttle mid and expo) in a JSON file and lets you edit it,
sample its curves, and convert it to and from `set key = value` CLI dumps.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Stored profile location
    #[arg(long, global = true, env = "RATECTL_PROFILE")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current rate profile
    Show,

    /// Change a profile parameter
    #[command(subcommand)]
    Set(SetCommands),

    /// Import a CLI dump from a file or stdin
    Import {
        /// Dump file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Export the profile as a CLI dump
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print sampled points of a curve
    Curve {
        /// Curve to sample
        #[arg(value_enum)]
        target: CurveTarget,
        /// Number of intervals; the curve is printed at points + 1 inputs
        #[arg(short, long, default_value_t = CLI_CURVE_POINTS)]
        points: usize,
    },

    /// Restore the default profile
    Reset,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ratectl={},fpv_rates={}", log_level, log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code_for(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Commands::Completion { shell } = &cli.command {
        completion::generate_completion(*shell);
        return Ok(());
    }

    let path = commands::profile::resolve_profile_path(cli.profile.as_deref())?;
    let path: &Path = &path;

    match &cli.command {
        Commands::Show => commands::profile::show(path, cli.json),
        Commands::Set(cmd) => commands::profile::set(cmd, path, cli.json),
        Commands::Import { file } => commands::dump::import(file.as_deref(), path, cli.json),
        Commands::Export { output } => commands::dump::export(output.as_deref(), path, cli.json),
        Commands::Curve { target, points } => {
            commands::curve::execute(*target, *points, path, cli.json)
        }
        Commands::Reset => commands::profile::reset(path, cli.json),
        Commands::Completion { .. } => Ok(()),
    }
}
