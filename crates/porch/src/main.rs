//! Porch CLI - prepares a documentation site before it is built.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "porch")]
#[command(about = "Prepare a documentation site before it is built")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to porch.toml config file
    #[arg(short, long, default_value = "porch.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Arguments appended by a host build tool (ignored)
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    host_args: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default porch.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Init { yes }) => commands::init::run(&cli.config, yes)?,
        None => commands::run::run(&cli.config, cli.host_args)?,
    }

    Ok(())
}
