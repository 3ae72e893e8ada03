//! Command-line interface definitions.

pub mod execute;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::{Config, LogFormat};

/// Delayed Jupiter trigger-order scheduler.
#[derive(Parser, Debug)]
#[command(name = "trigger-scheduler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the order API (foreground)
    Serve(ServeArgs),

    /// Sign and execute an already-created order immediately
    Execute(ExecuteArgs),
}

/// Options shared by every subcommand.
#[derive(Parser, Debug)]
pub struct CommonArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl CommonArgs {
    /// Apply logging overrides to a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override listen port (takes precedence over PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the `execute` subcommand.
#[derive(Parser, Debug)]
pub struct ExecuteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Request id returned by createOrder
    #[arg(long)]
    pub request_id: String,

    /// Unsigned transaction returned by createOrder (base64)
    #[arg(long)]
    pub transaction: String,
}
