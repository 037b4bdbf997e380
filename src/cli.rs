use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::writer::{OutputFormat, ReportKind};

#[derive(Parser, Debug)]
#[command(name = "carbonmap")]
#[command(about = "Procurement emissions aggregation and recommendation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an emissions report from a snapshot file
    Report {
        /// Path to the order/item/supplier snapshot (JSON)
        snapshot: PathBuf,

        /// Which report to produce
        #[arg(short, long, value_enum, default_value = "item")]
        report: ReportKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to carbonmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Serve the report endpoints over HTTP
    Serve {
        /// Path to the order/item/supplier snapshot (JSON), re-read per query
        snapshot: PathBuf,

        /// Bind address (overrides configuration)
        #[arg(short, long)]
        bind: Option<String>,

        /// Bearer credential required by the report endpoints
        #[arg(long, env = "CARBONMAP_API_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Configuration file (defaults to carbonmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
