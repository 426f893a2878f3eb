use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::data::datasets::Category;
use crate::error::{DashError, DashResult};
use crate::snapshot::{DEFAULT_ORGANIZATION, DEFAULT_WEEK};

#[derive(Debug, Parser)]
#[command(
    name = "supply-dash",
    about = "mock cross-border supply-chain dashboard data"
)]
pub struct Args {
    /// Seed for reproducible output; omitted means OS entropy.
    #[arg(long, env = "SUPPLY_DASH_SEED")]
    pub seed: Option<u64>,
    /// YAML region table replacing the built-in one.
    #[arg(long, env = "SUPPLY_DASH_REGIONS")]
    pub regions: Option<PathBuf>,
    /// Write JSON here instead of stdout.
    #[arg(long, env = "SUPPLY_DASH_OUTPUT")]
    pub output: Option<PathBuf>,
    /// Log filter: a level or `RUST_LOG`-style directives.
    #[arg(long, env = "SUPPLY_DASH_LOG", default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Trends {
        #[arg(long)]
        weekly: bool,
    },
    Regions {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    Snapshot {
        #[arg(long, default_value = DEFAULT_ORGANIZATION)]
        org: String,
        #[arg(long, default_value = DEFAULT_WEEK)]
        week: String,
        #[arg(long)]
        with_summary: bool,
    },
    Summary { context: String },
    Doctor,
}

pub fn parse_category(value: &str) -> Result<Category, String> {
    value.parse::<Category>().map_err(|error| error.to_string())
}

/// Accepts anything `RUST_LOG` accepts: a bare level or a directive list such
/// as `info,supply_dash=debug`.
pub fn validate_log_level(level: &str) -> DashResult<()> {
    match EnvFilter::try_new(level) {
        Ok(_) => Ok(()),
        Err(error) => Err(DashError::InvalidArgument(format!(
            "invalid log level '{level}': {error}"
        ))),
    }
}
