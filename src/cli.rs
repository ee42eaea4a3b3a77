use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "carscore",
    version,
    about = "Vehicle specification efficiency and value scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a specification record
    Score(ScoreCommand),
    /// Print the normalized form of a specification record
    Normalize(NormalizeCommand),
    /// Write a default carscore.toml
    Init(InitCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file holding the scraped specification record
    pub input: PathBuf,
    /// Lower-confidence JSON record used to fill missing fields
    #[arg(long)]
    pub enrichment: Option<PathBuf>,
    /// Directory searched for carscore.toml and .carscore/local.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct NormalizeCommand {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
