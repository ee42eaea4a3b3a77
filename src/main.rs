use carscore::cli;
use carscore::error::CarscoreError;
use carscore::types::report::ScoreReport;
use carscore::{config, normalize, report, score, telemetry, SpecificationRecord};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn read_record(path: &Path) -> Result<SpecificationRecord, CarscoreError> {
    if !path.exists() {
        return Err(CarscoreError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    normalize::normalize_value(&raw)
}

fn run() -> Result<i32, CarscoreError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);
    info!("carscore v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Score(cmd) => {
            let scoring_config = config::load_config(&cmd.config_dir)?;
            scoring_config.validate()?;

            let mut record = read_record(&cmd.input)?;
            let mut enriched_fields = Vec::new();
            if let Some(path) = &cmd.enrichment {
                let overlay = read_record(path)?;
                enriched_fields = record
                    .fill_missing_from(&overlay)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                debug!(fields = ?enriched_fields, "applied enrichment overlay");
            }

            let result = score::score_record(&record, &scoring_config);
            info!(composite = result.composite, "scored record");

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let score_report = ScoreReport::new(record, result, enriched_fields);
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Normalize(cmd) => {
            let record = read_record(&cmd.input)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            let rendered = config::default_config_toml()?;
            if cmd.dry_run {
                println!("{rendered}");
                return Ok(exit_code::SUCCESS);
            }

            let target = cmd.path.join(config::DEFAULT_CONFIG_FILE);
            if cmd.no_overwrite && target.exists() {
                println!("init: {} already exists, skipping", target.display());
                return Ok(exit_code::SUCCESS);
            }
            std::fs::create_dir_all(&cmd.path)?;
            std::fs::write(&target, rendered)?;
            println!("init: wrote {}", target.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ CarscoreError::ConfigParse(_)) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::INVALID_CONFIG);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
