//! CLI entrypoint for gradebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use gradebook_application::TranscriptService;
use gradebook_domain::{CourseId, StudentId, StudentRepository};
use gradebook_infrastructure::{ConfigLoader, JsonlQueryLogger, MemoryRecords};
use gradebook_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::Error::from(*e))?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli.output.unwrap_or(match config.output.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let command = match cli.command {
        Some(c) => c,
        None => bail!("A command is required. Try 'gradebook average 1'."),
    };

    let roster_path = cli
        .roster
        .or_else(|| config.roster.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("roster.toml"));

    info!("Loading roster from {}", roster_path.display());
    let records = Arc::new(MemoryRecords::load(&roster_path)?);

    // === Dependency Injection ===
    let mut service =
        TranscriptService::new(records.clone(), records.clone(), records.clone());

    if let Some(path) = &config.log.queries {
        match JsonlQueryLogger::new(path) {
            Ok(logger) => service = service.with_query_logger(Arc::new(logger)),
            Err(e) => warn!("Could not open query log {}: {}", path, e),
        }
    }

    let output = match command {
        Command::Average { student_id } => {
            let student_id = StudentId::new(student_id);
            let average = service.average_score(student_id).await?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_average(student_id, average),
                OutputFormat::Json => ConsoleFormatter::format_average_json(student_id, average),
            }
        }
        Command::Rank { course_id } => {
            let course_id = CourseId::new(course_id);
            let ranked = service.rank_students(course_id).await?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_ranking(course_id, &ranked),
                OutputFormat::Json => ConsoleFormatter::format_ranking_json(course_id, &ranked),
            }
        }
        Command::Students => {
            let students = records.all_students().await?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_students(&students),
                OutputFormat::Json => ConsoleFormatter::format_students_json(&students),
            }
        }
    };

    println!("{}", output);

    Ok(())
}
