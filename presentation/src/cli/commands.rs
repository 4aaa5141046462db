//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for query results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for gradebook
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version, about = "Academic records - course averages and student rankings")]
#[command(long_about = r#"
Gradebook answers transcript queries over a roster of students, courses,
and scores loaded from a TOML file.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gradebook.toml    Project-level config
3. ~/.config/gradebook/config.toml   Global config

Example:
  gradebook average 1
  gradebook rank 2 --output json
  gradebook students --roster records/fall-2025.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the roster file (overrides configuration)
    #[arg(long, value_name = "PATH", global = true)]
    pub roster: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

/// Transcript queries
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a student's average score across their enrolled courses
    Average {
        /// Student ID
        student_id: u32,
    },
    /// Rank a course's students by score, best first
    Rank {
        /// Course ID
        course_id: u32,
    },
    /// List the roster's students with their enrollments
    Students,
}
