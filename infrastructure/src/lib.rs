//! Infrastructure layer for gradebook
//!
//! This crate contains adapters that implement the repository contracts
//! defined in the domain layer, plus configuration file loading and the
//! JSONL query log writer.

pub mod config;
pub mod logging;
pub mod roster;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLogConfig, FileOutputConfig, FileRosterConfig};
pub use logging::JsonlQueryLogger;
pub use roster::{
    file_roster::{FileCourse, FileRoster, FileScore, FileStudent, RosterError},
    store::MemoryRecords,
};
