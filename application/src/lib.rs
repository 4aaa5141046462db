//! Application layer for gradebook
//!
//! This crate contains the transcript use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::query_log::{NoQueryLogger, QueryEvent, QueryLogger};
pub use use_cases::transcript::{TranscriptError, TranscriptService};
