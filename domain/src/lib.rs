//! Domain layer for gradebook
//!
//! This crate contains the core entities, value objects, and repository
//! contracts of the academic-records service. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Records
//!
//! The service is a read-only view over three kinds of records:
//!
//! - **Student**: a person with a major and an ordered enrollment list
//! - **Course**: a subject offering
//! - **Score**: a student's numeric grade in one course
//!
//! Records are created and owned by the backing stores; this layer only
//! defines their shape and the lookup contracts
//! ([`StudentRepository`], [`CourseRepository`], [`ScoreRepository`]).

pub mod records;

// Re-export commonly used types
pub use records::{
    entities::{Course, Score, Student},
    repository::{CourseRepository, RepositoryError, ScoreRepository, StudentRepository},
    value_objects::{CourseId, StudentId},
};
