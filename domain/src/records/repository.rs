//! Repository traits for academic records
//!
//! These are domain-level abstractions that define how records are
//! looked up. Implementations live in the infrastructure layer.
//!
//! A missing record is not an error: single lookups return `Ok(None)`
//! and map lookups simply omit the entry. [`RepositoryError`] covers
//! backend failures only.

use crate::records::entities::{Course, Score, Student};
use crate::records::value_objects::{CourseId, StudentId};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by a record store backend.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt record data: {0}")]
    Corrupt(String),
}

/// Repository trait for student records
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Look up a single student by ID.
    async fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError>;

    /// All students, in roster order.
    async fn all_students(&self) -> Result<Vec<Student>, RepositoryError>;
}

/// Repository trait for course records
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Look up a single course by ID.
    async fn course(&self, id: CourseId) -> Result<Option<Course>, RepositoryError>;
}

/// Repository trait for score records
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// One student's score in one course.
    async fn score(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<Option<Score>, RepositoryError>;

    /// Every recorded score for a course, keyed by student.
    async fn scores(
        &self,
        course: CourseId,
    ) -> Result<HashMap<StudentId, Score>, RepositoryError>;
}
