//! Record identifiers - immutable keys for the academic-records stores.
//!
//! # Identifiers
//! - [`StudentId`] - Unique identifier for a student record
//! - [`CourseId`] - Unique identifier for a course offering

use serde::{Deserialize, Serialize};

/// Unique identifier for a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    /// Creates a StudentId from a raw number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u32);

impl CourseId {
    /// Creates a CourseId from a raw number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
