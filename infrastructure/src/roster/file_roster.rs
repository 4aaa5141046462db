//! Raw TOML roster data types
//!
//! These structs represent the exact structure of the roster file. They
//! are deserialized directly and converted into domain entities by
//! [`MemoryRecords`](crate::roster::store::MemoryRecords), which also
//! validates cross-references between the sections.
//!
//! ```toml
//! [[courses]]
//! id = 1
//! name = "algebra"
//!
//! [[students]]
//! id = 1
//! name = "Ada"
//! major = "Mathematics"
//! courses = [1]
//!
//! [[scores]]
//! student = 1
//! course = 1
//! value = 95
//! ```

use gradebook_domain::{Course, CourseId, Student, StudentId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Roster loading and validation errors
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("could not read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate course id {0}")]
    DuplicateCourse(CourseId),

    #[error("duplicate student id {0}")]
    DuplicateStudent(StudentId),

    #[error("student {student} is enrolled in unknown course {course}")]
    UnknownEnrollment {
        student: StudentId,
        course: CourseId,
    },

    #[error("score references unknown student {0}")]
    ScoreForUnknownStudent(StudentId),

    #[error("score references unknown course {0}")]
    ScoreForUnknownCourse(CourseId),

    #[error("duplicate score for student {student} in course {course}")]
    DuplicateScore {
        student: StudentId,
        course: CourseId,
    },
}

/// Raw course entry from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCourse {
    pub id: u32,
    pub name: String,
}

impl FileCourse {
    pub fn into_course(self) -> Course {
        Course::new(self.id, self.name)
    }
}

/// Raw student entry from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStudent {
    pub id: u32,
    pub name: String,
    pub major: String,
    /// Enrolled course IDs, in enrollment order
    #[serde(default)]
    pub courses: Vec<u32>,
}

impl FileStudent {
    pub fn into_student(self) -> Student {
        Student::new(self.id, self.name, self.major)
            .with_courses(self.courses.into_iter().map(CourseId::new))
    }
}

/// Raw score entry from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileScore {
    pub student: u32,
    pub course: u32,
    pub value: u32,
}

/// Complete roster document (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoster {
    pub courses: Vec<FileCourse>,
    pub students: Vec<FileStudent>,
    pub scores: Vec<FileScore>,
}

impl FileRoster {
    /// Parse a roster from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RosterError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a roster file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
