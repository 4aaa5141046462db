//! Record entities

use crate::records::value_objects::{CourseId, StudentId};
use serde::{Deserialize, Serialize};

/// A course offering (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
}

impl Course {
    pub fn new(id: impl Into<CourseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A student's recorded grade in a single course (Value Object)
///
/// The owning student is implied by the lookup key; a score always
/// references exactly one course. Values are expected in 0..=100 but the
/// range is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    course: CourseId,
    value: u32,
}

impl Score {
    pub fn new(course: impl Into<CourseId>, value: u32) -> Self {
        Self {
            course: course.into(),
            value,
        }
    }

    pub fn course(&self) -> CourseId {
        self.course
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// A student record (Entity)
///
/// Enrollment order is preserved exactly as given and is iterated
/// deterministically on every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    major: String,
    courses: Vec<CourseId>,
}

impl Student {
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            major: major.into(),
            courses: Vec::new(),
        }
    }

    /// Set the enrollment list (builder style).
    pub fn with_courses(mut self, courses: impl IntoIterator<Item = CourseId>) -> Self {
        self.courses = courses.into_iter().collect();
        self
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    /// Enrolled courses, in enrollment order.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn is_enrolled_in(&self, course: CourseId) -> bool {
        self.courses.contains(&course)
    }
}
