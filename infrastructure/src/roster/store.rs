//! In-memory record store built from a roster file.
//!
//! [`MemoryRecords`] implements all three repository contracts over
//! `HashMap`s. Records are immutable once loaded; lookups never fail,
//! only miss.

use crate::roster::file_roster::{FileRoster, RosterError};
use async_trait::async_trait;
use gradebook_domain::{
    Course, CourseId, CourseRepository, RepositoryError, Score, ScoreRepository, Student,
    StudentId, StudentRepository,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Immutable in-memory academic records.
pub struct MemoryRecords {
    /// Students in roster order.
    students: Vec<Student>,
    courses: HashMap<CourseId, Course>,
    /// Per-course score maps, keyed by student.
    scores: HashMap<CourseId, HashMap<StudentId, Score>>,
}

impl MemoryRecords {
    /// Build the store from a parsed roster, validating cross-references.
    pub fn from_roster(roster: FileRoster) -> Result<Self, RosterError> {
        let mut courses = HashMap::new();
        for file_course in roster.courses {
            let course = file_course.into_course();
            if courses.insert(course.id(), course.clone()).is_some() {
                return Err(RosterError::DuplicateCourse(course.id()));
            }
        }

        let mut students: Vec<Student> = Vec::new();
        for file_student in roster.students {
            let student = file_student.into_student();
            if students.iter().any(|s| s.id() == student.id()) {
                return Err(RosterError::DuplicateStudent(student.id()));
            }
            for &course_id in student.courses() {
                if !courses.contains_key(&course_id) {
                    return Err(RosterError::UnknownEnrollment {
                        student: student.id(),
                        course: course_id,
                    });
                }
            }
            students.push(student);
        }

        let mut scores: HashMap<CourseId, HashMap<StudentId, Score>> = HashMap::new();
        for file_score in roster.scores {
            let student_id = StudentId::new(file_score.student);
            let course_id = CourseId::new(file_score.course);
            if !students.iter().any(|s| s.id() == student_id) {
                return Err(RosterError::ScoreForUnknownStudent(student_id));
            }
            if !courses.contains_key(&course_id) {
                return Err(RosterError::ScoreForUnknownCourse(course_id));
            }
            let entry = scores.entry(course_id).or_default();
            if entry
                .insert(student_id, Score::new(course_id, file_score.value))
                .is_some()
            {
                return Err(RosterError::DuplicateScore {
                    student: student_id,
                    course: course_id,
                });
            }
        }

        info!(
            "Loaded roster: {} students, {} courses, {} score entries",
            students.len(),
            courses.len(),
            scores.values().map(|m| m.len()).sum::<usize>()
        );

        Ok(Self {
            students,
            courses,
            scores,
        })
    }

    /// Read, parse, and validate a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        Self::from_roster(FileRoster::from_path(path)?)
    }
}

#[async_trait]
impl StudentRepository for MemoryRecords {
    async fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        Ok(self.students.iter().find(|s| s.id() == id).cloned())
    }

    async fn all_students(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.students.clone())
    }
}

#[async_trait]
impl CourseRepository for MemoryRecords {
    async fn course(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        Ok(self.courses.get(&id).cloned())
    }
}

#[async_trait]
impl ScoreRepository for MemoryRecords {
    async fn score(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<Option<Score>, RepositoryError> {
        Ok(self
            .scores
            .get(&course)
            .and_then(|by_student| by_student.get(&student))
            .cloned())
    }

    async fn scores(
        &self,
        course: CourseId,
    ) -> Result<HashMap<StudentId, Score>, RepositoryError> {
        Ok(self.scores.get(&course).cloned().unwrap_or_default())
    }
}
