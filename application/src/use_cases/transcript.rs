//! Transcript use case.
//!
//! Computes a student's average score across their enrolled courses and
//! ranks the students of a course by their recorded score.
//!
//! The service is a thin aggregation layer over the three record
//! repositories: it holds no state between calls, performs lookups
//! sequentially, and surfaces every missing record as a typed error.

use crate::ports::query_log::{NoQueryLogger, QueryEvent, QueryLogger};
use gradebook_domain::{
    CourseId, CourseRepository, RepositoryError, ScoreRepository, Student, StudentId,
    StudentRepository,
};
use std::cmp::Reverse;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while answering a transcript query.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("no student with id {0}")]
    NoSuchStudent(StudentId),

    #[error("no course with id {0}")]
    NoSuchCourse(CourseId),

    #[error("no score recorded for student {student} in course {course}")]
    NoSuchScore {
        student: StudentId,
        course: CourseId,
    },

    #[error("student {0} is not enrolled in any course")]
    NoCoursesEnrolled(StudentId),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for transcript queries over the academic records.
///
/// Repositories are injected as trait objects; implementations live in
/// the infrastructure layer. Results always reflect the current
/// repository state — nothing is cached across calls.
#[derive(Clone)]
pub struct TranscriptService {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
    scores: Arc<dyn ScoreRepository>,
    query_logger: Arc<dyn QueryLogger>,
}

impl TranscriptService {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseRepository>,
        scores: Arc<dyn ScoreRepository>,
    ) -> Self {
        Self {
            students,
            courses,
            scores,
            query_logger: Arc::new(NoQueryLogger),
        }
    }

    /// Create with a query logger.
    pub fn with_query_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.query_logger = logger;
        self
    }

    /// Arithmetic mean of the student's scores across all enrolled
    /// courses.
    ///
    /// Scores are resolved in enrollment order; the first course without
    /// a recorded score fails the whole query with
    /// [`TranscriptError::NoSuchScore`] and the remaining courses are not
    /// queried. A student with no enrollments fails with
    /// [`TranscriptError::NoCoursesEnrolled`] rather than producing a
    /// division by zero.
    pub async fn average_score(&self, student_id: StudentId) -> Result<f64, TranscriptError> {
        let student = self
            .students
            .student(student_id)
            .await?
            .ok_or(TranscriptError::NoSuchStudent(student_id))?;

        if student.courses().is_empty() {
            return Err(TranscriptError::NoCoursesEnrolled(student_id));
        }

        debug!(
            "Averaging {} course scores for student {}",
            student.courses().len(),
            student_id
        );

        let mut total = 0u32;
        for &course_id in student.courses() {
            let score = self.scores.score(student_id, course_id).await?.ok_or(
                TranscriptError::NoSuchScore {
                    student: student_id,
                    course: course_id,
                },
            )?;
            total += score.value();
        }

        let average = f64::from(total) / student.courses().len() as f64;

        info!(
            "Student {} ({}) averages {:.1} across {} courses",
            student_id,
            student.name(),
            average,
            student.courses().len()
        );

        self.query_logger.log(QueryEvent::new(
            "average_score",
            serde_json::json!({
                "student": student_id.value(),
                "courses": student.courses().len(),
                "average": average,
            }),
        ));

        Ok(average)
    }

    /// Students of a course ordered by their score, best first.
    ///
    /// Only students that are enrolled in the course and have a recorded
    /// score participate in the ranking; students with equal scores keep
    /// their relative order from the student roster.
    pub async fn rank_students(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Student>, TranscriptError> {
        let course = self
            .courses
            .course(course_id)
            .await?
            .ok_or(TranscriptError::NoSuchCourse(course_id))?;

        let scores = self.scores.scores(course_id).await?;
        let students = self.students.all_students().await?;

        let mut ranked: Vec<(u32, Student)> = students
            .into_iter()
            .filter(|student| student.is_enrolled_in(course_id))
            .filter_map(|student| {
                scores
                    .get(&student.id())
                    .map(|score| (score.value(), student))
            })
            .collect();

        // Stable sort keeps roster order for equal scores
        ranked.sort_by_key(|(value, _)| Reverse(*value));

        let ranked: Vec<Student> = ranked.into_iter().map(|(_, student)| student).collect();

        info!(
            "Ranked {} students for course {} ({})",
            ranked.len(),
            course_id,
            course.name()
        );

        self.query_logger.log(QueryEvent::new(
            "rank_students",
            serde_json::json!({
                "course": course_id.value(),
                "students": ranked.iter().map(|s| s.id().value()).collect::<Vec<_>>(),
            }),
        ));

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gradebook_domain::{Course, Score};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockStudentRepository {
        students: Mutex<Vec<Student>>,
        lookups: Mutex<Vec<StudentId>>,
    }

    impl MockStudentRepository {
        fn new(students: Vec<Student>) -> Self {
            Self {
                students: Mutex::new(students),
                lookups: Mutex::new(Vec::new()),
            }
        }

        /// Replace the backing records, as a live store update would.
        fn set_students(&self, students: Vec<Student>) {
            *self.students.lock().unwrap() = students;
        }

        fn lookup_count(&self) -> usize {
            self.lookups.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
            self.lookups.lock().unwrap().push(id);
            Ok(self
                .students
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id() == id)
                .cloned())
        }

        async fn all_students(&self) -> Result<Vec<Student>, RepositoryError> {
            Ok(self.students.lock().unwrap().clone())
        }
    }

    struct MockCourseRepository {
        courses: Vec<Course>,
    }

    impl MockCourseRepository {
        fn new(courses: Vec<Course>) -> Self {
            Self { courses }
        }
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepository {
        async fn course(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
            Ok(self.courses.iter().find(|c| c.id() == id).cloned())
        }
    }

    struct MockScoreRepository {
        by_student: HashMap<(StudentId, CourseId), Score>,
        by_course: HashMap<CourseId, HashMap<StudentId, Score>>,
        lookups: Mutex<Vec<(StudentId, CourseId)>>,
    }

    impl MockScoreRepository {
        fn new() -> Self {
            Self {
                by_student: HashMap::new(),
                by_course: HashMap::new(),
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn with_score(mut self, student: u32, course: u32, value: u32) -> Self {
            let student = StudentId::new(student);
            let course = CourseId::new(course);
            let score = Score::new(course, value);
            self.by_student.insert((student, course), score.clone());
            self.by_course
                .entry(course)
                .or_default()
                .insert(student, score);
            self
        }

        /// Every (student, course) pair looked up so far, in call order.
        fn lookup_log(&self) -> Vec<(StudentId, CourseId)> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScoreRepository for MockScoreRepository {
        async fn score(
            &self,
            student: StudentId,
            course: CourseId,
        ) -> Result<Option<Score>, RepositoryError> {
            self.lookups.lock().unwrap().push((student, course));
            Ok(self.by_student.get(&(student, course)).cloned())
        }

        async fn scores(
            &self,
            course: CourseId,
        ) -> Result<HashMap<StudentId, Score>, RepositoryError> {
            Ok(self.by_course.get(&course).cloned().unwrap_or_default())
        }
    }

    /// Repository that fails every call, for error propagation tests.
    struct FailingStudentRepository;

    #[async_trait]
    impl StudentRepository for FailingStudentRepository {
        async fn student(&self, _id: StudentId) -> Result<Option<Student>, RepositoryError> {
            Err(RepositoryError::Unavailable("store offline".to_string()))
        }

        async fn all_students(&self) -> Result<Vec<Student>, RepositoryError> {
            Err(RepositoryError::Unavailable("store offline".to_string()))
        }
    }

    struct RecordingQueryLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingQueryLogger {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl QueryLogger for RecordingQueryLogger {
        fn log(&self, event: QueryEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    // ==================== Fixtures ====================

    fn course(id: u32, name: &str) -> Course {
        Course::new(id, name)
    }

    fn student(id: u32, name: &str, courses: &[u32]) -> Student {
        Student::new(id, name, "Computer Science")
            .with_courses(courses.iter().map(|&c| CourseId::new(c)))
    }

    fn default_courses() -> Vec<Course> {
        vec![
            course(1, "algebra"),
            course(2, "history"),
            course(3, "physics"),
            course(4, "literature"),
        ]
    }

    fn service(
        students: Arc<MockStudentRepository>,
        scores: Arc<MockScoreRepository>,
    ) -> TranscriptService {
        TranscriptService::new(
            students,
            Arc::new(MockCourseRepository::new(default_courses())),
            scores,
        )
    }

    // ==================== Average score ====================

    #[tokio::test]
    async fn test_average_score_happy_case() {
        let students = Arc::new(MockStudentRepository::new(vec![student(
            1,
            "Ada",
            &[1, 2, 3, 4],
        )]));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 100)
                .with_score(1, 2, 90)
                .with_score(1, 3, 80)
                .with_score(1, 4, 70),
        );

        let average = service(students, scores)
            .average_score(StudentId::new(1))
            .await
            .unwrap();

        assert_eq!(average, 85.0);
    }

    #[tokio::test]
    async fn test_average_score_unknown_student() {
        let students = Arc::new(MockStudentRepository::new(vec![]));
        let scores = Arc::new(MockScoreRepository::new());

        let result = service(students, scores)
            .average_score(StudentId::new(1))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptError::NoSuchStudent(id) if id == StudentId::new(1)
        ));
    }

    #[tokio::test]
    async fn test_average_score_missing_score_short_circuits() {
        // Score for the first enrolled course is missing; the remaining
        // courses must not be queried at all.
        let students = Arc::new(MockStudentRepository::new(vec![student(
            1,
            "Ada",
            &[1, 2, 3, 4],
        )]));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 2, 90)
                .with_score(1, 3, 80)
                .with_score(1, 4, 70),
        );

        let result = service(students.clone(), scores.clone())
            .average_score(StudentId::new(1))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptError::NoSuchScore { student, course }
                if student == StudentId::new(1) && course == CourseId::new(1)
        ));
        assert_eq!(
            scores.lookup_log(),
            vec![(StudentId::new(1), CourseId::new(1))]
        );
    }

    #[tokio::test]
    async fn test_average_score_follows_repository_state() {
        // Two sequential calls against a store whose student record
        // changes in between: no caching may leak from the first call.
        let students = Arc::new(MockStudentRepository::new(vec![student(
            1,
            "Ada",
            &[1, 2, 3, 4],
        )]));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 100)
                .with_score(1, 2, 90)
                .with_score(1, 3, 80)
                .with_score(1, 4, 70),
        );
        let service = service(students.clone(), scores.clone());

        let first = service.average_score(StudentId::new(1)).await.unwrap();
        assert_eq!(first, 85.0);

        // The student drops literature (course 4)
        students.set_students(vec![student(1, "Ada", &[1, 2, 3])]);

        let second = service.average_score(StudentId::new(1)).await.unwrap();
        assert_eq!(second, 90.0);

        // One student lookup per call, and the dropped course was only
        // ever queried during the first call.
        assert_eq!(students.lookup_count(), 2);
        let literature_lookups = scores
            .lookup_log()
            .iter()
            .filter(|(_, c)| *c == CourseId::new(4))
            .count();
        assert_eq!(literature_lookups, 1);
    }

    #[tokio::test]
    async fn test_average_score_no_courses_enrolled() {
        let students = Arc::new(MockStudentRepository::new(vec![student(1, "Ada", &[])]));
        let scores = Arc::new(MockScoreRepository::new());

        let result = service(students, scores)
            .average_score(StudentId::new(1))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptError::NoCoursesEnrolled(id) if id == StudentId::new(1)
        ));
    }

    #[tokio::test]
    async fn test_average_score_repository_failure_propagates() {
        let service = TranscriptService::new(
            Arc::new(FailingStudentRepository),
            Arc::new(MockCourseRepository::new(default_courses())),
            Arc::new(MockScoreRepository::new()),
        );

        let result = service.average_score(StudentId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptError::Repository(RepositoryError::Unavailable(_))
        ));
    }

    // ==================== Ranking ====================

    fn roster() -> Vec<Student> {
        vec![
            student(1, "Ada", &[1, 2]),
            student(2, "Grace", &[1, 2]),
            student(3, "Alan", &[1, 2]),
        ]
    }

    #[tokio::test]
    async fn test_rank_students_best_first() {
        let students = Arc::new(MockStudentRepository::new(roster()));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 10)
                .with_score(2, 1, 20)
                .with_score(3, 1, 30)
                .with_score(1, 2, 90)
                .with_score(2, 2, 80)
                .with_score(3, 2, 70),
        );
        let service = service(students, scores);

        let algebra = service.rank_students(CourseId::new(1)).await.unwrap();
        let ids: Vec<u32> = algebra.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let history = service.rank_students(CourseId::new(2)).await.unwrap();
        let ids: Vec<u32> = history.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_rank_students_unknown_course() {
        let students = Arc::new(MockStudentRepository::new(roster()));
        let scores = Arc::new(MockScoreRepository::new());
        let service = TranscriptService::new(
            students,
            Arc::new(MockCourseRepository::new(vec![])),
            scores,
        );

        let result = service.rank_students(CourseId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptError::NoSuchCourse(id) if id == CourseId::new(1)
        ));
    }

    #[tokio::test]
    async fn test_rank_students_is_idempotent() {
        let students = Arc::new(MockStudentRepository::new(roster()));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 55)
                .with_score(2, 1, 75)
                .with_score(3, 1, 65),
        );
        let service = service(students, scores);

        let first = service.rank_students(CourseId::new(1)).await.unwrap();
        let second = service.rank_students(CourseId::new(1)).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rank_students_stable_on_ties() {
        // Grace and Alan tie; roster order between them must hold.
        let students = Arc::new(MockStudentRepository::new(roster()));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 50)
                .with_score(2, 1, 80)
                .with_score(3, 1, 80),
        );
        let service = service(students, scores);

        let ranked = service.rank_students(CourseId::new(1)).await.unwrap();
        let ids: Vec<u32> = ranked.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_rank_students_excludes_scoreless() {
        // Alan is enrolled but has no recorded score for the course.
        let students = Arc::new(MockStudentRepository::new(roster()));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 40)
                .with_score(2, 1, 60),
        );
        let service = service(students, scores);

        let ranked = service.rank_students(CourseId::new(1)).await.unwrap();
        let ids: Vec<u32> = ranked.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_rank_students_ignores_unenrolled_score_entry() {
        // A stray score entry for a student who is not enrolled in the
        // course must not appear in the ranking.
        let students = Arc::new(MockStudentRepository::new(vec![
            student(1, "Ada", &[1]),
            student(2, "Grace", &[2]),
        ]));
        let scores = Arc::new(
            MockScoreRepository::new()
                .with_score(1, 1, 70)
                .with_score(2, 1, 95),
        );
        let service = service(students, scores);

        let ranked = service.rank_students(CourseId::new(1)).await.unwrap();
        let ids: Vec<u32> = ranked.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![1]);
    }

    // ==================== Query log ====================

    #[tokio::test]
    async fn test_completed_queries_are_logged() {
        let students = Arc::new(MockStudentRepository::new(vec![student(1, "Ada", &[1])]));
        let scores = Arc::new(MockScoreRepository::new().with_score(1, 1, 77));
        let logger = Arc::new(RecordingQueryLogger::new());

        let service = service(students, scores).with_query_logger(logger.clone());
        service.average_score(StudentId::new(1)).await.unwrap();
        service.rank_students(CourseId::new(1)).await.unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "average_score");
        assert_eq!(events[0].1["average"], 77.0);
        assert_eq!(events[1].0, "rank_students");
        assert_eq!(events[1].1["students"], serde_json::json!([1]));
    }

    #[tokio::test]
    async fn test_failed_queries_are_not_logged() {
        let students = Arc::new(MockStudentRepository::new(vec![]));
        let scores = Arc::new(MockScoreRepository::new());
        let logger = Arc::new(RecordingQueryLogger::new());

        let service = service(students, scores).with_query_logger(logger.clone());
        let _ = service.average_score(StudentId::new(1)).await;

        assert!(logger.events.lock().unwrap().is_empty());
    }
}
