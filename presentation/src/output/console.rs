//! Console output formatter for transcript query results

use colored::Colorize;
use gradebook_domain::{CourseId, Student, StudentId};

/// Formats transcript query results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an average-score result
    pub fn format_average(student: StudentId, average: f64) -> String {
        format!(
            "{} {:.1}",
            format!("Average score for student {}:", student).cyan().bold(),
            average
        )
    }

    /// Format an average-score result as JSON
    pub fn format_average_json(student: StudentId, average: f64) -> String {
        serde_json::json!({
            "student": student.value(),
            "average": average,
        })
        .to_string()
    }

    /// Format a course ranking, best score first
    pub fn format_ranking(course: CourseId, ranked: &[Student]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("Ranking for course {} ({} students)", course, ranked.len())
                .cyan()
                .bold()
        ));

        output.push_str(&format!(
            "{}\n",
            format!("{:>4}  {:>4}  {:<20}  {}", "#", "ID", "Name", "Major").dimmed()
        ));
        for (rank, student) in ranked.iter().enumerate() {
            output.push_str(&format!(
                "{:>4}  {:>4}  {:<20}  {}\n",
                rank + 1,
                student.id(),
                student.name(),
                student.major()
            ));
        }

        output
    }

    /// Format a course ranking as JSON
    pub fn format_ranking_json(course: CourseId, ranked: &[Student]) -> String {
        let ranking: Vec<_> = ranked
            .iter()
            .enumerate()
            .map(|(rank, student)| {
                serde_json::json!({
                    "rank": rank + 1,
                    "id": student.id().value(),
                    "name": student.name(),
                    "major": student.major(),
                })
            })
            .collect();

        serde_json::json!({
            "course": course.value(),
            "ranking": ranking,
        })
        .to_string()
    }

    /// Format the student roster listing
    pub fn format_students(students: &[Student]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("{} students", students.len()).cyan().bold()
        ));

        for student in students {
            let courses: Vec<String> = student
                .courses()
                .iter()
                .map(|c| c.to_string())
                .collect();
            output.push_str(&format!(
                "{:>4}  {:<20}  {:<20}  courses: [{}]\n",
                student.id(),
                student.name(),
                student.major(),
                courses.join(", ")
            ));
        }

        output
    }

    /// Format the student roster listing as JSON
    pub fn format_students_json(students: &[Student]) -> String {
        serde_json::to_string_pretty(students).unwrap_or_else(|_| "[]".to_string())
    }
}
