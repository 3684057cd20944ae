//! Transcript domain model.
//!
//! # Responsibility
//! - Define the student identity record and its course/grade entries.
//! - Provide read helpers over the ordered grade list.
//!
//! # Invariants
//! - `student_id` is assigned by the store and never changes afterwards.
//! - `grades` keeps insertion order and holds each course at most once.

use serde::{Deserialize, Serialize};

/// Sequential student identifier, starting at 1.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = u64;

/// Student identity as stored in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Serialized as `studentID` to match external schema naming.
    #[serde(rename = "studentID")]
    pub student_id: StudentId,
    #[serde(rename = "studentName")]
    pub student_name: String,
}

impl Student {
    pub fn new(student_id: StudentId, student_name: impl Into<String>) -> Self {
        Self {
            student_id,
            student_name: student_name.into(),
        }
    }
}

/// One recorded course result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub course: String,
    pub grade: f64,
}

impl GradeEntry {
    pub fn new(course: impl Into<String>, grade: f64) -> Self {
        Self {
            course: course.into(),
            grade,
        }
    }
}

/// A student's identity plus every recorded course/grade pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub student: Student,
    /// Insertion-ordered; course names are unique.
    pub grades: Vec<GradeEntry>,
}

impl Transcript {
    /// Creates a transcript with no recorded grades.
    pub fn new(student: Student) -> Self {
        Self {
            student,
            grades: Vec::new(),
        }
    }

    pub fn student_id(&self) -> StudentId {
        self.student.student_id
    }

    /// Returns the grade recorded for `course`, matched exactly.
    pub fn grade_for(&self, course: &str) -> Option<f64> {
        self.grades
            .iter()
            .find(|entry| entry.course == course)
            .map(|entry| entry.grade)
    }

    pub fn has_course(&self, course: &str) -> bool {
        self.grades.iter().any(|entry| entry.course == course)
    }
}
