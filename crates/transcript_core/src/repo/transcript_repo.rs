//! Transcript repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the transcript store.
//! - Own sequential student ID assignment.
//!
//! # Invariants
//! - IDs start at 1 and are never reused, even after deletion.
//! - `initialize` is the only way to reset the ID counter.
//! - All checks run before any mutation, so a failed call changes nothing.

use crate::model::transcript::{GradeEntry, Student, StudentId, Transcript};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

const FIRST_STUDENT_ID: StudentId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Coarse error classification shared by every store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoErrorKind {
    /// Unknown student ID, or unknown course on an existing transcript.
    InvalidReference,
    /// Course already recorded on the transcript.
    DuplicateEntry,
}

impl RepoErrorKind {
    /// Stable `snake_case` code used in log events.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::InvalidReference => "invalid_reference",
            Self::DuplicateEntry => "duplicate_entry",
        }
    }
}

/// Repository error for transcript store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    UnknownStudent(StudentId),
    UnknownCourse {
        student_id: StudentId,
        course: String,
    },
    DuplicateGrade {
        student_id: StudentId,
        course: String,
    },
}

impl RepoError {
    pub fn kind(&self) -> RepoErrorKind {
        match self {
            Self::UnknownStudent(_) | Self::UnknownCourse { .. } => {
                RepoErrorKind::InvalidReference
            }
            Self::DuplicateGrade { .. } => RepoErrorKind::DuplicateEntry,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStudent(id) => write!(f, "student not found: {id}"),
            Self::UnknownCourse { student_id, course } => {
                write!(f, "course `{course}` not found on transcript {student_id}")
            }
            Self::DuplicateGrade { student_id, course } => write!(
                f,
                "grade for course `{course}` already recorded on transcript {student_id}"
            ),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for transcript CRUD operations.
pub trait TranscriptRepository {
    fn initialize(&self);
    fn create_student(&self, student_name: &str) -> StudentId;
    fn add_grade(&self, id: StudentId, course: &str, grade: f64) -> RepoResult<()>;
    fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<f64>;
    fn find_student_ids(&self, student_name: &str) -> Vec<StudentId>;
    fn delete_student(&self, id: StudentId) -> RepoResult<()>;
    fn get_transcript(&self, id: StudentId) -> Option<Transcript>;
    fn list_transcripts(&self) -> Vec<Transcript>;
    fn count_students(&self) -> usize;
}

impl<R: TranscriptRepository + ?Sized> TranscriptRepository for &R {
    fn initialize(&self) {
        (**self).initialize()
    }

    fn create_student(&self, student_name: &str) -> StudentId {
        (**self).create_student(student_name)
    }

    fn add_grade(&self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        (**self).add_grade(id, course, grade)
    }

    fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<f64> {
        (**self).get_grade(id, course)
    }

    fn find_student_ids(&self, student_name: &str) -> Vec<StudentId> {
        (**self).find_student_ids(student_name)
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        (**self).delete_student(id)
    }

    fn get_transcript(&self, id: StudentId) -> Option<Transcript> {
        (**self).get_transcript(id)
    }

    fn list_transcripts(&self) -> Vec<Transcript> {
        (**self).list_transcripts()
    }

    fn count_students(&self) -> usize {
        (**self).count_students()
    }
}

#[derive(Debug)]
struct StoreState {
    next_id: StudentId,
    // Keyed by ID, so iteration order is creation order.
    transcripts: BTreeMap<StudentId, Transcript>,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            next_id: FIRST_STUDENT_ID,
            transcripts: BTreeMap::new(),
        }
    }

    fn transcript(&self, id: StudentId) -> RepoResult<&Transcript> {
        self.transcripts
            .get(&id)
            .ok_or(RepoError::UnknownStudent(id))
    }

    fn transcript_mut(&mut self, id: StudentId) -> RepoResult<&mut Transcript> {
        self.transcripts
            .get_mut(&id)
            .ok_or(RepoError::UnknownStudent(id))
    }
}

/// Mutex-guarded in-memory transcript repository.
#[derive(Debug)]
pub struct InMemoryTranscriptRepository {
    state: Mutex<StoreState>,
}

impl InMemoryTranscriptRepository {
    /// Creates an empty store whose first issued ID is 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::empty()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every write happens after its checks pass, so a poisoned state is
        // still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTranscriptRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptRepository for InMemoryTranscriptRepository {
    fn initialize(&self) {
        *self.lock() = StoreState::empty();
    }

    fn create_student(&self, student_name: &str) -> StudentId {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state
            .transcripts
            .insert(id, Transcript::new(Student::new(id, student_name)));
        id
    }

    fn add_grade(&self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        let mut state = self.lock();
        let transcript = state.transcript_mut(id)?;
        if transcript.has_course(course) {
            return Err(RepoError::DuplicateGrade {
                student_id: id,
                course: course.to_string(),
            });
        }
        transcript.grades.push(GradeEntry::new(course, grade));
        Ok(())
    }

    fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<f64> {
        let state = self.lock();
        let transcript = state.transcript(id)?;
        transcript
            .grade_for(course)
            .ok_or_else(|| RepoError::UnknownCourse {
                student_id: id,
                course: course.to_string(),
            })
    }

    fn find_student_ids(&self, student_name: &str) -> Vec<StudentId> {
        self.lock()
            .transcripts
            .values()
            .filter(|transcript| transcript.student.student_name == student_name)
            .map(Transcript::student_id)
            .collect()
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.lock()
            .transcripts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::UnknownStudent(id))
    }

    fn get_transcript(&self, id: StudentId) -> Option<Transcript> {
        self.lock().transcripts.get(&id).cloned()
    }

    fn list_transcripts(&self) -> Vec<Transcript> {
        self.lock().transcripts.values().cloned().collect()
    }

    fn count_students(&self) -> usize {
        self.lock().transcripts.len()
    }
}
