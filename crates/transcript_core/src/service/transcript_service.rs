//! Transcript use-case service.
//!
//! # Responsibility
//! - Provide the stable store entry points for core callers.
//! - Delegate storage and ID bookkeeping to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository reference/duplicate checks.
//! - Log events carry IDs and error codes only, never student or course names.

use crate::model::transcript::{StudentId, Transcript};
use crate::repo::transcript_repo::{RepoError, RepoResult, TranscriptRepository};
use log::{debug, info, warn};

/// Use-case service wrapper for transcript store operations.
pub struct TranscriptService<R: TranscriptRepository> {
    repo: R,
}

impl<R: TranscriptRepository> TranscriptService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Resets the store to empty and restarts ID assignment at 1.
    ///
    /// Safe to call repeatedly.
    pub fn initialize(&self) {
        self.repo.initialize();
        info!("event=store_init module=service status=ok");
    }

    /// Creates a student with an empty transcript.
    ///
    /// # Contract
    /// - Returns the next sequential ID; IDs are never reused.
    pub fn add_student(&self, student_name: &str) -> StudentId {
        let id = self.repo.create_student(student_name);
        info!("event=student_add module=service status=ok student_id={id}");
        id
    }

    /// Records `grade` for `course` on the student's transcript.
    ///
    /// # Errors
    /// - `RepoError::UnknownStudent` when `id` is not in the store.
    /// - `RepoError::DuplicateGrade` when `course` is already recorded; the
    ///   existing grade is kept.
    pub fn add_grade(&self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        self.repo
            .add_grade(id, course, grade)
            .inspect(|_| info!("event=grade_add module=service status=ok student_id={id}"))
            .inspect_err(|err| log_failure("grade_add", id, err))
    }

    /// Returns the grade recorded for `course`.
    ///
    /// # Errors
    /// - `RepoError::UnknownStudent` when `id` is not in the store.
    /// - `RepoError::UnknownCourse` when the transcript has no such course.
    pub fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<f64> {
        self.repo
            .get_grade(id, course)
            .inspect_err(|err| log_failure("grade_get", id, err))
    }

    /// Returns IDs of students whose name matches exactly, ascending.
    ///
    /// An empty result is not an error.
    pub fn get_student_ids(&self, student_name: &str) -> Vec<StudentId> {
        let ids = self.repo.find_student_ids(student_name);
        debug!(
            "event=student_lookup module=service status=ok matches={}",
            ids.len()
        );
        ids
    }

    /// Removes a student and their transcript.
    ///
    /// # Errors
    /// - `RepoError::UnknownStudent` when `id` is not in the store.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.repo
            .delete_student(id)
            .inspect(|_| {
                info!("event=student_delete module=service status=ok student_id={id}")
            })
            .inspect_err(|err| log_failure("student_delete", id, err))
    }

    /// Gets one transcript; `None` is a lookup miss, not a failure.
    pub fn get_transcript(&self, id: StudentId) -> Option<Transcript> {
        self.repo.get_transcript(id)
    }

    /// Lists every transcript in creation order.
    pub fn get_all(&self) -> Vec<Transcript> {
        self.repo.list_transcripts()
    }

    pub fn student_count(&self) -> usize {
        self.repo.count_students()
    }
}

fn log_failure(event: &str, id: StudentId, err: &RepoError) {
    warn!(
        "event={event} module=service status=error student_id={id} error_code={}",
        err.kind().as_code()
    );
}
