//! Core domain logic for the transcript store.
//! This crate is the single source of truth for student/grade invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogConfig};
pub use model::transcript::{GradeEntry, Student, StudentId, Transcript};
pub use repo::transcript_repo::{
    InMemoryTranscriptRepository, RepoError, RepoErrorKind, RepoResult, TranscriptRepository,
};
pub use service::transcript_service::TranscriptService;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
