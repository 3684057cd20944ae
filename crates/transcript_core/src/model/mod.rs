//! Domain model for student transcripts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the external field naming (`studentID`, `studentName`) in one place.
//!
//! # Invariants
//! - Every student is identified by a sequential `StudentId` that is never reused.
//! - Course names are unique within one transcript.

pub mod transcript;
