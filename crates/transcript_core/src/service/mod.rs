//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Emit metadata-only diagnostic events for every store mutation.

pub mod transcript_service;
