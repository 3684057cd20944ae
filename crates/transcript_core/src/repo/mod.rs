//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep store bookkeeping (ID counter, ordering) out of the service layer.
//!
//! # Invariants
//! - Failed writes leave the store untouched.
//! - Repository APIs return semantic errors (`UnknownStudent`, `DuplicateGrade`)
//!   rather than panicking on bad references.

pub mod transcript_repo;
