//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `transcript_core` linkage.
//! - Run a short scripted session against an in-memory store, with service
//!   events written to a rolling log under the system temp directory.

use std::error::Error;
use transcript_core::{InMemoryTranscriptRepository, RepoResult, TranscriptService};

const LOG_DIR_NAME: &str = "transcript_cli_logs";

fn main() {
    println!("transcript_core ping={}", transcript_core::ping());
    println!("transcript_core version={}", transcript_core::core_version());

    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match transcript_core::init_logging(
        transcript_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        Ok(()) => println!("log_dir={}", log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let outcome = run_session();
    transcript_core::flush_logging();
    if let Err(err) = outcome {
        eprintln!("session failed: {err}");
        std::process::exit(1);
    }
}

fn run_session() -> Result<(), Box<dyn Error>> {
    let service = TranscriptService::new(InMemoryTranscriptRepository::new());
    service.initialize();

    let id = service.add_student("avery");
    service.add_grade(id, "CS", 100.0)?;
    service.add_grade(id, "Math", 90.0)?;

    let kind = ensure_rejected(service.add_grade(id, "CS", 80.0))?;
    println!("duplicate rejected kind={kind}");

    for transcript in service.get_all() {
        println!(
            "student_id={} grades={} cs={}",
            transcript.student_id(),
            transcript.grades.len(),
            service.get_grade(transcript.student_id(), "CS")?
        );
    }
    Ok(())
}

/// Turns an unexpected success into a session error.
fn ensure_rejected(result: RepoResult<()>) -> Result<&'static str, Box<dyn Error>> {
    match result {
        Ok(()) => Err("duplicate grade was accepted".into()),
        Err(err) => Ok(err.kind().as_code()),
    }
}
