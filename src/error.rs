use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for clean-build
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("Refusing pattern {pattern:?}: contains shell metacharacter {found:?}")]
    UnsafePattern { pattern: String, found: char },
}

/// Result type alias for cleaner error handling
pub type Result<T> = std::result::Result<T, CleanError>;
