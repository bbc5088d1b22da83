//! clean-build - remove build artifacts from a project directory
//!
//! Runs the build tool's `clean` target when a Makefile is present, then
//! deletes a fixed list of extra patterns. Every failure is recorded and
//! otherwise ignored.

pub mod cleaner;
pub mod cleanup_items;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod platform;

pub use cleaner::{CleanReport, Cleaner, RemovalAttempt, StepOutcome};
pub use cleanup_items::{get_all_cleanup_targets, CleanupTarget, DEFAULT_TARGETS};
pub use command::{CommandRunner, Invocation, SystemRunner};
pub use config::{CleanConfig, BUILD_MARKER};
pub use error::{CleanError, Result};
pub use platform::{PlatformMode, Remover};
