use crate::cleanup_items::{get_all_cleanup_targets, CleanupTarget};
use crate::platform::PlatformMode;
use std::path::PathBuf;

/// Presence of this file gates the build tool's clean step
pub const BUILD_MARKER: &str = "Makefile";

/// Everything a cleaning run needs, resolved at startup
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub directory: PathBuf,
    pub mode: PlatformMode,
    pub targets: Vec<CleanupTarget>,
    pub build_clean: bool,
    pub build_program: String,
    pub build_args: Vec<String>,
    pub dry_run: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            mode: PlatformMode::default(),
            targets: get_all_cleanup_targets(Vec::<String>::new()),
            build_clean: true,
            build_program: "make".to_string(),
            build_args: vec!["clean".to_string()],
            dry_run: false,
        }
    }
}

impl CleanConfig {
    pub fn marker_path(&self) -> PathBuf {
        self.directory.join(BUILD_MARKER)
    }
}
