pub mod unix;
pub mod windows;

use crate::cleanup_items::CleanupTarget;
use crate::command::Invocation;
use crate::error::Result;
use std::path::Path;

pub use unix::PosixRemover;
pub use windows::WindowsRemover;

/// Which shell's delete command is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformMode {
    Windows,
    #[default]
    Posix,
}

impl PlatformMode {
    /// The exact value that selects Windows commands
    pub const WINDOWS_FLAG: &'static str = "--windows";

    /// `Windows` only for an exact `--windows`; anything else, or nothing, is `Posix`
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(Self::WINDOWS_FLAG) => PlatformMode::Windows,
            _ => PlatformMode::Posix,
        }
    }

    /// Pick the delete strategy once for the whole run
    pub fn remover(self) -> Box<dyn Remover> {
        match self {
            PlatformMode::Windows => Box::new(WindowsRemover),
            PlatformMode::Posix => Box::new(PosixRemover),
        }
    }
}

/// Builds the shell command that deletes a path or pattern
pub trait Remover {
    fn name(&self) -> &'static str;

    /// Fails when the pattern cannot be passed to this shell safely
    fn invocation(&self, target: &CleanupTarget, cwd: &Path) -> Result<Invocation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_windows_flag_selects_windows() {
        assert_eq!(PlatformMode::from_arg(Some("--windows")), PlatformMode::Windows);
        assert_eq!(PlatformMode::from_arg(Some("--Windows")), PlatformMode::Posix);
        assert_eq!(PlatformMode::from_arg(Some("windows")), PlatformMode::Posix);
        assert_eq!(PlatformMode::from_arg(Some("")), PlatformMode::Posix);
        assert_eq!(PlatformMode::from_arg(None), PlatformMode::Posix);
    }
}
