use super::Remover;
use crate::cleanup_items::CleanupTarget;
use crate::command::Invocation;
use crate::error::{CleanError, Result};
use std::path::Path;

/// Characters `cmd /C` would treat as syntax rather than part of a file name
const CMD_METACHARACTERS: &[char] = &['&', '|', '<', '>', '^', '"', '%', '\r', '\n'];

/// `del /F /Q` through `cmd /C`, since `del` is a cmd builtin.
///
/// cmd re-parses the whole command line, so patterns carrying cmd syntax are
/// rejected instead of being passed along.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRemover;

impl Remover for WindowsRemover {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn invocation(&self, target: &CleanupTarget, cwd: &Path) -> Result<Invocation> {
        let pattern = target.pattern();
        if let Some(found) = pattern.chars().find(|c| CMD_METACHARACTERS.contains(c)) {
            return Err(CleanError::UnsafePattern {
                pattern: pattern.to_string(),
                found,
            });
        }
        Ok(Invocation::new(
            "cmd",
            ["/C", "del", "/F", "/Q", pattern],
            cwd,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_quiet_delete() {
        let inv = WindowsRemover
            .invocation(&"obj".into(), Path::new("C:\\proj"))
            .unwrap();
        assert_eq!(inv.to_string(), "cmd /C del /F /Q obj");
    }

    #[test]
    fn rejects_cmd_syntax() {
        for pattern in ["a & del keep.txt", "a | more", "%PATH%", "x > y"] {
            let err = WindowsRemover
                .invocation(&pattern.into(), Path::new("C:\\proj"))
                .unwrap_err();
            assert!(matches!(err, CleanError::UnsafePattern { .. }), "{}", pattern);
        }
    }

    #[test]
    fn plain_globs_are_accepted() {
        for pattern in ["*.suo", "bin", "My Project (old).sdf"] {
            assert!(WindowsRemover
                .invocation(&pattern.into(), Path::new("C:\\proj"))
                .is_ok());
        }
    }
}
