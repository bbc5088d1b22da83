use super::Remover;
use crate::cleanup_items::CleanupTarget;
use crate::command::Invocation;
use crate::error::Result;
use std::path::Path;

/// `rm -rf` through `sh`.
///
/// The pattern is handed over as `$1` and left unquoted with an empty `IFS`,
/// so the shell glob-expands it but never splits or parses it. A pattern that
/// matches nothing stays literal and `rm -f` ignores it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixRemover;

impl Remover for PosixRemover {
    fn name(&self) -> &'static str {
        "posix"
    }

    fn invocation(&self, target: &CleanupTarget, cwd: &Path) -> Result<Invocation> {
        Ok(Invocation::new(
            "sh",
            ["-c", "IFS=; rm -rf -- $1", "sh", target.pattern()],
            cwd,
        ))
    }
}
