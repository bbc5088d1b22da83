use std::fmt;

/// Patterns removed on every run. Add any additional files you wish to clean here.
pub const DEFAULT_TARGETS: &[&str] = &["obj", "*.suo", "*.sdf"];

/// A file, directory or shell glob pattern slated for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    pattern: String,
}

impl CleanupTarget {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for CleanupTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for CleanupTarget {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// The shipped defaults followed by any user-supplied patterns, in order
pub fn get_all_cleanup_targets<I, S>(extra: I) -> Vec<CleanupTarget>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DEFAULT_TARGETS
        .iter()
        .map(|p| CleanupTarget::new(*p))
        .chain(extra.into_iter().map(CleanupTarget::new))
        .collect()
}
