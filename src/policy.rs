use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

/// What a pass is allowed to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// Whole directory trees, removed recursively.
    Directories,
    /// Individual regular files.
    Files,
}

/// Immutable configuration for one sweep.
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    pub root_path: PathBuf,
    pub age_threshold_minutes: NonZeroU32,
    pub scan_kind: ScanKind,
    /// Segments relative to `root_path`, each swept as its own pass.
    pub explicit_subpaths: Vec<String>,
    /// What the progress line says is being pruned, e.g. "old data".
    pub subject: &'static str,
    /// Whether the pass over `root_path` itself gets a progress line.
    /// Explicit-subpath passes are always announced.
    pub announce_root: bool,
}

impl RetentionPolicy {
    pub fn new(root_path: PathBuf, age_threshold_minutes: NonZeroU32, scan_kind: ScanKind) -> Self {
        Self {
            root_path,
            age_threshold_minutes,
            scan_kind,
            explicit_subpaths: Vec::new(),
            subject: "old data",
            announce_root: false,
        }
    }

    pub fn with_subject(mut self, subject: &'static str) -> Self {
        self.subject = subject;
        self
    }

    pub fn announcing_root(mut self) -> Self {
        self.announce_root = true;
        self
    }

    pub fn with_explicit_subpaths<I>(mut self, subpaths: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.explicit_subpaths = subpaths.into_iter().collect();
        self
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(u64::from(self.age_threshold_minutes.get()) * 60)
    }

    /// Roots of every explicit-subpath pass, in configured order.
    pub fn explicit_roots(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.explicit_subpaths
            .iter()
            .map(move |sub| self.root_path.join(sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_age_converts_minutes() {
        let policy = RetentionPolicy::new(
            PathBuf::from("/data"),
            NonZeroU32::new(90).unwrap(),
            ScanKind::Files,
        );
        assert_eq!(policy.max_age(), Duration::from_secs(5400));
    }

    #[test]
    fn explicit_roots_keep_order() {
        let policy = RetentionPolicy::new(
            PathBuf::from("/data"),
            NonZeroU32::new(1).unwrap(),
            ScanKind::Directories,
        )
        .with_explicit_subpaths(["b".to_string(), "a".to_string()]);

        let roots: Vec<PathBuf> = policy.explicit_roots().collect();
        assert_eq!(roots, vec![PathBuf::from("/data/b"), PathBuf::from("/data/a")]);
    }

    #[test]
    fn subject_defaults_to_old_data_without_root_announcement() {
        let policy = RetentionPolicy::new(
            PathBuf::from("/tmp"),
            NonZeroU32::new(1).unwrap(),
            ScanKind::Files,
        );
        assert_eq!(policy.subject, "old data");
        assert!(!policy.announce_root);

        let policy = policy.with_subject("old temporary files").announcing_root();
        assert_eq!(policy.subject, "old temporary files");
        assert!(policy.announce_root);
    }
}
