use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::SweepError;
use crate::output;
use crate::policy::{RetentionPolicy, ScanKind};
use crate::utils;

/// Wall-clock bounds of a sweep. Carries nothing about what was deleted.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
}

impl RunReport {
    pub fn elapsed_seconds(&self) -> i64 {
        self.end_time.timestamp() - self.start_time.timestamp()
    }

    /// One report covering `self` followed by `later`.
    pub fn through(self, later: RunReport) -> RunReport {
        RunReport {
            start_time: self.start_time,
            end_time: later.end_time,
        }
    }
}

/// Which traversal of a policy is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassScope {
    /// The configured root. A symlinked root is followed.
    Root,
    /// A named subpath. A symlinked subpath is left alone.
    Explicit,
}

/// Deletes entries older than a policy's threshold. Every failure is
/// logged at debug level and dropped; a sweep cannot fail.
#[derive(Debug, Default)]
pub struct RetentionSweeper {
    pinned_now: Option<SystemTime>,
}

impl RetentionSweeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Judge ages against a fixed instant instead of the system clock.
    pub fn at(now: SystemTime) -> Self {
        Self {
            pinned_now: Some(now),
        }
    }

    fn now(&self) -> SystemTime {
        self.pinned_now.unwrap_or_else(SystemTime::now)
    }

    /// Run the root pass, then one pass per explicit subpath. Progress
    /// lines go to `out`.
    pub fn sweep<W: Write>(&self, policy: &RetentionPolicy, out: &mut W) -> RunReport {
        let start_time = Local::now();

        self.pass(out, policy, &policy.root_path, PassScope::Root);

        // Redundant with the root pass on purpose: each named subpath gets
        // its own traversal.
        for root in policy.explicit_roots() {
            self.pass(out, policy, &root, PassScope::Explicit);
        }

        RunReport {
            start_time,
            end_time: Local::now(),
        }
    }

    /// One traversal-and-delete below `root`. The root itself is never a
    /// candidate.
    fn pass<W: Write>(&self, out: &mut W, policy: &RetentionPolicy, root: &Path, scope: PassScope) {
        if scope == PassScope::Explicit || policy.announce_root {
            output::print_pruning(out, policy.subject, root);
        }

        let kind = policy.scan_kind;
        let max_age = policy.max_age();
        info!(root = %root.display(), ?kind, ?scope, max_age_secs = max_age.as_secs(), "starting pass");
        let now = self.now();

        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .follow_root_links(scope == PassScope::Root)
            .into_iter();

        while let Some(next) = walker.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    discard(SweepError::from(err));
                    continue;
                }
            };

            let wanted = match kind {
                ScanKind::Directories => entry.file_type().is_dir(),
                ScanKind::Files => entry.file_type().is_file(),
            };
            if !wanted {
                continue;
            }

            match prune_entry(&entry, now, max_age) {
                // Removed trees must not be descended into.
                Ok(true) if entry.file_type().is_dir() => walker.skip_current_dir(),
                Ok(_) => {}
                Err(err) => discard(err),
            }
        }
    }
}

/// Delete `entry` if it has expired. Returns whether it was removed.
fn prune_entry(entry: &DirEntry, now: SystemTime, max_age: Duration) -> Result<bool, SweepError> {
    let path = entry.path();
    let meta = entry.metadata().map_err(|err| SweepError::Metadata {
        path: path.to_path_buf(),
        source: err.into(),
    })?;

    if !utils::is_expired(&meta, now, max_age) {
        return Ok(false);
    }

    utils::remove_entry(path, entry.file_type().is_dir())?;
    debug!(path = %path.display(), "removed expired entry");
    Ok(true)
}

fn discard(err: SweepError) {
    debug!(path = %err.path().display(), error = %err, "ignoring sweep failure");
}
