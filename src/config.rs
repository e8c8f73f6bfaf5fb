use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::policy::{RetentionPolicy, ScanKind};

/// Base directory holding node data.
pub const DATA_ROOT: &str = "/home/dfuse/hl/data";

/// Directories under the data root older than this are pruned.
pub const DATA_MAX_AGE_HOURS: u32 = 24;

/// Subdirectories of the data root swept again on their own after the
/// root pass. Kept as separate passes even though the root pass already
/// covers them.
pub const EXPLICIT_SUBPATHS: &[&str] = &[
    "replica_cmds",
    "node_logs",
    "visor_child_stderr",
    "rate_limited_ips",
];

/// Scratch directory swept file by file in the timed variant.
pub const TMP_ROOT: &str = "/home/dfuse/hl/tmp";

/// 12 hours.
pub const TMP_MAX_AGE_MINUTES: u32 = 720;

/// Thresholds as the policy stores them. A zero constant fails the build.
pub const DATA_MAX_AGE: NonZeroU32 = minutes(DATA_MAX_AGE_HOURS * 60);
pub const TMP_MAX_AGE: NonZeroU32 = minutes(TMP_MAX_AGE_MINUTES);

pub fn data_policy() -> RetentionPolicy {
    RetentionPolicy::new(
        PathBuf::from(DATA_ROOT),
        DATA_MAX_AGE,
        ScanKind::Directories,
    )
    .with_explicit_subpaths(EXPLICIT_SUBPATHS.iter().map(|s| s.to_string()))
}

pub fn tmp_policy() -> RetentionPolicy {
    RetentionPolicy::new(
        PathBuf::from(TMP_ROOT),
        TMP_MAX_AGE,
        ScanKind::Files,
    )
    .with_subject("old temporary files")
    .announcing_root()
}

const fn minutes(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(value) => value,
        None => panic!("retention threshold must be non-zero"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_policy_uses_a_day_and_all_subpaths() {
        let policy = data_policy();
        assert_eq!(policy.root_path, PathBuf::from("/home/dfuse/hl/data"));
        assert_eq!(policy.age_threshold_minutes.get(), 1440);
        assert_eq!(policy.scan_kind, ScanKind::Directories);
        assert_eq!(policy.subject, "old data");
        assert!(!policy.announce_root);
        assert_eq!(
            policy.explicit_subpaths,
            vec![
                "replica_cmds",
                "node_logs",
                "visor_child_stderr",
                "rate_limited_ips"
            ]
        );
    }

    #[test]
    fn tmp_policy_targets_files_with_twelve_hours() {
        let policy = tmp_policy();
        assert_eq!(policy.root_path, PathBuf::from("/home/dfuse/hl/tmp"));
        assert_eq!(policy.age_threshold_minutes.get(), 720);
        assert_eq!(policy.scan_kind, ScanKind::Files);
        assert!(policy.explicit_subpaths.is_empty());
        assert_eq!(policy.subject, "old temporary files");
        assert!(policy.announce_root);
    }
}
