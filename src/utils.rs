use std::fs::Metadata;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::SweepError;

/// How long ago `meta` was last modified, relative to `now`.
/// `None` when the timestamp is unavailable or lies in the future.
pub fn age_of(meta: &Metadata, now: SystemTime) -> Option<Duration> {
    let modified = meta.modified().ok()?;
    now.duration_since(modified).ok()
}

/// Strictly older than `max_age`; an entry exactly at the threshold stays.
pub fn is_expired(meta: &Metadata, now: SystemTime, max_age: Duration) -> bool {
    age_of(meta, now).is_some_and(|age| age > max_age)
}

/// Remove a directory tree or a single file.
pub fn remove_entry(path: &Path, is_dir: bool) -> Result<(), SweepError> {
    let result = if is_dir {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|source| SweepError::Remove {
        path: path.to_path_buf(),
        source,
    })
}
