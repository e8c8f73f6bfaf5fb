use std::path::PathBuf;

use thiserror::Error;

/// A single traversal or deletion step that could not complete.
///
/// The sweeper never surfaces these to its caller. They exist so each
/// step can use `?` and so the discard point has something to log.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SweepError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            SweepError::Walk { path, .. }
            | SweepError::Metadata { path, .. }
            | SweepError::Remove { path, .. } => path,
        }
    }
}

impl From<walkdir::Error> for SweepError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        SweepError::Walk { path, source: err }
    }
}
