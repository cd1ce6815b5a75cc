//! File relocation into bucket subdirectories.
//!
//! This module materializes a bucket mapping as moves: it creates one
//! destination subdirectory per bucket and renames each file into it, isolating
//! failures at file granularity so one bad file never blocks the rest of the
//! batch.

use crate::classifier::Buckets;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while moving a single file.
#[derive(Debug)]
pub enum MoveError {
    /// Failed to create a bucket's destination subdirectory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file into its destination subdirectory.
    FileMoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(f, "Failed to create {}: {}", path.display(), source)
            }
            Self::FileMoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The result of one attempted move, reported through the log callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file landed in its destination subdirectory.
    Moved {
        file_name: String,
        /// Destination subdirectory name, e.g. `jpg` or `2024-03-05`.
        dest: String,
    },
    /// The move failed; the file was left in place.
    Failed { file_name: String, reason: String },
}

/// Moves every bucketed file into its bucket's subdirectory under `base`.
///
/// Destination directories are created lazily and idempotently; a directory
/// that already exists (or appears concurrently) is not an error. A creation
/// failure aborts only that bucket: its files are reported as failed and the
/// remaining buckets still proceed.
///
/// Each file is renamed into the destination under its original name. Per-file
/// failures are converted into [`MoveOutcome::Failed`] and never unwind the
/// loop; the failed file stays in the source directory. The callback fires
/// exactly once per attempted move.
///
/// Returns the number of files actually moved.
pub fn relocate<F>(base: &Path, buckets: &Buckets, mut log: F) -> usize
where
    F: FnMut(&MoveOutcome),
{
    let mut moved_count = 0;

    for (key, files) in buckets {
        let dest_name = key.dir_name();
        let dest_dir = base.join(&dest_name);

        // create_dir_all succeeds when the directory already exists, which
        // also covers a racing creation by another process.
        if let Err(e) = fs::create_dir_all(&dest_dir) {
            let err = MoveError::DirectoryCreationFailed {
                path: dest_dir,
                source: e,
            };
            let reason = err.to_string();
            for file in files {
                log(&MoveOutcome::Failed {
                    file_name: file.file_name.clone(),
                    reason: reason.clone(),
                });
            }
            continue;
        }

        for file in files {
            match move_into(&dest_dir, &file.path, &file.file_name) {
                Ok(()) => {
                    moved_count += 1;
                    log(&MoveOutcome::Moved {
                        file_name: file.file_name.clone(),
                        dest: dest_name.clone(),
                    });
                }
                Err(e) => {
                    log(&MoveOutcome::Failed {
                        file_name: file.file_name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    moved_count
}

/// Renames one file into `dest_dir` under `file_name`.
///
/// A rename is a single filesystem operation: on failure the source file is
/// untouched, so no cleanup is needed.
fn move_into(dest_dir: &Path, from: &Path, file_name: &str) -> Result<(), MoveError> {
    let to = dest_dir.join(file_name);
    fs::rename(from, &to).map_err(|e| MoveError::FileMoveFailed {
        from: from.to_path_buf(),
        to,
        source: e,
    })
}
