//! File classification for directory sorting.
//!
//! This module takes a snapshot of a directory's regular files and groups them
//! into buckets keyed either by file extension or by last-modified date.
//! Classification is read-only; moving the files is handled by
//! [`crate::relocator`].

use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// The classification rule applied to each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Group by lower-cased file extension.
    ByExtension,
    /// Group by last-modified calendar date in local time.
    ByDate,
}

/// One regular file as seen at classification time.
///
/// Entries are re-read from the filesystem on every run and become stale the
/// moment the file is moved, so no entry is ever touched twice.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path of the file inside the source directory.
    pub path: PathBuf,
    /// The file name component, used for log lines and the destination name.
    pub file_name: String,
    /// Lower-cased extension, or `None` for files without one.
    ///
    /// Uses `Path::extension()` semantics: the part after the last dot of the
    /// file name. A leading-dot name with no further dot (`.gitignore`) has no
    /// extension; `archive.tar.gz` has extension `gz`.
    pub extension: Option<String>,
    /// Last-modified timestamp.
    pub modified: SystemTime,
}

/// The key a bucket of files is grouped under.
///
/// The no-extension case is a dedicated variant rather than a magic string, so
/// it can never collide with a file whose literal extension spells the same
/// text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// A lower-cased file extension, e.g. `jpg`.
    Extension(String),
    /// Files without an extension.
    NoExtension,
    /// A last-modified calendar date.
    Date(NaiveDate),
}

impl BucketKey {
    /// Returns the destination subdirectory name for this bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartsort::classifier::BucketKey;
    ///
    /// assert_eq!(BucketKey::Extension("jpg".to_string()).dir_name(), "jpg");
    /// assert_eq!(BucketKey::NoExtension.dir_name(), "no_extension");
    /// ```
    pub fn dir_name(&self) -> String {
        match self {
            BucketKey::Extension(ext) => ext.clone(),
            BucketKey::NoExtension => "no_extension".to_string(),
            BucketKey::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dir_name())
    }
}

/// Mapping from bucket key to the files grouped under it.
///
/// Per-bucket order is directory-enumeration order; map iteration order is
/// deterministic but carries no meaning beyond "each bucket appears once".
pub type Buckets = BTreeMap<BucketKey, Vec<FileEntry>>;

/// Errors that can occur while classifying a directory.
#[derive(Debug)]
pub enum ClassifyError {
    /// The target path is missing, not a directory, or cannot be read.
    InvalidDirectory {
        path: PathBuf,
        source: Option<std::io::Error>,
    },
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirectory { path, source } => match source {
                Some(e) => write!(f, "Cannot read directory {}: {}", path.display(), e),
                None => write!(
                    f,
                    "Folder {} does not exist or is not a directory",
                    path.display()
                ),
            },
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Groups the regular files directly inside `dir` into buckets.
///
/// Only plain files are classified; subdirectories, symlinks and special files
/// are skipped, so destination folders created by an earlier run are never
/// picked up again. Every enumerated file lands in exactly one bucket.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidDirectory`] when `dir` is missing, not a
/// directory, or unreadable. Nothing is enumerated in that case.
pub fn classify(dir: &Path, strategy: Strategy) -> Result<Buckets, ClassifyError> {
    if !dir.is_dir() {
        return Err(ClassifyError::InvalidDirectory {
            path: dir.to_path_buf(),
            source: None,
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| ClassifyError::InvalidDirectory {
        path: dir.to_path_buf(),
        source: Some(e),
    })?;

    let mut buckets = Buckets::new();

    for entry in entries.flatten() {
        // file_type() does not follow symlinks, so symlinked entries of any
        // kind are left alone.
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
            && let Ok(metadata) = entry.metadata()
            && let Ok(modified) = metadata.modified()
        {
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase());

            let key = match strategy {
                Strategy::ByExtension => match &extension {
                    Some(ext) => BucketKey::Extension(ext.clone()),
                    None => BucketKey::NoExtension,
                },
                Strategy::ByDate => {
                    BucketKey::Date(DateTime::<Local>::from(modified).date_naive())
                }
            };

            buckets.entry(key).or_default().push(FileEntry {
                path,
                file_name,
                extension,
                modified,
            });
        }
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create test file");
    }

    #[test]
    fn test_classify_invalid_directory() {
        let result = classify(Path::new("/no/such/folder"), Strategy::ByExtension);
        assert!(matches!(
            result,
            Err(ClassifyError::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn test_classify_path_is_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("plain.txt");
        File::create(&file).expect("Failed to create test file");

        let result = classify(&file, Strategy::ByExtension);
        assert!(matches!(
            result,
            Err(ClassifyError::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn test_classify_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_extension_case_folding() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "a.JPG");
        touch(temp_dir.path(), "b.jpg");

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        assert_eq!(buckets.len(), 1);
        let files = &buckets[&BucketKey::Extension("jpg".to_string())];
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_no_extension_and_dotfiles() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "README");
        touch(temp_dir.path(), ".gitignore");
        touch(temp_dir.path(), "notes.txt");

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();

        // Leading-dot names with no further dot have no extension, so README
        // and .gitignore share the sentinel bucket.
        let no_ext = &buckets[&BucketKey::NoExtension];
        assert_eq!(no_ext.len(), 2);
        assert_eq!(buckets[&BucketKey::Extension("txt".to_string())].len(), 1);
    }

    #[test]
    fn test_multi_dot_names_use_last_segment() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "archive.tar.gz");

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        assert!(buckets.contains_key(&BucketKey::Extension("gz".to_string())));
        assert!(!buckets.contains_key(&BucketKey::Extension("tar.gz".to_string())));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "a.txt");
        fs::create_dir(temp_dir.path().join("already_sorted"))
            .expect("Failed to create subdirectory");

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&BucketKey::Extension("txt".to_string())].len(), 1);
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let names = ["a.txt", "b.txt", "c.jpg", "README", "archive.tar.gz"];
        for name in names {
            touch(temp_dir.path(), name);
        }

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        let mut seen: Vec<String> = buckets
            .values()
            .flatten()
            .map(|entry| entry.file_name.clone())
            .collect();
        seen.sort();

        let mut expected: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_date_bucketing_truncates_time_of_day() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "morning.log");
        touch(temp_dir.path(), "evening.log");

        // Both files were just created, so they share today's bucket.
        let buckets = classify(temp_dir.path(), Strategy::ByDate).unwrap();
        assert_eq!(buckets.len(), 1);
        let (key, files) = buckets.iter().next().unwrap();
        assert!(matches!(key, BucketKey::Date(_)));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_bucket_key_dir_names() {
        assert_eq!(BucketKey::Extension("pdf".to_string()).dir_name(), "pdf");
        assert_eq!(BucketKey::NoExtension.dir_name(), "no_extension");
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(BucketKey::Date(date).dir_name(), "2024-03-05");
    }

    #[test]
    fn test_sentinel_does_not_collide_with_literal_extension() {
        // A file literally named *.no_extension still gets an Extension key,
        // never the sentinel.
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "weird.no_extension");
        touch(temp_dir.path(), "README");

        let buckets = classify(temp_dir.path(), Strategy::ByExtension).unwrap();
        assert_eq!(
            buckets[&BucketKey::Extension("no_extension".to_string())].len(),
            1
        );
        assert_eq!(buckets[&BucketKey::NoExtension].len(), 1);
    }
}
