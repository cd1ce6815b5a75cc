//! smartsort - sort a directory's files into subdirectories
//!
//! This library classifies the regular files of a single directory into
//! buckets keyed by extension or by last-modified date, then moves each file
//! into its bucket's subdirectory, tolerating per-file failures and reporting
//! progress one line per move.

pub mod classifier;
pub mod cli;
pub mod output;
pub mod picker;
pub mod relocator;

pub use classifier::{BucketKey, Buckets, ClassifyError, FileEntry, Strategy, classify};
pub use picker::{InteractivePicker, PathProvider, TextPrompt, default_provider};
pub use relocator::{MoveError, MoveOutcome, relocate};

pub use cli::{Cli, run, run_with_provider};
