//! Command-line interface for smartsort.
//!
//! Parses the argument surface, fills in anything missing through the injected
//! path provider, and drives the classify → relocate pipeline.

use crate::classifier::{Strategy, classify};
use crate::output::OutputFormatter;
use crate::picker::{PathProvider, default_provider};
use crate::relocator::relocate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Sort the files of a directory into subdirectories.
#[derive(Debug, Parser)]
#[command(name = "smartsort", version)]
pub struct Cli {
    /// Directory to sort; prompted for when omitted.
    pub dir: Option<PathBuf>,

    /// Classification mode; prompted for when omitted.
    #[arg(long, value_enum)]
    pub by: Option<SortMode>,
}

/// Classification mode as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Group files by lower-cased extension.
    Extension,
    /// Group files by last-modified date.
    Date,
}

impl From<SortMode> for Strategy {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Extension => Strategy::ByExtension,
            SortMode::Date => Strategy::ByDate,
        }
    }
}

/// Runs the tool end to end with the default path provider.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use smartsort::cli::{Cli, run};
///
/// let cli = Cli::parse_from(["smartsort", "/tmp/downloads", "--by", "extension"]);
/// if let Err(e) = run(&cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run(cli: &Cli) -> Result<(), String> {
    run_with_provider(cli, default_provider().as_ref())
}

/// Runs the tool with an explicit provider, for callers that supply their own
/// selection front end.
pub fn run_with_provider(cli: &Cli, provider: &dyn PathProvider) -> Result<(), String> {
    OutputFormatter::banner("Smart file sort");

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => match provider
            .pick_directory()
            .map_err(|e| format!("Could not read the folder choice: {}", e))?
        {
            Some(dir) => dir,
            None => {
                OutputFormatter::plain("No folder selected. Exiting.");
                return Ok(());
            }
        },
    };

    OutputFormatter::info(&format!("\nFolder: {}\n", dir.display()));

    let strategy = match cli.by {
        Some(mode) => mode.into(),
        None => provider
            .pick_strategy()
            .map_err(|e| format!("Could not read the mode choice: {}", e))?,
    };

    let buckets = classify(&dir, strategy).map_err(|e| e.to_string())?;

    OutputFormatter::section("--- Move log ---");

    let total: u64 = buckets.values().map(|files| files.len() as u64).sum();
    let pb = OutputFormatter::create_progress_bar(total);

    let moved = relocate(&dir, &buckets, |outcome| {
        pb.println(OutputFormatter::move_line(outcome));
        pb.inc(1);
    });
    pb.finish_and_clear();

    OutputFormatter::summary(moved);
    Ok(())
}
