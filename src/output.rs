//! Output formatting and styling.
//!
//! Centralizes all console output: the banner, per-move log lines, the
//! progress bar and the final summary, so formatting can change in one place.

use crate::relocator::MoveOutcome;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Width of the banner rule, matching the tool's classic header.
const BANNER_WIDTH: usize = 50;

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints the header banner.
    pub fn banner(title: &str) {
        let rule = "=".repeat(BANNER_WIDTH);
        println!("{}", rule);
        println!("  {}", title.bold());
        println!("{}", rule);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a section header.
    pub fn section(header: &str) {
        println!("\n{}\n", header.bold());
    }

    /// Renders one attempted move as a log line.
    ///
    /// Successful moves read `  <name> -> <bucket>/`; failures read
    /// `  <name> - <error>`.
    pub fn move_line(outcome: &MoveOutcome) -> String {
        match outcome {
            MoveOutcome::Moved { file_name, dest } => {
                format!("  {} -> {}/", file_name, dest.green())
            }
            MoveOutcome::Failed { file_name, reason } => {
                format!("  {} - {}", file_name, reason.red())
            }
        }
    }

    /// Creates a progress bar sized to the number of attempted moves.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints the final summary line.
    pub fn summary(moved: usize) {
        println!("\nMoved: {}", moved.to_string().green().bold());
    }
}
