//! Directory and mode selection providers.
//!
//! The sorting core never talks to the user directly: a [`PathProvider`]
//! supplies one directory path and one classification strategy, and the CLI
//! injects whichever implementation the environment supports. Interactive
//! prompts are only offered on a real terminal; everything else falls back to
//! plain line-oriented stdin.

use crate::classifier::Strategy;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Supplies the directory to sort and the classification strategy.
pub trait PathProvider {
    /// Asks for the target directory. `None` means nothing was supplied.
    fn pick_directory(&self) -> io::Result<Option<PathBuf>>;

    /// Asks for the classification strategy.
    fn pick_strategy(&self) -> io::Result<Strategy>;
}

/// Terminal-native prompts built on dialoguer.
pub struct InteractivePicker;

impl InteractivePicker {
    /// Whether interactive prompts can run in this environment.
    pub fn available() -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }
}

impl PathProvider for InteractivePicker {
    fn pick_directory(&self) -> io::Result<Option<PathBuf>> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Folder to sort")
            .allow_empty(true)
            .validate_with(|value: &String| {
                let trimmed = strip_quotes(value);
                if trimmed.is_empty() || Path::new(trimmed).is_dir() {
                    Ok(())
                } else {
                    Err("not a directory")
                }
            })
            .interact_text()
            .map_err(into_io_error)?;

        let trimmed = strip_quotes(&input);
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    fn pick_strategy(&self) -> io::Result<Strategy> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Sort mode")
            .items(&["By extension (jpg, png, mp4, pdf, ...)", "By modification date"])
            .default(0)
            .interact()
            .map_err(into_io_error)?;

        Ok(match selection {
            1 => Strategy::ByDate,
            _ => Strategy::ByExtension,
        })
    }
}

/// Plain stdin prompts for non-terminal environments.
pub struct TextPrompt;

impl PathProvider for TextPrompt {
    fn pick_directory(&self) -> io::Result<Option<PathBuf>> {
        print!("Enter the folder path: ");
        io::stdout().flush()?;

        let line = read_line()?;
        let trimmed = strip_quotes(&line);
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    fn pick_strategy(&self) -> io::Result<Strategy> {
        println!("Sort mode:");
        println!("  1 - By extension (jpg, png, mp4, pdf, ...)");
        println!("  2 - By modification date");
        print!("Choose (1 or 2): ");
        io::stdout().flush()?;

        let line = read_line()?;
        Ok(parse_strategy_choice(&line))
    }
}

/// Picks the interactive provider on a terminal, the textual one otherwise.
pub fn default_provider() -> Box<dyn PathProvider> {
    if InteractivePicker::available() {
        Box::new(InteractivePicker)
    } else {
        Box::new(TextPrompt)
    }
}

/// Maps a single-character mode choice to a strategy.
///
/// Blank or unrecognized input defaults to by-extension.
pub fn parse_strategy_choice(input: &str) -> Strategy {
    match input.trim() {
        "2" => Strategy::ByDate,
        _ => Strategy::ByExtension,
    }
}

/// Trims whitespace and one layer of surrounding quotes, as pasted paths from
/// file managers often carry.
fn strip_quotes(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
        })
        .unwrap_or(trimmed)
        .trim()
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn into_io_error(e: dialoguer::Error) -> io::Error {
    io::Error::other(e)
}
