//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

const USAGE_EXAMPLE: &str = r#"Example:
  selector -t="please input the right title" -o="aaa\nbbb"
  printf 'red\ngreen\nblue\n' | selector -t=colour"#;

/// Pick one line from a list in the terminal.
///
/// The chosen option is printed to stdout. Options are read from piped
/// stdin when present, otherwise from `--options`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "selector")]
#[command(version)]
#[command(after_help = USAGE_EXAMPLE)]
pub struct Config {
    /// Title shown in front of the search prompt
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Newline-separated options, used when stdin is a terminal
    #[arg(short, long)]
    pub options: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Append logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Title with surrounding whitespace removed.
    pub fn title(&self) -> &str {
        self.title.trim()
    }
}
