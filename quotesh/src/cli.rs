// quotesh/src/cli.rs
//! This file defines the command-line interface (CLI) for the quotesh
//! application: the arguments, the style selector, and the long help text
//! describing every quoting style.

use clap::{Parser, ValueEnum};
use quotesh_core::QuotingStyle;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "quotesh",
    author = "Obscura Tech",
    version = env!("CARGO_PKG_VERSION"),
    about = "Quote the lines of FILE according to a quoting style",
    long_about = "Quotesh is a line-oriented text filter. It reads lines from the given \
        FILEs (or from standard input when no FILE is given, or when FILE is '-'), quotes \
        each line according to the selected quoting style, and writes the result followed \
        by the line delimiter.",
    after_long_help = styles_long_help(),
)]
pub struct Cli {
    /// Use quoting style STYLE to quote lines.
    #[arg(
        long = "quoting-style",
        short = 'q',
        value_name = "STYLE",
        value_enum,
        default_value = "literal",
        help = "Use quoting style STYLE to quote lines. See the long help (--help) for descriptions of all quoting styles."
    )]
    pub quoting_style: StyleChoice,

    /// Use NUL as the line delimiter instead of newline.
    #[arg(long = "null", short = '0', help = "Use NUL as the line delimiter instead of NEWLINE.")]
    pub null: bool,

    /// Enable debug logging.
    #[arg(long, help = "Enable debug logging.")]
    pub debug: bool,

    /// Suppress all informational and debug messages.
    #[arg(long, conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Input files; absent or '-' means standard input.
    #[arg(value_name = "FILE", help = "Files to quote. If FILE is absent, or if FILE is '-', read standard input.")]
    pub files: Vec<PathBuf>,
}

/// Enum for selecting the quoting style, in alphabetical order.
///
/// This is the CLI-facing mirror of [`QuotingStyle`]; clap validates the name
/// at parse time, so unknown styles never reach the core.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    /// Quote for a C string literal.
    C,
    /// Quote for a C string literal, only when escaping is needed.
    CMaybe,
    /// Quote for a CSV field.
    Csv,
    /// Escape non-printable characters, spaces, and backslashes.
    Escape,
    /// Pass lines through unchanged.
    Literal,
    /// Escape PCRE metacharacters.
    Pcre,
    /// Quote for a shell, only when special characters are present.
    Shell,
    /// Quote for a shell, in all cases.
    ShellAlways,
}

impl From<StyleChoice> for QuotingStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::C => QuotingStyle::C,
            StyleChoice::CMaybe => QuotingStyle::CMaybe,
            StyleChoice::Csv => QuotingStyle::Csv,
            StyleChoice::Escape => QuotingStyle::Escape,
            StyleChoice::Literal => QuotingStyle::Literal,
            StyleChoice::Pcre => QuotingStyle::Pcre,
            StyleChoice::Shell => QuotingStyle::Shell,
            StyleChoice::ShellAlways => QuotingStyle::ShellAlways,
        }
    }
}

/// Builds the QUOTING STYLES section of the long help from the registry, so
/// the displayed list always matches the styles the core actually implements.
fn styles_long_help() -> String {
    let mut help = String::from("QUOTING STYLES:\n");
    for style in QuotingStyle::ALL {
        help.push_str(&format!("\n'{}':\n    {}\n", style, style.description()));
    }
    help
}
