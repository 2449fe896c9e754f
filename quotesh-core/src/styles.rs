// File: quotesh-core/src/styles.rs
//! The closed registry of quoting styles.
//!
//! The style set is fixed at compile time, so the registry is an enum
//! dispatched through a single `match` rather than a runtime table; string
//! lookup only happens at the boundary (CLI parsing, [`FromStr`]).
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownStyleError;

/// A named transformation rule converting raw text into a form safe for a
/// specific consumer (shell, C source, regex, CSV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotingStyle {
    /// Quote the string for a C string literal.
    C,
    /// Quote the string for a C string literal, only when it needs escaping.
    CMaybe,
    /// Quote the string for a CSV field.
    Csv,
    /// Escape non-printable characters, spaces, and backslashes.
    Escape,
    /// Do not quote the string.
    Literal,
    /// Escape metacharacters for a Perl Compatible Regular Expression.
    Pcre,
    /// Quote the string for a shell, only when it contains special characters.
    Shell,
    /// Quote the string for a shell, in all cases.
    ShellAlways,
}

impl QuotingStyle {
    /// Every style, in alphabetical name order.
    pub const ALL: [QuotingStyle; 8] = [
        QuotingStyle::C,
        QuotingStyle::CMaybe,
        QuotingStyle::Csv,
        QuotingStyle::Escape,
        QuotingStyle::Literal,
        QuotingStyle::Pcre,
        QuotingStyle::Shell,
        QuotingStyle::ShellAlways,
    ];

    /// The canonical name, as accepted by [`FromStr`] and shown in help text.
    pub fn as_str(self) -> &'static str {
        match self {
            QuotingStyle::C => "c",
            QuotingStyle::CMaybe => "c-maybe",
            QuotingStyle::Csv => "csv",
            QuotingStyle::Escape => "escape",
            QuotingStyle::Literal => "literal",
            QuotingStyle::Pcre => "pcre",
            QuotingStyle::Shell => "shell",
            QuotingStyle::ShellAlways => "shell-always",
        }
    }

    /// All valid style names, sorted alphabetically for reproducible display.
    pub fn names() -> [&'static str; 8] {
        let mut names = [""; 8];
        for (slot, style) in names.iter_mut().zip(QuotingStyle::ALL) {
            *slot = style.as_str();
        }
        names
    }

    /// One-line description of the style's rule, used by the CLI help text.
    pub fn description(self) -> &'static str {
        match self {
            QuotingStyle::C => {
                "Quote the string for a C string literal. Escape non-printable characters, \
                 double quotes, backslashes, and trigraphs, and surround the result with \
                 double quotes."
            }
            QuotingStyle::CMaybe => {
                "Quote the string (in some cases) for a C string literal. If no characters \
                 would be escaped, the original string is returned."
            }
            QuotingStyle::Csv => {
                "Quote the string (in some cases) for a CSV field. Double quotes are doubled; \
                 fields containing separators or leading/trailing whitespace are surrounded \
                 with double quotes."
            }
            QuotingStyle::Escape => {
                "Escape non-printable characters, spaces, and backslashes."
            }
            QuotingStyle::Literal => "Do not quote the string.",
            QuotingStyle::Pcre => {
                "Escape non-alphanumeric and non-underscore characters for a Perl \
                 Compatible Regular Expression (PCRE)."
            }
            QuotingStyle::Shell => {
                "Quote the string (in some cases) for a shell. Quoting only happens when \
                 the string contains special characters specified by POSIX.1-2008."
            }
            QuotingStyle::ShellAlways => {
                "Quote the string (in all cases) for a shell. Escape single quotes, and \
                 surround the result with single quotes."
            }
        }
    }
}

impl fmt::Display for QuotingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuotingStyle {
    type Err = UnknownStyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        QuotingStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == name)
            .ok_or_else(|| UnknownStyleError {
                name: name.to_string(),
            })
    }
}
