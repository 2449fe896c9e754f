// File: quotesh-core/src/quoters.rs
//! The eight quoting style implementations.
//!
//! Each function here is a pure, total transformation from a line of text to
//! its quoted form. Styles that can return the input unchanged borrow it
//! (`Cow::Borrowed`); always-transforming styles allocate. Fixed patterns are
//! compiled once behind `Lazy` statics and shared by all callers.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escaper::escape_char_to_octal;
use crate::styles::QuotingStyle;

/// Special characters that force shell quoting, per POSIX.1-2008 §2.2.
/// <https://pubs.opengroup.org/onlinepubs/9699919799/utilities/V3_chap02.html#tag_18_02>
static SHELL_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[\t\n "#$%&'()*;<=>?\[\\`|~]"##).unwrap());

/// Characters the `escape` style prefixes with a backslash.
static SPACE_OR_BACKSLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \\]").unwrap());

/// Characters the `c` style prefixes with a backslash.
static DQUOTE_OR_BACKSLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["\\]"#).unwrap());

/// Anything outside the printable ASCII range 0x20-0x7E.
static NON_PRINTABLE_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x20-\x7E]").unwrap());

/// A `??` pair followed by a character that would complete a C trigraph.
static TRIGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?\?([!'()\-/<=>])").unwrap());

/// Anything a PCRE could interpret as a metacharacter.
static PCRE_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// ASCII whitespace as recognized by the `csv` style's leading/trailing check.
const CSV_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Replacement callback rendering a single matched character as an
/// octal-escape-sequence (or its mnemonic).
fn octal_escape_match(caps: &Captures<'_>) -> String {
    caps.get(0)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| escape_char_to_octal(c).into_owned())
        .unwrap_or_default()
}

/// Do not quote the string.
pub fn literal(s: &str) -> Cow<'_, str> {
    Cow::Borrowed(s)
}

/// Quote the string (in all cases) for a shell.
///
/// Escapes single quotes and surrounds the result with single quotes, so a
/// POSIX shell reconstructs the original string exactly.
pub fn shell_always(s: &str) -> Cow<'_, str> {
    Cow::Owned(format!("'{}'", s.replace('\'', r"'\''")))
}

/// Quote the string (in some cases) for a shell.
///
/// Quotes only when the string contains special characters specified by
/// POSIX.1-2008; otherwise the string is returned unchanged.
pub fn shell(s: &str) -> Cow<'_, str> {
    if SHELL_SPECIAL.is_match(s) {
        shell_always(s)
    } else {
        Cow::Borrowed(s)
    }
}

/// Escape non-printable characters, spaces, and backslashes.
///
/// Spaces and backslashes are escaped first; the non-printable pass then only
/// targets characters outside 0x20-0x7E, so backslashes it inserts are never
/// re-escaped.
pub fn escape(s: &str) -> Cow<'_, str> {
    let escaped = SPACE_OR_BACKSLASH.replace_all(s, r"\${0}");
    if let Cow::Owned(owned) = NON_PRINTABLE_ASCII.replace_all(&escaped, octal_escape_match) {
        return Cow::Owned(owned);
    }
    escaped
}

/// Quote the string for a C string literal.
///
/// Escapes double quotes, backslashes, and non-printable characters, breaks
/// up would-be trigraphs, and surrounds the result with double quotes.
pub fn c(s: &str) -> Cow<'_, str> {
    let escaped = DQUOTE_OR_BACKSLASH.replace_all(s, r"\${0}");
    let escaped = NON_PRINTABLE_ASCII.replace_all(&escaped, octal_escape_match);
    // `??` followed by a trigraph-completing character becomes `?\?`, so the
    // quoted literal can never contain an accidental trigraph.
    let escaped = TRIGRAPH.replace_all(&escaped, r"?\?${1}");
    Cow::Owned(format!("\"{escaped}\""))
}

/// Quote the string (in some cases) for a C string literal.
///
/// Applies the full `c` transformation only when the string contains
/// something it would escape; otherwise the string is returned unchanged.
pub fn c_maybe(s: &str) -> Cow<'_, str> {
    if DQUOTE_OR_BACKSLASH.is_match(s) || NON_PRINTABLE_ASCII.is_match(s) || TRIGRAPH.is_match(s) {
        c(s)
    } else {
        Cow::Borrowed(s)
    }
}

/// Escape non-alphanumeric and non-underscore characters for a Perl
/// Compatible Regular Expression (PCRE).
pub fn pcre(s: &str) -> Cow<'_, str> {
    PCRE_SPECIAL.replace_all(s, r"\${0}")
}

/// Quote the string (in some cases) for a CSV field, with the default comma
/// field separator and newline record separator.
pub fn csv(s: &str) -> Cow<'_, str> {
    csv_opts(s, ',', '\n')
}

/// Quote the string (in some cases) for a CSV field.
///
/// A field containing a double quote has every double quote doubled and is
/// surrounded with double quotes; that rule wins over the others. A field
/// containing the field separator, the record separator, or leading/trailing
/// whitespace is surrounded with double quotes unmodified. Anything else is
/// returned unchanged.
pub fn csv_opts(s: &str, field_separator: char, record_separator: char) -> Cow<'_, str> {
    if s.contains('"') {
        return Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")));
    }

    let leading_ws = s.chars().next().is_some_and(|c| CSV_WHITESPACE.contains(&c));
    let trailing_ws = s
        .chars()
        .next_back()
        .is_some_and(|c| CSV_WHITESPACE.contains(&c));

    if s.contains(field_separator) || s.contains(record_separator) || leading_ws || trailing_ws {
        return Cow::Owned(format!("\"{s}\""));
    }

    Cow::Borrowed(s)
}

/// Applies the quoting function for `style` to `s`.
///
/// The style set is closed, so dispatch is a single `match`; no string lookup
/// happens here.
pub fn apply(style: QuotingStyle, s: &str) -> Cow<'_, str> {
    match style {
        QuotingStyle::C => c(s),
        QuotingStyle::CMaybe => c_maybe(s),
        QuotingStyle::Csv => csv(s),
        QuotingStyle::Escape => escape(s),
        QuotingStyle::Literal => literal(s),
        QuotingStyle::Pcre => pcre(s),
        QuotingStyle::Shell => shell(s),
        QuotingStyle::ShellAlways => shell_always(s),
    }
}
