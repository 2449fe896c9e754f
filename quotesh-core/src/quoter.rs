// File: quotesh-core/src/quoter.rs
//! Line-oriented entry points for driving the quoting functions.
//! These are the functions a CLI or any other line-oriented driver calls:
//! one line in, one quoted line out, in order, with no buffering.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::debug;

use crate::quoters;
use crate::styles::QuotingStyle;

/// Quotes a single line according to a style selected by name.
///
/// An unrecognized style name passes the line through unchanged rather than
/// failing; validating names is the caller's job (the CLI rejects unknown
/// names at parse time, so this fallthrough is unreachable from the binary).
pub fn quote<'a>(line: &'a str, style_name: &str) -> Cow<'a, str> {
    match style_name.parse::<QuotingStyle>() {
        Ok(style) => quoters::apply(style, line),
        Err(err) => {
            debug!("{err}; passing line through unchanged");
            Cow::Borrowed(line)
        }
    }
}

/// Quotes each line with `style`, lazily and in input order.
///
/// The returned iterator yields exactly one quoted line per input line and
/// performs no buffering or reordering.
pub fn quote_lines<'a, I>(lines: I, style: QuotingStyle) -> impl Iterator<Item = Cow<'a, str>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(move |line| quoters::apply(style, line))
}
