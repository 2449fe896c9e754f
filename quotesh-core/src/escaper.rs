// File: quotesh-core/src/escaper.rs
//! Single-character escaping primitives.
//!
//! This module owns the simple-escape-sequence table and the numeric
//! (octal / hexadecimal) escape renderers that the quoting styles build on.
//! Everything here is a pure function over a single `char`.
//!
//! The table follows the C++ standard's character-literal grammar:
//!
//! ```text
//! simple-escape-sequence: one of
//!     \' \" \? \\
//!     \a \b \f \n \r \t \v
//! ```
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Selects the numeric form used when a character has no simple escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// `\NNN`, at least three octal digits.
    Octal,
    /// `\xNN`, at least two uppercase hexadecimal digits.
    Hexadecimal,
}

/// Looks up a character in the fixed simple-escape-sequence table.
///
/// Returns the two-character mnemonic (`\n`, `\t`, ...) for the 11 characters
/// the table covers, `None` for everything else.
pub fn simple_escape(c: char) -> Option<&'static str> {
    let escaped = match c {
        '\x07' => r"\a", // alert
        '\x08' => r"\b", // backspace
        '\t' => r"\t",   // horizontal tab
        '\n' => r"\n",   // new line
        '\x0B' => r"\v", // vertical tab
        '\x0C' => r"\f", // form feed
        '\r' => r"\r",   // carriage return
        '"' => "\\\"",   // double quote
        '\'' => r"\'",   // single quote
        '?' => r"\?",    // question mark
        '\\' => r"\\",   // backslash
        _ => return None,
    };
    Some(escaped)
}

/// Escapes the character to a simple-escape-sequence or an octal-escape-sequence.
///
/// The octal field is zero-padded to three digits and widens for code points
/// above `0o777` rather than truncating.
pub fn escape_char_to_octal(c: char) -> Cow<'static, str> {
    match simple_escape(c) {
        Some(mnemonic) => Cow::Borrowed(mnemonic),
        None => Cow::Owned(format!(r"\{:03o}", c as u32)),
    }
}

/// Escapes the character to a simple-escape-sequence or a hexadecimal-escape-sequence.
///
/// The hexadecimal field is zero-padded to two uppercase digits and widens for
/// code points above `U+00FF` rather than truncating.
pub fn escape_char_to_hexadecimal(c: char) -> Cow<'static, str> {
    match simple_escape(c) {
        Some(mnemonic) => Cow::Borrowed(mnemonic),
        None => Cow::Owned(format!(r"\x{:02X}", c as u32)),
    }
}

/// Unicode-aware printability test.
///
/// A character is printable unless its general category is Other
/// (control, format, surrogate, private-use, unassigned) or Separator
/// (line, paragraph, space) -- with the exception of the ASCII space,
/// which is printable.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

/// Escapes the character only if it is non-printable.
///
/// Printable characters pass through unchanged; non-printable characters are
/// rendered per `mode`.
pub fn escape_if_non_printable(c: char, mode: EscapeMode) -> Cow<'static, str> {
    if is_printable(c) {
        return Cow::Owned(c.to_string());
    }
    match mode {
        EscapeMode::Octal => escape_char_to_octal(c),
        EscapeMode::Hexadecimal => escape_char_to_hexadecimal(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_escape_table_covers_all_eleven_entries() {
        let expected = [
            ('\x07', r"\a"),
            ('\x08', r"\b"),
            ('\t', r"\t"),
            ('\n', r"\n"),
            ('\x0B', r"\v"),
            ('\x0C', r"\f"),
            ('\r', r"\r"),
            ('"', "\\\""),
            ('\'', r"\'"),
            ('?', r"\?"),
            ('\\', r"\\"),
        ];
        for (c, escaped) in expected {
            assert_eq!(simple_escape(c), Some(escaped), "entry for {c:?}");
        }
        assert_eq!(simple_escape('a'), None);
        assert_eq!(simple_escape('\x00'), None);
    }

    #[test]
    fn octal_escape_is_zero_padded_to_three_digits() {
        assert_eq!(escape_char_to_octal('\x01'), r"\001");
        assert_eq!(escape_char_to_octal('\x1B'), r"\033");
        assert_eq!(escape_char_to_octal('\u{7F}'), r"\177");
    }

    #[test]
    fn octal_escape_prefers_the_mnemonic() {
        assert_eq!(escape_char_to_octal('\n'), r"\n");
        assert_eq!(escape_char_to_octal('\\'), r"\\");
    }

    #[test]
    fn octal_escape_widens_above_three_digits() {
        // U+0200 = 0o1000: four digits, no truncation.
        assert_eq!(escape_char_to_octal('\u{200}'), r"\1000");
        assert_eq!(escape_char_to_octal('\u{20AC}'), r"\20254");
    }

    #[test]
    fn hexadecimal_escape_is_zero_padded_and_uppercase() {
        assert_eq!(escape_char_to_hexadecimal('\x01'), r"\x01");
        assert_eq!(escape_char_to_hexadecimal('\x1B'), r"\x1B");
        assert_eq!(escape_char_to_hexadecimal('\t'), r"\t");
    }

    #[test]
    fn hexadecimal_escape_widens_above_two_digits() {
        assert_eq!(escape_char_to_hexadecimal('\u{100}'), r"\x100");
        assert_eq!(escape_char_to_hexadecimal('\u{20AC}'), r"\x20AC");
    }

    #[test]
    fn printability_matches_unicode_categories() {
        assert!(is_printable(' '));
        assert!(is_printable('a'));
        assert!(is_printable('~'));
        assert!(is_printable('\u{00E9}')); // e with acute
        assert!(is_printable('\u{4E2D}')); // CJK ideograph

        assert!(!is_printable('\x00'));
        assert!(!is_printable('\n'));
        assert!(!is_printable('\u{7F}')); // DEL
        assert!(!is_printable('\u{00A0}')); // no-break space (Zs)
        assert!(!is_printable('\u{2028}')); // line separator (Zl)
        assert!(!is_printable('\u{200B}')); // zero width space (Cf)
    }

    #[test]
    fn escape_if_non_printable_passes_printables_through() {
        assert_eq!(escape_if_non_printable('a', EscapeMode::Octal), "a");
        assert_eq!(escape_if_non_printable(' ', EscapeMode::Hexadecimal), " ");
    }

    #[test]
    fn escape_if_non_printable_honors_the_mode() {
        assert_eq!(escape_if_non_printable('\x01', EscapeMode::Octal), r"\001");
        assert_eq!(
            escape_if_non_printable('\x01', EscapeMode::Hexadecimal),
            r"\x01"
        );
        // Mnemonics win in either mode.
        assert_eq!(escape_if_non_printable('\n', EscapeMode::Octal), r"\n");
        assert_eq!(
            escape_if_non_printable('\n', EscapeMode::Hexadecimal),
            r"\n"
        );
    }
}
