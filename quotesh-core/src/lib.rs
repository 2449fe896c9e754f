// quotesh-core/src/lib.rs
//! # QuoteSH Core Library
//!
//! `quotesh-core` provides the quoting and escaping transformations behind the
//! `quotesh` line filter. It classifies characters, renders escape sequences,
//! and implements the eight quoting styles used to make text safe for shells,
//! C string literals, Perl Compatible Regular Expressions, and CSV fields.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text, without concerns for I/O or application
//! state. Every quoting function is total: it never fails, on any input,
//! including the empty string.
//!
//! ## Modules
//!
//! * `escaper`: the simple-escape-sequence table and the octal/hexadecimal
//!   escape renderers, plus Unicode-aware printability classification.
//! * `styles`: the closed [`QuotingStyle`] registry, name lookup, and the
//!   per-style help descriptions.
//! * `quoters`: the eight quoting style implementations and the
//!   [`apply`] dispatcher.
//! * `quoter`: line-oriented entry points ([`quote`], [`quote_lines`]) for
//!   external drivers.
//! * `errors`: the [`UnknownStyleError`] type for failed style-name lookups.
//!
//! ## Usage Example
//!
//! ```rust
//! use quotesh_core::{quote_lines, QuotingStyle};
//!
//! let lines = ["it's", "plain", "a b"];
//! let quoted: Vec<_> = quote_lines(lines, QuotingStyle::Shell).collect();
//! assert_eq!(quoted, [r"'it'\''s'", "plain", "'a b'"]);
//! ```
//!
//! ## Design Principles
//!
//! * **Closed style set:** the styles form an enum dispatched through one
//!   `match`; style names are only parsed at the boundary.
//! * **Stateless:** the only process-wide data are compile-time constant
//!   tables and lazily compiled fixed patterns, all read-only, so unsynchronized
//!   concurrent callers are safe.
//! * **Testable:** every transformation is a pure function, unit-tested in
//!   isolation.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod escaper;
pub mod quoter;
pub mod quoters;
pub mod styles;

/// Re-exports the character-level escaping primitives.
pub use escaper::{
    escape_char_to_hexadecimal, escape_char_to_octal, escape_if_non_printable, is_printable,
    simple_escape, EscapeMode,
};

/// Re-exports the style registry.
pub use styles::QuotingStyle;

/// Re-exports the eight quoting functions and the style dispatcher.
pub use quoters::{apply, c, c_maybe, csv, csv_opts, escape, literal, pcre, shell, shell_always};

/// Re-exports the line-oriented driver entry points.
pub use quoter::{quote, quote_lines};

/// Re-exports the error type for failed style-name lookups.
pub use errors::UnknownStyleError;
