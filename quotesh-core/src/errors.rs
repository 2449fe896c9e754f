//! errors.rs - Custom error types for the quotesh-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::styles::QuotingStyle;

/// Returned when a style name does not match any registered quoting style.
///
/// The message lists the valid names so boundary code can surface it to the
/// user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{name}' is not a valid quoting style (valid: {})", QuotingStyle::names().join(", "))]
pub struct UnknownStyleError {
    /// The name that failed to resolve.
    pub name: String,
}
