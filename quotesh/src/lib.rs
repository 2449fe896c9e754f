// quotesh/src/lib.rs
//! # QuoteSH CLI Application
//!
//! This crate provides the command-line driver for the `quotesh-core` quoting
//! engine: argument parsing, input iteration, delimiter handling, and logging.
//! The quoting semantics themselves live entirely in `quotesh-core`.

pub mod cli;
pub mod commands;
pub mod logger;
