// quotesh/src/commands/mod.rs
//! Command implementations for the quotesh CLI.

pub mod quote;
