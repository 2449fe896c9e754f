// quotesh/src/logger.rs
//! Logger initialization for the quotesh CLI.
//!
//! Wraps `env_logger` so the binary can force a verbosity level from its
//! flags while still honoring `RUST_LOG` when no level is forced.

use log::LevelFilter;

/// Initializes the global logger.
///
/// When `level` is `Some`, it overrides whatever `RUST_LOG` requests; `None`
/// leaves the environment configuration in charge. Safe to call more than
/// once (subsequent calls are no-ops), which keeps tests happy.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
