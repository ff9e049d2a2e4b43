//! Logging utilities.
//!
//! The scene logs through the `log` facade only (`debug` for stage mutations,
//! `warn` for member failures, `trace` for per-frame summaries). This module
//! offers a one-call `env_logger` setup for binaries that have no logger of their own.

mod init;

pub use init::{init_logging, LoggingConfig};
