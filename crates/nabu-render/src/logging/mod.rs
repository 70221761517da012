//! Logging utilities.
//!
//! Centralizes logger initialization. The crate itself only speaks through
//! the `log` facade; `env_logger` is wired up here for binaries that want a
//! ready-made backend.

mod init;

pub use init::{init_logging, LoggingConfig};
