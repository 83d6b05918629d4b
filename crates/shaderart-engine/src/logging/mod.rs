//! Logging setup.
//!
//! Every crate in the workspace logs through the `log` facade; this module
//! installs the `env_logger` backend once for binaries.

mod init;

pub use init::{init_logging, LoggingConfig};
