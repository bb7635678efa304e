//! Logging utilities.
//!
//! Library code only talks to the `log` facade; binaries call
//! [`init_logging`] once at startup to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
