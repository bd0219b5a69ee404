//! Logging setup.
//!
//! Everything in `trellis-ui` logs through the `log` facade; a binary calls
//! [`init_logging`] once to route it through `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
