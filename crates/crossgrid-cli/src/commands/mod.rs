//! Command handlers, one module per subcommand.

pub mod bank;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod splice;
