//! Command handlers, one module per subcommand.

pub mod add;
pub mod completions;
pub mod config;
pub mod copy_config;
pub mod init;
pub mod organize;
