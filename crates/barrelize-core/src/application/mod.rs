//! Application layer for Barrelize.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (OrganizeService, CopyService, AddService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or formatting rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AddOutcome, AddService, CopyService, OrganizeService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, DirEntry, Filesystem};

pub use error::ApplicationError;
