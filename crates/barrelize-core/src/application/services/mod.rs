//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "organize the UI kit" or "copy the config tree".

pub mod add_service;
pub mod copy_service;
pub mod organize_service;

pub use add_service::{AddOutcome, AddService};
pub use copy_service::CopyService;
pub use organize_service::OrganizeService;
