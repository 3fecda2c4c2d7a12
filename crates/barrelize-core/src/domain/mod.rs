//! Core domain layer for Barrelize.
//!
//! This module contains pure logic with no I/O. Reading directories, moving
//! files and spawning processes are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Pure functions**: every plan and barrel is derived from its inputs only
//!
pub mod barrel;
pub mod command;
pub mod error;
pub mod exclusion;
pub mod exports;
pub mod plan;
pub mod report;
pub mod settings;

pub use barrel::BarrelFile;
pub use command::{CommandInvocation, GeneratorSettings};
pub use error::{DomainError, ErrorCategory};
pub use exclusion::ExclusionList;
pub use exports::{ExportName, extract_exports};
pub use plan::{ComponentPlan, to_identifier_case};
pub use report::{CopyReport, OrganizeReport, OrganizedComponent};
pub use settings::OrganizeSettings;
