//! Barrelize Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Barrelize
//! component reorganizer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          barrelize-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (OrganizeService, CopyService, Add...)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, CommandRunner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    barrelize-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (extract_exports, ComponentPlan,       │
//! │   BarrelFile, ExclusionList)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barrelize_core::{
//!     application::OrganizeService,
//!     domain::OrganizeSettings,
//! };
//!
//! // 1. Describe where the flat component files live
//! let settings = OrganizeSettings::default();
//!
//! // 2. Use application service (with injected adapters)
//! let service = OrganizeService::new(filesystem);
//! let report = service.organize(&settings).unwrap();
//! println!("{} components organized", report.processed);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AddOutcome, AddService, CopyService, OrganizeService,
        ports::{CommandRunner, DirEntry, Filesystem},
    };
    pub use crate::domain::{
        BarrelFile, CommandInvocation, ComponentPlan, CopyReport, ExclusionList, ExportName,
        GeneratorSettings, OrganizeReport, OrganizeSettings, OrganizedComponent,
        extract_exports, to_identifier_case,
    };
    pub use crate::error::{BarrelizeError, BarrelizeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
