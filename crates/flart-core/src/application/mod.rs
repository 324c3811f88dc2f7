//! Application layer for flart.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, BuildService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BarrelOutcome, BuildService, ConflictReport, GenerateOptions, GenerateService,
    GenerationReport, ProvisionOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfirmationPrompt, DirEntry, Filesystem, PackageManifest, Toolchain};

pub use error::{ApplicationError, GenerationStep};
