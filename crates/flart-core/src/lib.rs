//! flart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the flart
//! Flutter scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            flart-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, BuildService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, Toolchain, Manifest, Prompt)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     flart-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (EntityName, TemplateSelector, barrel)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flart_core::prelude::*;
//!
//! let service = GenerateService::new(project_root, filesystem, toolchain, manifest, prompt);
//! let config = GenerationConfig::default().with_defaults();
//! let report = service.create_model("UserProfile", &config, GenerateOptions::default())?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, BarrelOutcome, BuildService, GenerateOptions, GenerateService,
        GenerationReport, ProvisionOutcome,
        ports::{ConfirmationPrompt, DirEntry, Filesystem, PackageManifest, Toolchain},
    };
    pub use crate::domain::{
        CodegenMode, Dependency, DomainError, EntityKind, EntityName, GenerationConfig,
        GenerationPlan, SerializationStyle, StateManagement, TemplateSelector,
    };
    pub use crate::error::{ErrorCategory, FlartError, FlartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
