//! Core domain layer for flart.
//!
//! This module contains pure generation logic. All I/O (filesystem, Flutter
//! toolchain, prompts) is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, process or terminal access
//! - **Deterministic**: Same name + config always yields the same plan
//! - **Immutable values**: `EntityName` and `GenerationConfig` are fixed per request
//!
// Public API
pub mod barrel;
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod naming;
pub mod templates;
pub mod value_objects;

mod validation;

pub use entities::{BarrelTarget, FileSpec, GenerationPlan, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use naming::{EntityName, to_file_form, to_type_form};
pub use templates::{DEFAULT_PACKAGE_NAME, RenderContext, TemplateSelector, TemplateVariant};
pub use validation::DomainValidator;
pub use value_objects::{
    CodegenMode, Dependency, DependencyKind, EntityKind, GenerationConfig, SerializationStyle,
    StateManagement,
};
