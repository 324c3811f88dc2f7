//! Infrastructure adapters for flart.
//!
//! This crate implements the ports defined in `flart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;
pub mod prompt;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::{InMemoryManifest, PubspecManifest};
pub use prompt::FixedResponse;
pub use toolchain::{FlutterToolchain, RecordingToolchain};
