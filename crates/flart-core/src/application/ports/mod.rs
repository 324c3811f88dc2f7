//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `flart-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `Toolchain`: `flutter pub add`, `build_runner`, `dart format`
//!   - `PackageManifest`: `pubspec.yaml` lookups
//!   - `ConfirmationPrompt`: Overwrite confirmation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConfirmationPrompt, DirEntry, Filesystem, PackageManifest, Toolchain};

#[cfg(test)]
pub use output::{MockConfirmationPrompt, MockFilesystem, MockPackageManifest, MockToolchain};
