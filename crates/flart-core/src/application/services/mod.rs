//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a model" or "run build_runner".

pub mod barrel_synchronizer;
pub mod build_service;
pub mod conflict_gate;
pub mod dependency_provisioner;
pub mod generate_service;

#[cfg(test)]
pub(crate) mod testing;

pub use barrel_synchronizer::{BarrelOutcome, BarrelSynchronizer};
pub use build_service::BuildService;
pub use conflict_gate::{ConflictGate, ConflictReport};
pub use dependency_provisioner::{DependencyProvisioner, ProvisionOutcome};
pub use generate_service::{GenerateOptions, GenerateService, GenerationReport};
