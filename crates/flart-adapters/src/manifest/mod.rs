//! Package manifest adapters.

mod memory;
mod pubspec;

pub use memory::InMemoryManifest;
pub use pubspec::{PUBSPEC_FILE, PubspecManifest};
