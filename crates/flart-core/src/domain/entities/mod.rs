pub mod common;
pub mod generation_plan;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use generation_plan::{BarrelTarget, FileSpec, GenerationPlan};
