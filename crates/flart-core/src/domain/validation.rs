use crate::domain::{entities::GenerationPlan, error::DomainError, naming::EntityName};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str) -> Result<EntityName, DomainError> {
        EntityName::parse(raw)
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()?;

        for barrel in plan.barrels() {
            let index = barrel.index_path()?;
            if plan.file(index.as_str()).is_some() {
                return Err(DomainError::DuplicatePath {
                    path: index.to_string(),
                });
            }
        }

        Ok(())
    }
}
