use super::{Field, FormRecord, ValidationErrors};
use crate::meta::Schema;
use crate::util::errors::FieldValidationError;

/// Checks a record against a [`Schema`]. Pure: nothing here mutates the record.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    schema: Schema,
}

impl FieldValidator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Check only the constraints declared for `field`. Fields without a rule
    /// always pass.
    pub fn validate_field(
        &self,
        record: &FormRecord,
        field: Field,
    ) -> Result<(), FieldValidationError> {
        let Some(rule) = self.schema.rule(field) else {
            return Ok(());
        };

        rule.check(record.get(field))
            .map_err(|message| FieldValidationError::new(field, message))
    }

    /// Check every field; on success the record comes back unchanged.
    pub fn validate_all(&self, record: &FormRecord) -> Result<FormRecord, ValidationErrors> {
        let errors: ValidationErrors = Field::ALL
            .iter()
            .filter_map(|&field| self.validate_field(record, field).err())
            .collect();

        if errors.is_empty() {
            Ok(record.clone())
        } else {
            Err(errors)
        }
    }
}
