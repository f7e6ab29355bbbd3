use std::path::Path;

use super::Schema;
use crate::util::errors::WizardError;

/// Load a validation schema from a YAML file.
pub fn load_schema(path: &Path) -> Result<Schema, WizardError> {
    let content = std::fs::read_to_string(path).map_err(|source| WizardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = Schema::from_yaml_str(&content)?;
    log::info!(
        "Loaded schema with {} field rules from {}",
        schema.rules().len(),
        path.display()
    );
    Ok(schema)
}

/// Write a schema as YAML, e.g. to seed a custom schema file.
pub fn save_schema(schema: &Schema, path: &Path) -> Result<(), WizardError> {
    let yaml = schema.to_yaml_string()?;
    std::fs::write(path, yaml).map_err(|source| WizardError::Io {
        path: path.to_path_buf(),
        source,
    })
}
