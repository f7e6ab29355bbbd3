use std::fs;

use signup::meta::loader::{load_schema, save_schema};
use signup::{
    Field, FormRecord, Schema, ValidationMode, WizardConfig, WizardError, WizardManager, WizardStep,
};
use tempfile::TempDir;

const PIN_SCHEMA: &str = r#"
fields:
  - field: name
    constraints:
      - kind: required
        message: pick a username
  - field: password
    constraints:
      - kind: pattern
        pattern: "^[0-9]+$"
        message: digits only
      - kind: min_length
        min: 4
        message: at least four digits
      - kind: required
        message: enter a PIN
"#;

#[test]
fn test_custom_schema_drives_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pin.yaml");
    fs::write(&path, PIN_SCHEMA).unwrap();

    let schema = load_schema(&path).unwrap();
    let validator = signup::FieldValidator::new(schema);

    let check = |password: &str| {
        validator
            .validate_field(&FormRecord::new("dave", password, ""), Field::Password)
            .map_err(|e| e.message)
    };

    assert_eq!(check(""), Err("enter a PIN".to_string()));
    // length is checked before the pattern regardless of file order
    assert_eq!(check("ab"), Err("at least four digits".to_string()));
    assert_eq!(check("abcd"), Err("digits only".to_string()));
    assert_eq!(check("1234"), Ok(()));

    // no rule for address: anything goes
    assert!(validator.validate_all(&FormRecord::new("dave", "1234", "")).is_ok());
}

#[test]
fn test_saved_schema_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.yaml");

    save_schema(&Schema::signup(), &path).unwrap();
    let loaded = load_schema(&path).unwrap();

    assert_eq!(loaded, Schema::signup());
}

#[test]
fn test_missing_schema_file() {
    let dir = TempDir::new().unwrap();
    let err = load_schema(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, WizardError::Io { .. }));
}

#[test]
fn test_manager_from_config_file() {
    let dir = TempDir::new().unwrap();
    let schema_path = dir.path().join("pin.yaml");
    fs::write(&schema_path, PIN_SCHEMA).unwrap();

    let config_path = dir.path().join("signup.toml");
    fs::write(
        &config_path,
        format!(
            "[form]\nvalidation_mode = \"on-submit\"\nschema_path = {:?}\n\n[ui]\ntitle = \"PIN setup\"\n",
            schema_path.display().to_string()
        ),
    )
    .unwrap();

    let config = WizardConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.ui.title, "PIN setup");

    let mut manager = WizardManager::from_config(&config).unwrap();
    assert_eq!(manager.mode(), ValidationMode::OnSubmit);

    manager.edit_field(Field::Name, "erin");
    manager.edit_field(Field::Password, "12ab");
    assert!(!manager.state().has_errors());

    manager.advance().unwrap();
    assert_eq!(manager.errors().get(Field::Password), None);
    assert_eq!(manager.advance().unwrap_err().message, "digits only");
    assert_eq!(manager.current_step(), WizardStep::Password);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(WizardConfig::load_from_file(&missing).is_err());

    let config = WizardConfig::load(&missing).unwrap();
    assert_eq!(config, WizardConfig::default());

    let manager = WizardManager::from_config(&config).unwrap();
    assert_eq!(manager.validator().schema(), &Schema::signup());
}
