use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::meta::{loader, Schema};
use crate::util::errors::WizardError;

pub const DEFAULT_CONFIG_PATH: &str = "signup.toml";
pub const SCHEMA_ENV: &str = "SIGNUP_SCHEMA";
pub const VALIDATION_MODE_ENV: &str = "SIGNUP_VALIDATION_MODE";

/// When field edits are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Re-validate a field every time its value changes.
    #[default]
    OnChange,
    /// Only validate on advance and submit.
    OnSubmit,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::OnChange => f.write_str("on-change"),
            ValidationMode::OnSubmit => f.write_str("on-submit"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on-change" | "onchange" => Ok(ValidationMode::OnChange),
            "on-submit" | "onsubmit" => Ok(ValidationMode::OnSubmit),
            _ => Err(WizardError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub validation_mode: ValidationMode,
    /// YAML schema replacing the built-in one.
    pub schema_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub transition_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: "Signup".to_string(),
            transition_ms: 300,
            window_width: 900.0,
            window_height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub form: FormConfig,
    pub ui: UiConfig,
}

impl WizardConfig {
    /// Load configuration from `path` with environment variable overrides.
    /// A missing file is not an error; defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, WizardError> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            log::warn!("Could not find {}, using defaults", path.display());
            WizardConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, WizardError> {
        let content = fs::read_to_string(path).map_err(|source| WizardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, WizardError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) -> Result<(), WizardError> {
        self.apply_overrides(env::var(SCHEMA_ENV).ok(), env::var(VALIDATION_MODE_ENV).ok())
    }

    /// Apply overrides on top of file values; `None` leaves a value as is.
    pub fn apply_overrides(
        &mut self,
        schema_path: Option<String>,
        validation_mode: Option<String>,
    ) -> Result<(), WizardError> {
        if let Some(path) = schema_path {
            self.form.schema_path = Some(PathBuf::from(path));
        }
        if let Some(mode) = validation_mode {
            self.form.validation_mode = mode.parse()?;
        }
        Ok(())
    }

    /// The configured schema, or the built-in one when no file is set.
    pub fn load_schema(&self) -> Result<Schema, WizardError> {
        match &self.form.schema_path {
            Some(path) => loader::load_schema(path),
            None => Ok(Schema::signup()),
        }
    }
}
