use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::errors::WizardError;
use crate::wizard::Field;

const LATIN_LETTER: &str = "[a-zA-Z]";

/// A compiled regular expression that (de)serializes as its source text.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, WizardError> {
        Regex::new(source)
            .map(Pattern)
            .map_err(|source_err| WizardError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True when the value contains a match anywhere, not only when it
    /// matches in full.
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl TryFrom<String> for Pattern {
    type Error = WizardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pattern::new(&value)
    }
}

impl Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::try_from(source).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Required { message: String },
    MinLength { min: usize, message: String },
    Pattern { pattern: Pattern, message: String },
}

impl Constraint {
    pub fn required(message: impl Into<String>) -> Self {
        Constraint::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Constraint::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn pattern(pattern: Pattern, message: impl Into<String>) -> Self {
        Constraint::Pattern {
            pattern,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Constraint::Required { message }
            | Constraint::MinLength { message, .. }
            | Constraint::Pattern { message, .. } => message,
        }
    }

    /// Evaluation rank within a field: required, then length, then pattern.
    fn rank(&self) -> u8 {
        match self {
            Constraint::Required { .. } => 0,
            Constraint::MinLength { .. } => 1,
            Constraint::Pattern { .. } => 2,
        }
    }

    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Constraint::Required { .. } => !value.is_empty(),
            Constraint::MinLength { min, .. } => value.chars().count() >= *min,
            Constraint::Pattern { pattern, .. } => pattern.is_match(value),
        }
    }
}

/// Ordered constraints for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    field: Field,
    constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn new(field: Field, mut constraints: Vec<Constraint>) -> Self {
        // stable: constraints of the same kind keep their declared order
        constraints.sort_by_key(Constraint::rank);
        Self { field, constraints }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn required_message(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Required { message } => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn is_required(&self) -> bool {
        self.required_message().is_some()
    }

    /// First failing constraint's message, if any.
    pub fn check(&self, value: &str) -> Result<(), &str> {
        if value.is_empty() {
            return match self.required_message() {
                Some(message) => Err(message),
                None => Ok(()),
            };
        }

        match self.constraints.iter().find(|c| !c.is_satisfied_by(value)) {
            Some(failed) => Err(failed.message()),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct SchemaFile {
    fields: Vec<FieldRule>,
}

/// Static per-field validation constraints for the signup form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaFile")]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl TryFrom<SchemaFile> for Schema {
    type Error = WizardError;

    fn try_from(file: SchemaFile) -> Result<Self, Self::Error> {
        Schema::new(file.fields)
    }
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, WizardError> {
        let mut fields: Vec<FieldRule> = Vec::with_capacity(rules.len());
        for rule in rules {
            if fields.iter().any(|r| r.field == rule.field) {
                return Err(WizardError::DuplicateRule(rule.field));
            }
            // re-sort in case the rule was deserialized
            fields.push(FieldRule::new(rule.field, rule.constraints));
        }
        Ok(Self { fields })
    }

    /// The built-in schema: all three fields required, password at least
    /// eight characters and containing a Latin letter.
    pub fn signup() -> Self {
        let latin_letter =
            Pattern(Regex::new(LATIN_LETTER).expect("LATIN_LETTER is a valid regex"));

        Self {
            fields: vec![
                FieldRule::new(
                    Field::Name,
                    vec![Constraint::required("name is a required field")],
                ),
                FieldRule::new(
                    Field::Password,
                    vec![
                        Constraint::required("No password provided."),
                        Constraint::min_length(
                            8,
                            "Password is too short - should be 8 chars minimum.",
                        ),
                        Constraint::pattern(
                            latin_letter,
                            "Password can only contain Latin letters.",
                        ),
                    ],
                ),
                FieldRule::new(
                    Field::Address,
                    vec![Constraint::required("address is a required field")],
                ),
            ],
        }
    }

    pub fn rule(&self, field: Field) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.field == field)
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, WizardError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, WizardError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::signup()
    }
}
