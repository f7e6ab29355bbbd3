use std::str::FromStr;

use signup::{Field, WizardAction};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  set <field> <value...>   edit name, password or address (empty value clears it)
  next | n                 go to the next step
  prev | back | p          go to the previous step
  submit | save            validate everything and submit
  reset                    start over with an empty form
  show                     print the current panel
  help | ?                 this text
  quit | exit | q          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Next,
    Prev,
    Submit,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`set` needs a field: name, password or address")]
    MissingField,
    #[error("unknown field `{0}`, expected name, password or address")]
    UnknownField(String),
}

impl Command {
    /// The form action this command maps to, if it changes the form.
    pub fn action(&self) -> Option<WizardAction> {
        match self {
            Command::Set { field, value } => Some(WizardAction::edit(*field, value.clone())),
            Command::Next => Some(WizardAction::Advance),
            Command::Prev => Some(WizardAction::Retreat),
            Command::Submit => Some(WizardAction::Submit),
            Command::Reset => Some(WizardAction::Reset),
            Command::Show | Command::Help | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line.trim_start());

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "set" => parse_set(rest),
            "next" | "n" => Ok(Command::Next),
            "prev" | "back" | "p" => Ok(Command::Prev),
            "submit" | "save" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

/// Split off the first word at a single whitespace character. The remainder
/// is returned as typed.
fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

// The value keeps its leading and trailing whitespace: it is a value like any
// other, and the schema decides whether it is acceptable.
fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let (name, value) = split_word(rest.trim_start());
    if name.is_empty() {
        return Err(CommandError::MissingField);
    }

    let field = name
        .parse::<Field>()
        .map_err(|_| CommandError::UnknownField(name.to_string()))?;
    Ok(Command::Set {
        field,
        value: value.to_string(),
    })
}
