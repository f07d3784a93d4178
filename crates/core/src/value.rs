//! Parsed flag values and the overall parse result.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::FlagKind;

/// A single resolved flag value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FlagValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl FlagValue {
    #[must_use]
    pub fn kind(&self) -> FlagKind {
        match self {
            Self::Boolean(_) => FlagKind::Boolean,
            Self::Number(_) => FlagKind::Number,
            Self::String(_) => FlagKind::String,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for FlagValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        // f64's Display already drops a zero fraction, so 8080.0 prints as 8080
        match self {
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Number(value) => write!(formatter, "{value}"),
            Self::String(value) => formatter.write_str(value),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FlagValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Outcome of a successful scan.
///
/// `args` holds positional arguments in encounter order. `flags` holds only
/// flags that had a default or were supplied on the command line, in the
/// order they were first set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub args: Vec<String>,
    pub flags: IndexMap<String, FlagValue>,
}

impl ParseResult {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FlagValue::as_bool)
    }

    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FlagValue::as_number)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FlagValue::as_str)
    }

    /// Sets a flag, replacing any earlier value but keeping its position.
    pub(crate) fn set(&mut self, name: &str, value: FlagValue) {
        self.flags.insert(name.to_string(), value);
    }
}
