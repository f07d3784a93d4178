//! Flag definitions and the schema that groups them.
//!
//! A [`Schema`] is an ordered map from flag name to [`Flag`]. Flags built in
//! code get a default of the right type at compile time:
//!
//! ```
//! use flagparse_core::schema::{Flag, Schema};
//!
//! let schema = Schema::new()
//!     .flag("host", Flag::string())
//!     .flag("port", Flag::number().with_shorthand("p").with_default(8080))
//!     .flag("debug", Flag::boolean().with_shorthand("d"));
//! assert_eq!(schema.len(), 3);
//! ```
//!
//! Schemas read from a file go through [`FlagSpec`], the untyped form, which
//! is where the declared type and the default get checked against each other.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Error::{DefaultTypeMismatch, InvalidFlagType};
use crate::error::Result;
use crate::value::FlagValue;

/// The three value types a flag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Boolean,
    Number,
    String,
}

impl FlagKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl Display for FlagKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Settings shared by every flag kind; `T` is the type of the default.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagOptions<T> {
    pub shorthand: Option<String>,
    pub description: Option<String>,
    pub default: Option<T>,
}

impl<T> FlagOptions<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shorthand: None,
            description: None,
            default: None,
        }
    }

    /// Single-character alias used as `-x`. Checked when the parser is built.
    #[must_use]
    pub fn with_shorthand(mut self, shorthand: impl Into<String>) -> Self {
        self.shorthand = Some(shorthand.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<T>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl<T> Default for FlagOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed flag definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    Boolean(FlagOptions<bool>),
    Number(FlagOptions<f64>),
    String(FlagOptions<String>),
}

impl Flag {
    #[must_use]
    pub fn boolean() -> FlagOptions<bool> {
        FlagOptions::new()
    }

    #[must_use]
    pub fn number() -> FlagOptions<f64> {
        FlagOptions::new()
    }

    #[must_use]
    pub fn string() -> FlagOptions<String> {
        FlagOptions::new()
    }

    #[must_use]
    pub fn kind(&self) -> FlagKind {
        match self {
            Self::Boolean(_) => FlagKind::Boolean,
            Self::Number(_) => FlagKind::Number,
            Self::String(_) => FlagKind::String,
        }
    }

    #[must_use]
    pub fn shorthand(&self) -> Option<&str> {
        match self {
            Self::Boolean(options) => options.shorthand.as_deref(),
            Self::Number(options) => options.shorthand.as_deref(),
            Self::String(options) => options.shorthand.as_deref(),
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Boolean(options) => options.description.as_deref(),
            Self::Number(options) => options.description.as_deref(),
            Self::String(options) => options.description.as_deref(),
        }
    }

    #[must_use]
    pub fn default_value(&self) -> Option<FlagValue> {
        match self {
            Self::Boolean(options) => options.default.map(FlagValue::Boolean),
            Self::Number(options) => options.default.map(FlagValue::Number),
            Self::String(options) => options.default.clone().map(FlagValue::String),
        }
    }
}

impl From<FlagOptions<bool>> for Flag {
    fn from(options: FlagOptions<bool>) -> Self {
        Self::Boolean(options)
    }
}

impl From<FlagOptions<f64>> for Flag {
    fn from(options: FlagOptions<f64>) -> Self {
        Self::Number(options)
    }
}

impl From<FlagOptions<String>> for Flag {
    fn from(options: FlagOptions<String>) -> Self {
        Self::String(options)
    }
}

/// Untyped flag definition, as written in a schema file.
#[derive(Deserialize, Debug, Clone)]
pub struct FlagSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub shorthand: Option<String>,
    pub description: Option<String>,
    pub default: Option<serde_yaml::Value>,
}

impl FlagSpec {
    /// Converts into a typed [`Flag`], checking the type name and default.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFlagType`] for an unrecognized `type` and
    /// [`DefaultTypeMismatch`] when `default` is not of the declared type.
    pub fn into_flag(self, name: &str) -> Result<Flag> {
        let mismatch = |expected| DefaultTypeMismatch {
            name: name.to_string(),
            expected,
        };

        let flag = match self.kind.as_str() {
            "boolean" => {
                let default = match self.default {
                    None => None,
                    Some(serde_yaml::Value::Bool(value)) => Some(value),
                    Some(_) => return Err(mismatch(FlagKind::Boolean)),
                };
                Flag::Boolean(FlagOptions {
                    shorthand: self.shorthand,
                    description: self.description,
                    default,
                })
            }
            "number" => {
                let default = match self.default {
                    None => None,
                    Some(serde_yaml::Value::Number(value)) => {
                        Some(value.as_f64().ok_or_else(|| mismatch(FlagKind::Number))?)
                    }
                    Some(_) => return Err(mismatch(FlagKind::Number)),
                };
                Flag::Number(FlagOptions {
                    shorthand: self.shorthand,
                    description: self.description,
                    default,
                })
            }
            "string" => {
                let default = match self.default {
                    None => None,
                    Some(serde_yaml::Value::String(value)) => Some(value),
                    Some(_) => return Err(mismatch(FlagKind::String)),
                };
                Flag::String(FlagOptions {
                    shorthand: self.shorthand,
                    description: self.description,
                    default,
                })
            }
            other => {
                return Err(InvalidFlagType {
                    name: name.to_string(),
                    found: other.to_string(),
                })
            }
        };

        Ok(flag)
    }
}

/// Flags keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    flags: IndexMap<String, Flag>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Schema::insert`].
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, flag: impl Into<Flag>) -> Self {
        self.insert(name, flag);
        self
    }

    /// Adds a flag, replacing any existing flag of the same name.
    pub fn insert(&mut self, name: impl Into<String>, flag: impl Into<Flag>) -> Option<Flag> {
        self.flags.insert(name.into(), flag.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Flag)> {
        self.flags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Flag)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, Flag)>>(iter: I) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(name, flag)| (name.into(), flag))
                .collect(),
        }
    }
}
