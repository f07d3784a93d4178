use thiserror::Error;

use crate::schema::FlagKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Callers that only care whether the schema or the command line was at
/// fault can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The flag schema itself is invalid.
    Config,
    /// A flag or shorthand on the command line is not in the schema.
    UnknownFlag,
    /// A supplied value does not fit the flag's declared type.
    Type,
    /// A value-taking flag had nothing to consume.
    MissingValue,
    /// Reading a schema file or writing help output failed.
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("--help and -h are built-in flags; set the `disable_help` option to disable them")]
    ReservedHelpFlag { name: String },

    #[error("type for \"{}\" flag must be \"boolean\", \"number\", or \"string\"", .name)]
    InvalidFlagType { name: String, found: String },

    #[error("shorthand for \"{}\" flag must be 1 character", .name)]
    InvalidShorthand { name: String, shorthand: String },

    #[error("shorthand -{} is used by both \"{}\" and \"{}\"", .shorthand, .first, .second)]
    DuplicateShorthand {
        shorthand: char,
        first: String,
        second: String,
    },

    #[error("default value for \"{}\" flag must be of type `{}`", .name, .expected)]
    DefaultTypeMismatch { name: String, expected: FlagKind },

    #[error("unknown flag: {}", .0)]
    UnknownFlag(String),

    #[error("{} requires a value of type `{}`", .flag, .expected)]
    TypeMismatch { flag: String, expected: FlagKind },

    #[error("{} requires a value of type `{}`", .flag, .expected)]
    MissingValue { flag: String, expected: FlagKind },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReservedHelpFlag { .. }
            | Self::InvalidFlagType { .. }
            | Self::InvalidShorthand { .. }
            | Self::DuplicateShorthand { .. }
            | Self::DefaultTypeMismatch { .. } => ErrorKind::Config,
            Self::UnknownFlag(_) => ErrorKind::UnknownFlag,
            Self::TypeMismatch { .. } => ErrorKind::Type,
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::Io { .. } | Self::Yaml { .. } | Self::Stdio(_) => ErrorKind::Io,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }
}
