//! Flagparse Core Library
//!
//! This crate provides a small, schema-driven command-line argument parser.
//! A schema names each flag along with its type (boolean, number or string),
//! an optional one-character shorthand and an optional default. Parsing an
//! argument list then yields the resolved flag values and the positional
//! arguments.
//!
//! # Key Features
//!
//! - **Typed Flags**: Boolean, number and string flags with typed defaults
//! - **Long and Short Forms**: `--name`, `--name=value`, `-x`, `-x=value` and boolean clusters like `-xyz`
//! - **Stop Markers**: `--` and optional stop-at-first-positional mode
//! - **Built-in Help**: `--help`/`-h` renders a flag listing
//! - **Schema Files**: Load schemas and options from YAML
//!
//! # Examples
//!
//! ```
//! use flagparse_core::parser::{ParseOptions, Parser};
//! use flagparse_core::schema::{Flag, Schema};
//!
//! let schema = Schema::new()
//!     .flag("host", Flag::string())
//!     .flag("port", Flag::number().with_shorthand("p"))
//!     .flag("debug", Flag::boolean().with_shorthand("d"));
//!
//! let parser = Parser::new(schema, ParseOptions::default())?;
//! let result = parser.parse_from(["public", "--host=0.0.0.0", "--port", "8080", "-d"])?;
//!
//! assert_eq!(result.args, vec!["public"]);
//! assert_eq!(result.get_str("host"), Some("0.0.0.0"));
//! assert_eq!(result.get_number("port"), Some(8080.0));
//! assert_eq!(result.get_bool("debug"), Some(true));
//! # Ok::<(), flagparse_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod help;
pub mod parser;
pub mod schema;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use parser::{parse_args, Outcome, ParseOptions, Parser};
pub use schema::{Flag, FlagKind, Schema};
pub use value::{FlagValue, ParseResult};
