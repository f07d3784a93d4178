//! Reading flag schemas from YAML files.
//!
//! A schema file holds the parse options next to the flag table:
//!
//! ```yaml
//! usage: "serve [flags] <dir>"
//! stop_at_positional: false
//! flags:
//!   host: { type: string, description: "Interface to bind" }
//!   port: { type: number, shorthand: p, default: 8080 }
//!   debug: { type: boolean, shorthand: d }
//! ```

use std::fs::File;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::Error::ReservedHelpFlag;
use crate::error::{Error, Result};
use crate::help::{is_help_shorthand, HELP_FLAG};
use crate::parser::ParseOptions;
use crate::schema::{FlagSpec, Schema};

/// A schema together with the options it was declared with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    pub schema: Schema,
    pub options: ParseOptions,
}

#[derive(Deserialize, Debug)]
struct DefinitionFile {
    #[serde(flatten)]
    options: ParseOptions,
    #[serde(default)]
    flags: IndexMap<String, FlagSpec>,
}

impl DefinitionFile {
    fn into_definition(self) -> Result<Definition> {
        let mut schema = Schema::new();
        for (name, spec) in self.flags {
            // Same per-flag order as the parser: the help collision is reported
            // before the flag's type or default.
            let reserved =
                name == HELP_FLAG || spec.shorthand.as_deref().is_some_and(is_help_shorthand);
            if !self.options.disable_help && reserved {
                return Err(ReservedHelpFlag { name });
            }

            let flag = spec.into_flag(&name)?;
            schema.insert(name, flag);
        }

        Ok(Definition {
            schema,
            options: self.options,
        })
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads a schema file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid YAML or does not have the expected shape
/// - A flag has an unknown `type` or a `default` that does not match it
pub fn load_definition(path: &str) -> Result<Definition> {
    let reader = get_reader("schema", path)?;

    let file: serde_yaml::Result<DefinitionFile> = serde_yaml::from_reader(reader);
    let file = file.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "schema".to_string(),
            path.to_string(),
            e,
        )
    })?;

    let definition = file.into_definition()?;
    debug!(
        "Loaded {} flags from schema file `{}`",
        definition.schema.len(),
        path
    );

    Ok(definition)
}

/// Parses a schema from YAML text.
///
/// # Errors
///
/// Same as [`load_definition`], minus the file access.
pub fn definition_from_str(contents: &str) -> Result<Definition> {
    let file: DefinitionFile = serde_yaml::from_str(contents).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "schema".to_string(),
            "<string>".to_string(),
            e,
        )
    })?;

    file.into_definition()
}
