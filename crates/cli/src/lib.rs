//! Flagparse CLI Library
//!
//! This crate provides the `flagparse` binary: it loads a flag schema from a
//! YAML file, parses the remaining command-line arguments against it with
//! [`flagparse_core`], and prints the result.
//!
//! # Architecture
//!
//! - [`cli_args`]: The binary's own switches, parsed with `clap`
//! - [`output`]: YAML and plain-text rendering of the parse result
//! - [`run`]: Ties schema loading, option overrides and parsing together
//!
//! # Examples
//!
//! ```bash
//! # Parse against ./flags.yml
//! flagparse public --host=0.0.0.0 --port 8080 -d
//!
//! # Explicit schema, plain output
//! flagparse -s server.yml -o plain -- -p 80 file.txt
//!
//! # Print the schema's help listing
//! flagparse -s server.yml -- --help
//! ```

pub mod cli_args;
pub mod output;

use flagparse_core::error::Result;
use flagparse_core::help::HelpSink;
use flagparse_core::{config, file_handling, Parser};
use log::debug;

use crate::cli_args::Args;

/// Loads the schema, parses `args.argv` against it and renders the result.
///
/// A help request is handed to `sink`, which ends the program.
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded or is invalid, or if the
/// arguments do not match it.
pub fn run<S: HelpSink>(args: &Args, sink: &mut S) -> Result<String> {
    let schema_path = config::get_schema_path(args.schema_path.as_deref());
    debug!("Schema path: `{}`", schema_path);

    let definition = file_handling::load_definition(&schema_path)?;
    let options = args.apply_to(definition.options);
    debug!("Parse options: {:?}", options);

    let parser = Parser::new(definition.schema, options)?;
    let result = parser.parse_with(args.argv.iter().cloned(), sink)?;

    output::render(&result, args.output)
}
