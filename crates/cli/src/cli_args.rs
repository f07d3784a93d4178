//! Command-line argument parsing for the `flagparse` binary.
//!
//! The binary's own switches are handled by `clap`; everything after them is
//! handed untouched to the schema-driven parser.

use clap::{Parser, ValueEnum};
use flagparse_core::ParseOptions;

/// How the parse result is printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Output {
    /// The full result as a YAML document.
    #[default]
    Yaml,
    /// One `args:` line, then one `name=value` line per flag.
    Plain,
}

/// Command-line arguments for the flagparse CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use flagparse_cli::cli_args::Args;
///
/// let args = Args::parse_from(["flagparse", "-s", "server.yml", "public", "--port", "80"]);
/// assert_eq!(args.argv, vec!["public", "--port", "80"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "flagparse", version, about = "Parse arguments against a flag schema")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the flag schema YAML.
    ///
    /// If not provided, defaults to `flags.yml` in the working directory.
    #[arg(long = "schema", short = 's')]
    pub schema_path: Option<String>,

    /// Usage line shown above the flag listing; overrides the schema file.
    #[arg(long, short = 'u')]
    pub usage: Option<String>,

    /// Disable the built-in `--help`/`-h` flag.
    #[arg(long, action)]
    pub disable_help: bool,

    /// Treat everything from the first positional argument on as positional.
    #[arg(long, action)]
    pub stop_at_positional: bool,

    /// Output format for the parse result.
    #[arg(long, short = 'o', value_enum, default_value_t = Output::Yaml)]
    pub output: Output,

    /// Arguments to parse against the schema.
    ///
    /// Use `--` first if they start with a flag the CLI itself knows.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

impl Args {
    /// Applies the command-line switches on top of options from a schema file.
    ///
    /// Switches can only turn options on; an unset switch keeps the file's value.
    #[must_use]
    pub fn apply_to(&self, mut options: ParseOptions) -> ParseOptions {
        if self.disable_help {
            options.disable_help = true;
        }
        if self.stop_at_positional {
            options.stop_at_positional = true;
        }
        if let Some(usage) = &self.usage {
            options.usage = Some(usage.clone());
        }
        options
    }
}
