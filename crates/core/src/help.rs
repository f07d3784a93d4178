//! Help text rendering and the side effects of a help request.

use std::io::{stdout, Write};

use crate::error::Result;
use crate::schema::{Flag, Schema};
use crate::value::FlagValue;

/// Name of the built-in help flag.
pub const HELP_FLAG: &str = "help";
/// Shorthand of the built-in help flag.
pub const HELP_SHORTHAND: char = 'h';

/// Whether `shorthand` is exactly the built-in help shorthand.
pub(crate) fn is_help_shorthand(shorthand: &str) -> bool {
    let mut chars = shorthand.chars();
    chars.next() == Some(HELP_SHORTHAND) && chars.next().is_none()
}

pub(crate) fn builtin_help_flag() -> Flag {
    Flag::boolean()
        .with_shorthand(HELP_SHORTHAND)
        .with_description("Print help")
        .into()
}

/// Renders the flag listing, optionally preceded by a usage line.
///
/// Each flag is listed as `-s, --name`, followed by its description and
/// default when those are set. String defaults are quoted.
#[must_use]
pub fn render_help(schema: &Schema, usage: Option<&str>) -> String {
    let mut out = String::from("\n");

    if let Some(usage) = usage {
        out.push_str(&format!("Usage:\n  {usage}\n\n"));
    }

    out.push_str("Flags:\n");

    for (name, flag) in schema.iter() {
        out.push_str("  ");

        if let Some(shorthand) = flag.shorthand() {
            out.push_str(&format!("-{shorthand}, "));
        }

        out.push_str(&format!("--{name}"));

        if let Some(description) = flag.description() {
            out.push_str(&format!("\t\t{description}"));
        }

        match flag.default_value() {
            Some(FlagValue::String(default)) => {
                out.push_str(&format!(" (Default: \"{default}\")"));
            }
            Some(default) => out.push_str(&format!(" (Default: {default})")),
            None => {}
        }

        out.push('\n');
    }

    out
}

/// Where help output goes and how the program ends afterwards.
///
/// The parser never touches stdout or the process directly; it hands the
/// rendered text to a sink.
pub trait HelpSink {
    /// Writes the rendered help text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be written.
    fn write_help(&mut self, text: &str) -> Result<()>;

    /// Ends the program after help has been written.
    fn exit(&mut self) -> !;
}

/// Prints help to standard output and exits the process with status 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl HelpSink for StdoutSink {
    fn write_help(&mut self, text: &str) -> Result<()> {
        let mut stdout = stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }

    fn exit(&mut self) -> ! {
        std::process::exit(0)
    }
}
