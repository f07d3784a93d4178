//! Rendering of parse results for the terminal.

use flagparse_core::error::{Error, Result};
use flagparse_core::ParseResult;
use itertools::Itertools;

use crate::cli_args::Output;

/// Renders `result` in the requested format, ending with a newline.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render(result: &ParseResult, output: Output) -> Result<String> {
    match output {
        Output::Yaml => serde_yaml::to_string(result).map_err(|e| {
            Error::yaml_error(
                "writing".to_string(),
                "parse result".to_string(),
                "<stdout>".to_string(),
                e,
            )
        }),
        Output::Plain => Ok(render_plain(result)),
    }
}

fn render_plain(result: &ParseResult) -> String {
    let mut out = format!("args: {}\n", result.args.iter().join(" "));

    for (name, value) in &result.flags {
        out.push_str(&format!("{name}={value}\n"));
    }

    out
}
