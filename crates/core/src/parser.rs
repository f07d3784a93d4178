//! Schema validation and the argument scanner.
//!
//! Arguments are classified left to right in a single pass:
//!
//! - `word` is positional (and ends flag parsing when `stop_at_positional` is set)
//! - `--` ends flag parsing; everything after it is positional
//! - `--name` / `--name=value` is a long flag
//! - `-x` / `-x=value` is a shorthand, resolved like its long form
//! - `-xyz` is a cluster of boolean shorthands, each set to `true`
//!
//! Number and string flags without an inline value take the next argument.
//! That argument may not start with `-`, except for number flags, so that
//! negative numbers can be passed.

use std::collections::HashMap;
use std::env;

use log::{debug, trace};
use serde::Deserialize;

use crate::error::Error::{
    DuplicateShorthand, InvalidShorthand, MissingValue, ReservedHelpFlag, TypeMismatch,
    UnknownFlag,
};
use crate::error::Result;
use crate::help::{
    builtin_help_flag, is_help_shorthand, render_help, HelpSink, StdoutSink, HELP_FLAG,
    HELP_SHORTHAND,
};
use crate::schema::{Flag, FlagKind, Schema};
use crate::value::{FlagValue, ParseResult};

/// Switches that change how arguments are scanned.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParseOptions {
    /// Drops the built-in `--help`/`-h` flag, freeing both names for the schema.
    pub disable_help: bool,
    /// Treats the first positional argument and everything after it as positional.
    pub stop_at_positional: bool,
    /// Usage line printed above the flag listing in help output.
    pub usage: Option<String>,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_help_disabled(mut self) -> Self {
        self.disable_help = true;
        self
    }

    #[must_use]
    pub fn with_stop_at_positional(mut self) -> Self {
        self.stop_at_positional = true;
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }
}

/// Result of a scan that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Flags and positional arguments.
    Parsed(ParseResult),
    /// Help was requested; holds the rendered help text.
    Help(String),
}

/// A validated schema, ready to scan argument lists.
#[derive(Debug, Clone)]
pub struct Parser {
    schema: Schema,
    shorthands: HashMap<char, String>,
    options: ParseOptions,
}

impl Parser {
    /// Validates `schema` and builds the shorthand index.
    ///
    /// Unless help is disabled, a boolean `help` flag with shorthand `h` is
    /// added to the parser's copy of the schema.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid flag:
    /// - [`ReservedHelpFlag`] if a flag is named `help` or uses shorthand `h`
    ///   while help is enabled
    /// - [`InvalidShorthand`] if a shorthand is not exactly one character
    /// - [`DuplicateShorthand`] if two flags share a shorthand
    pub fn new(schema: Schema, options: ParseOptions) -> Result<Self> {
        let mut schema = schema;
        let mut shorthands: HashMap<char, String> = HashMap::new();
        let help_enabled = !options.disable_help;

        for (name, flag) in schema.iter() {
            let reserved =
                name == HELP_FLAG || flag.shorthand().is_some_and(is_help_shorthand);
            if help_enabled && reserved {
                return Err(ReservedHelpFlag { name: name.clone() });
            }

            // Kind and default are fixed by the Flag variant, so only the
            // shorthand is left to check here.
            if let Some(shorthand) = flag.shorthand() {
                let mut chars = shorthand.chars();
                let (Some(character), None) = (chars.next(), chars.next()) else {
                    return Err(InvalidShorthand {
                        name: name.clone(),
                        shorthand: shorthand.to_string(),
                    });
                };

                if let Some(first) = shorthands.insert(character, name.clone()) {
                    return Err(DuplicateShorthand {
                        shorthand: character,
                        first,
                        second: name.clone(),
                    });
                }
            }
        }

        if help_enabled {
            schema.insert(HELP_FLAG, builtin_help_flag());
            shorthands.insert(HELP_SHORTHAND, HELP_FLAG.to_string());
        }

        debug!(
            "Validated schema with {} flags ({} shorthands)",
            schema.len(),
            shorthands.len()
        );

        Ok(Self {
            schema,
            shorthands,
            options,
        })
    }

    /// The validated schema, including the built-in help flag if enabled.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    #[must_use]
    pub fn help_text(&self) -> String {
        render_help(&self.schema, self.options.usage.as_deref())
    }

    /// Parses the process arguments, minus the program name.
    ///
    /// On a help request this prints help to stdout and exits with status 0.
    ///
    /// # Errors
    ///
    /// See [`Parser::try_parse_from`].
    pub fn parse(&self) -> Result<ParseResult> {
        self.parse_from(
            env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Parses `argv`. On a help request this prints help to stdout and exits
    /// with status 0.
    ///
    /// # Errors
    ///
    /// See [`Parser::try_parse_from`].
    pub fn parse_from<I, T>(&self, argv: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parse_with(argv, &mut StdoutSink)
    }

    /// Parses `argv`, handing help output to `sink` on a help request.
    ///
    /// # Errors
    ///
    /// See [`Parser::try_parse_from`]. Also fails if the sink cannot write.
    pub fn parse_with<I, T, S>(&self, argv: I, sink: &mut S) -> Result<ParseResult>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        S: HelpSink,
    {
        match self.try_parse_from(argv)? {
            Outcome::Parsed(result) => Ok(result),
            Outcome::Help(text) => {
                sink.write_help(&text)?;
                sink.exit()
            }
        }
    }

    /// Parses `argv` without any side effects.
    ///
    /// # Errors
    ///
    /// Fails on the first bad argument:
    /// - [`UnknownFlag`] for a name or shorthand missing from the schema
    /// - [`TypeMismatch`] for a value that does not fit the flag's type, or a
    ///   non-boolean flag inside a shorthand cluster
    /// - [`MissingValue`] when a number or string flag has nothing to consume
    pub fn try_parse_from<I, T>(&self, argv: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let result = self.scan(&argv)?;

        if !self.options.disable_help && result.get_bool(HELP_FLAG) == Some(true) {
            debug!("Help requested");
            return Ok(Outcome::Help(self.help_text()));
        }

        Ok(Outcome::Parsed(result))
    }

    fn scan(&self, argv: &[String]) -> Result<ParseResult> {
        let mut result = ParseResult::default();

        for (name, flag) in self.schema.iter() {
            if let Some(default) = flag.default_value() {
                result.set(name, default);
            }
        }

        let mut index = 0;
        while index < argv.len() {
            let arg = argv[index].as_str();
            trace!("Argument {index}: `{arg}`");

            if !arg.starts_with('-') {
                if self.options.stop_at_positional {
                    debug!("Stopping at positional argument {index}");
                    result.args.extend_from_slice(&argv[index..]);
                    break;
                }
                result.args.push(arg.to_string());
                index += 1;
                continue;
            }

            if arg == "--" {
                debug!("Separator at argument {index}, remainder is positional");
                result.args.extend_from_slice(&argv[index + 1..]);
                break;
            }

            let next = argv.get(index + 1).map(String::as_str);

            let consumed_next = if let Some(long) = arg.strip_prefix("--") {
                let (name, inline) = split_inline(long);
                let flag = self
                    .schema
                    .get(name)
                    .ok_or_else(|| UnknownFlag(format!("--{name}")))?;
                self.resolve(&mut result, name, flag, &format!("--{name}"), inline, next)?
            } else {
                let short = &arg[1..];
                let (name, inline) = split_inline(short);
                let mut chars = name.chars();

                if let (Some(shorthand), None) = (chars.next(), chars.next()) {
                    let (name, flag) = self.lookup_shorthand(shorthand)?;
                    self.resolve(&mut result, name, flag, &format!("-{shorthand}"), inline, next)?
                } else {
                    self.resolve_cluster(&mut result, short)?;
                    false
                }
            };

            index += if consumed_next { 2 } else { 1 };
        }

        Ok(result)
    }

    fn lookup_shorthand(&self, shorthand: char) -> Result<(&str, &Flag)> {
        self.shorthands
            .get(&shorthand)
            .and_then(|name| self.schema.get(name).map(|flag| (name.as_str(), flag)))
            .ok_or_else(|| UnknownFlag(format!("-{shorthand}")))
    }

    /// Sets every shorthand in a `-xyz` cluster to `true`.
    fn resolve_cluster(&self, result: &mut ParseResult, cluster: &str) -> Result<()> {
        for shorthand in cluster.chars() {
            let (name, flag) = self.lookup_shorthand(shorthand)?;

            if flag.kind() != FlagKind::Boolean {
                return Err(TypeMismatch {
                    flag: format!("-{shorthand}"),
                    expected: flag.kind(),
                });
            }

            result.set(name, FlagValue::Boolean(true));
        }

        Ok(())
    }

    /// Resolves the value of one flag and records it. Returns whether the
    /// following argument was consumed as the value.
    fn resolve(
        &self,
        result: &mut ParseResult,
        name: &str,
        flag: &Flag,
        display: &str,
        inline: Option<&str>,
        next: Option<&str>,
    ) -> Result<bool> {
        let kind = flag.kind();

        if kind == FlagKind::Boolean {
            let value = match inline {
                None | Some("true") => true,
                Some("false") => false,
                Some(_) => {
                    return Err(TypeMismatch {
                        flag: display.to_string(),
                        expected: kind,
                    })
                }
            };
            result.set(name, FlagValue::Boolean(value));
            return Ok(false);
        }

        // Inline values skip the leading-dash check; only lookahead values get it.
        let (raw, consumed_next) = match inline {
            Some(value) => (value, false),
            None => match next {
                Some(value) if !value.starts_with('-') || kind == FlagKind::Number => {
                    (value, true)
                }
                _ => {
                    return Err(MissingValue {
                        flag: display.to_string(),
                        expected: kind,
                    })
                }
            },
        };

        let value = match kind {
            FlagKind::Number => FlagValue::Number(parse_number(raw).ok_or_else(|| {
                TypeMismatch {
                    flag: display.to_string(),
                    expected: kind,
                }
            })?),
            _ => FlagValue::String(raw.to_string()),
        };

        trace!("Resolved {display} to `{value}`");
        result.set(name, value);
        Ok(consumed_next)
    }
}

/// Validates `schema` and parses `argv` in one call.
///
/// On a help request this prints help to stdout and exits with status 0.
///
/// # Errors
///
/// See [`Parser::new`] and [`Parser::try_parse_from`].
///
/// # Examples
///
/// ```
/// use flagparse_core::parser::{parse_args, ParseOptions};
/// use flagparse_core::schema::{Flag, Schema};
///
/// let schema = Schema::new()
///     .flag("port", Flag::number().with_shorthand("p"))
///     .flag("debug", Flag::boolean().with_shorthand("d"));
///
/// let result = parse_args(["serve", "-p", "8080", "-d"], schema, ParseOptions::default())?;
/// assert_eq!(result.args, vec!["serve"]);
/// assert_eq!(result.get_number("port"), Some(8080.0));
/// assert_eq!(result.get_bool("debug"), Some(true));
/// # Ok::<(), flagparse_core::error::Error>(())
/// ```
pub fn parse_args<I, T>(argv: I, schema: Schema, options: ParseOptions) -> Result<ParseResult>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    Parser::new(schema, options)?.parse_from(argv)
}

fn split_inline(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    fn server_schema() -> Schema {
        Schema::new()
            .flag("host", Flag::string())
            .flag("port", Flag::number().with_shorthand("p"))
            .flag("debug", Flag::boolean().with_shorthand("d"))
    }

    fn parser(schema: Schema) -> Parser {
        Parser::new(schema, ParseOptions::default()).unwrap()
    }

    fn parsed(parser: &Parser, argv: &[&str]) -> ParseResult {
        match parser.try_parse_from(argv.iter().copied()).unwrap() {
            Outcome::Parsed(result) => result,
            Outcome::Help(_) => panic!("Expected a parse result, got help"),
        }
    }

    fn failed(parser: &Parser, argv: &[&str]) -> Error {
        parser.try_parse_from(argv.iter().copied()).unwrap_err()
    }

    #[test]
    fn test_server_scenario() {
        let parser = parser(server_schema());
        let result = parsed(
            &parser,
            &["public", "--host=0.0.0.0", "--port", "8080", "-d"],
        );

        assert_eq!(result.args, vec!["public"]);
        assert_eq!(result.get_str("host"), Some("0.0.0.0"));
        assert_eq!(result.get_number("port"), Some(8080.0));
        assert_eq!(result.get_bool("debug"), Some(true));
        assert_eq!(result.flags.len(), 3);
    }

    #[test]
    fn test_empty_schema_and_argv() {
        let result = parsed(&parser(Schema::new()), &[]);
        assert!(result.args.is_empty());
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_defaults_present_absent_flags_omitted() {
        let schema = Schema::new()
            .flag("port", Flag::number().with_default(80))
            .flag("host", Flag::string());
        let result = parsed(&parser(schema), &[]);

        assert_eq!(result.get_number("port"), Some(80.0));
        assert!(!result.contains("host"));
        assert!(!result.contains("help"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let result = parsed(&parser(server_schema()), &["--port", "80", "--port", "90"]);
        assert_eq!(result.get_number("port"), Some(90.0));

        let result = parsed(&parser(server_schema()), &["--debug", "--debug=false"]);
        assert_eq!(result.get_bool("debug"), Some(false));
    }

    #[test]
    fn test_short_inline_value() {
        let result = parsed(&parser(server_schema()), &["-p=3000", "file"]);
        assert_eq!(result.get_number("port"), Some(3000.0));
        assert_eq!(result.args, vec!["file"]);
    }

    #[test]
    fn test_missing_value_for_short_flag() {
        let err = failed(&parser(server_schema()), &["-p"]);
        assert!(matches!(err, MissingValue { ref flag, expected: FlagKind::Number } if flag == "-p"));
        assert_eq!(err.kind(), ErrorKind::MissingValue);
    }

    #[test]
    fn test_string_rejects_dash_lookahead() {
        let err = failed(&parser(server_schema()), &["--host", "--debug"]);
        assert!(matches!(err, MissingValue { ref flag, expected: FlagKind::String } if flag == "--host"));
    }

    #[test]
    fn test_string_accepts_dash_inline() {
        let result = parsed(&parser(server_schema()), &["--host=-weird"]);
        assert_eq!(result.get_str("host"), Some("-weird"));
    }

    #[test]
    fn test_negative_number_lookahead() {
        let result = parsed(&parser(server_schema()), &["-p", "-5"]);
        assert_eq!(result.get_number("port"), Some(-5.0));
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_number_lookahead_flag_fails_coercion() {
        let err = failed(&parser(server_schema()), &["--port", "--debug"]);
        assert!(matches!(err, TypeMismatch { expected: FlagKind::Number, .. }));
    }

    #[test]
    fn test_number_coercion() {
        let parser = parser(server_schema());
        assert_eq!(parsed(&parser, &["--port=1.5"]).get_number("port"), Some(1.5));
        assert_eq!(parsed(&parser, &["--port= 42 "]).get_number("port"), Some(42.0));

        for bad in ["--port=eighty", "--port=", "--port=NaN"] {
            let err = failed(&parser, &[bad]);
            assert_eq!(err.kind(), ErrorKind::Type, "{bad}");
        }
    }

    #[test]
    fn test_empty_inline_string() {
        let result = parsed(&parser(server_schema()), &["--host="]);
        assert_eq!(result.get_str("host"), Some(""));
    }

    #[test]
    fn test_boolean_inline_values() {
        let parser = parser(server_schema());
        assert_eq!(parsed(&parser, &["--debug=true"]).get_bool("debug"), Some(true));
        assert_eq!(parsed(&parser, &["-d=false"]).get_bool("debug"), Some(false));

        let err = failed(&parser, &["--debug=yes"]);
        assert!(matches!(err, TypeMismatch { ref flag, expected: FlagKind::Boolean } if flag == "--debug"));
    }

    #[test]
    fn test_boolean_does_not_consume_next() {
        let result = parsed(&parser(server_schema()), &["--debug", "true"]);
        assert_eq!(result.get_bool("debug"), Some(true));
        assert_eq!(result.args, vec!["true"]);
    }

    #[test]
    fn test_unknown_flags() {
        let parser = parser(server_schema());

        let err = failed(&parser, &["--verbose"]);
        assert!(matches!(err, UnknownFlag(ref flag) if flag == "--verbose"));

        let err = failed(&parser, &["--verbose=1"]);
        assert!(matches!(err, UnknownFlag(ref flag) if flag == "--verbose"));

        let err = failed(&parser, &["-x"]);
        assert!(matches!(err, UnknownFlag(ref flag) if flag == "-x"));
    }

    #[test]
    fn test_short_cluster() {
        let schema = Schema::new()
            .flag("all", Flag::boolean().with_shorthand("a"))
            .flag("brief", Flag::boolean().with_shorthand("b"))
            .flag("color", Flag::boolean().with_shorthand("c"));
        let parser = parser(schema);

        let clustered = parsed(&parser, &["-abc"]);
        let separate = parsed(&parser, &["-a", "-b", "-c"]);
        assert_eq!(clustered, separate);
        assert_eq!(clustered.flags.len(), 3);
    }

    #[test]
    fn test_short_cluster_rejects_value_flags() {
        let err = failed(&parser(server_schema()), &["-dp"]);
        assert!(matches!(err, TypeMismatch { ref flag, expected: FlagKind::Number } if flag == "-p"));
    }

    #[test]
    fn test_short_cluster_unknown_member() {
        let err = failed(&parser(server_schema()), &["-dz"]);
        assert!(matches!(err, UnknownFlag(ref flag) if flag == "-z"));

        // No inline values in a cluster; `=` is looked up like any shorthand
        let err = failed(&parser(server_schema()), &["-dd=true"]);
        assert!(matches!(err, UnknownFlag(ref flag) if flag == "-="));
    }

    #[test]
    fn test_separator_stops_flag_parsing() {
        let result = parsed(
            &parser(server_schema()),
            &["a", "--", "--port", "-d", "--", "b"],
        );
        assert_eq!(result.args, vec!["a", "--port", "-d", "--", "b"]);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_lone_dash_is_skipped() {
        let result = parsed(&parser(server_schema()), &["-", "-d"]);
        assert!(result.args.is_empty());
        assert_eq!(result.get_bool("debug"), Some(true));
    }

    #[test]
    fn test_lone_dash_does_not_stop_at_positional() {
        let parser = Parser::new(
            server_schema(),
            ParseOptions::new().with_stop_at_positional(),
        )
        .unwrap();

        let result = parsed(&parser, &["-", "--debug"]);
        assert!(result.args.is_empty());
        assert_eq!(result.get_bool("debug"), Some(true));
    }

    #[test]
    fn test_empty_lookahead_token() {
        let parser = parser(server_schema());

        let result = parsed(&parser, &["--host", "", "file"]);
        assert_eq!(result.get_str("host"), Some(""));
        assert_eq!(result.args, vec!["file"]);

        let err = failed(&parser, &["--port", ""]);
        assert!(matches!(err, TypeMismatch { ref flag, expected: FlagKind::Number } if flag == "--port"));
    }

    #[test]
    fn test_number_rejects_non_finite_and_radix_literals() {
        let parser = parser(server_schema());

        for bad in ["inf", "-inf", "+infinity", "1e999", "0x10", "0b1"] {
            let err = failed(&parser, &["--port", bad]);
            assert_eq!(err.kind(), ErrorKind::Type, "{bad}");
        }

        assert_eq!(parsed(&parser, &["--port", "1e3"]).get_number("port"), Some(1000.0));
        assert_eq!(parsed(&parser, &["--port", "+7"]).get_number("port"), Some(7.0));
    }

    #[test]
    fn test_stop_at_positional() {
        let parser = Parser::new(
            server_schema(),
            ParseOptions::new().with_stop_at_positional(),
        )
        .unwrap();

        let result = parsed(&parser, &["file.txt", "--debug"]);
        assert_eq!(result.args, vec!["file.txt", "--debug"]);
        assert!(result.flags.is_empty());

        let result = parsed(&parser, &["-d", "run", "--port", "1"]);
        assert_eq!(result.args, vec!["run", "--port", "1"]);
        assert_eq!(result.get_bool("debug"), Some(true));
    }

    #[test]
    fn test_help_outcome() {
        let parser = Parser::new(server_schema(), ParseOptions::new().with_usage("serve")).unwrap();

        let requests: [&[&str]; 3] = [&["--help"], &["-h"], &["public", "-dh"]];
        for argv in requests {
            match parser.try_parse_from(argv.iter().copied()).unwrap() {
                Outcome::Help(text) => {
                    assert!(text.contains("Usage:\n  serve\n"));
                    assert!(text.contains("  -h, --help"));
                    assert!(text.contains("  -p, --port"));
                }
                Outcome::Parsed(_) => panic!("Expected help for {argv:?}"),
            }
        }
    }

    #[test]
    fn test_help_false_is_not_a_request() {
        let result = parsed(&parser(server_schema()), &["--help=false"]);
        assert_eq!(result.get_bool("help"), Some(false));
    }

    #[test]
    fn test_reserved_help_names() {
        let err = Parser::new(
            Schema::new().flag("help", Flag::string()),
            ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReservedHelpFlag { .. }));

        let err = Parser::new(
            Schema::new().flag("host", Flag::string().with_shorthand("h")),
            ParseOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_disabled_help_frees_reserved_names() {
        let schema = Schema::new()
            .flag("help", Flag::string())
            .flag("host", Flag::string().with_shorthand("h"));
        let parser = Parser::new(schema, ParseOptions::new().with_help_disabled()).unwrap();

        let result = parsed(&parser, &["--help", "topic", "-h", "example.com"]);
        assert_eq!(result.get_str("help"), Some("topic"));
        assert_eq!(result.get_str("host"), Some("example.com"));
        assert_eq!(
            parser.schema().get("help").map(Flag::kind),
            Some(FlagKind::String)
        );
    }

    #[test]
    fn test_disabled_help_rejects_help_flag() {
        let parser = Parser::new(server_schema(), ParseOptions::new().with_help_disabled()).unwrap();
        let err = failed(&parser, &["--help"]);
        assert!(matches!(err, UnknownFlag(_)));
    }

    #[test]
    fn test_invalid_shorthand() {
        for shorthand in ["", "pp"] {
            let err = Parser::new(
                Schema::new().flag("port", Flag::number().with_shorthand(shorthand)),
                ParseOptions::default(),
            )
            .unwrap_err();
            assert!(matches!(err, InvalidShorthand { .. }), "{shorthand:?}");
        }
    }

    #[test]
    fn test_duplicate_shorthand() {
        let schema = Schema::new()
            .flag("port", Flag::number().with_shorthand("p"))
            .flag("path", Flag::string().with_shorthand("p"));
        let err = Parser::new(schema, ParseOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            DuplicateShorthand { shorthand: 'p', ref first, ref second } if first == "port" && second == "path"
        ));
    }

    #[test]
    fn test_help_injected_into_parser_schema_only() {
        let schema = server_schema();
        let parser = Parser::new(schema.clone(), ParseOptions::default()).unwrap();

        assert!(!schema.contains("help"));
        assert!(parser.schema().contains("help"));
        assert_eq!(parser.schema().len(), schema.len() + 1);
    }
}
