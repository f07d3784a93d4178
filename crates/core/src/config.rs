//! Schema file path resolution.

/// Schema file used when none is given, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "flags.yml";

/// Resolves the schema file path.
///
/// Uses the given path if there is one, otherwise [`DEFAULT_SCHEMA_PATH`].
/// A leading `~` is expanded to the home directory.
///
/// # Examples
///
/// ```
/// use flagparse_core::config::get_schema_path;
///
/// assert_eq!(get_schema_path(None), "flags.yml");
/// assert_eq!(get_schema_path(Some("/etc/app/flags.yml")), "/etc/app/flags.yml");
/// ```
#[must_use]
pub fn get_schema_path(schema_path_arg: Option<&str>) -> String {
    let schema_path = schema_path_arg.unwrap_or(DEFAULT_SCHEMA_PATH);

    shellexpand::tilde(schema_path).to_string()
}
