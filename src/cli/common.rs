//! Error type, exit codes and helpers shared by the CLI commands.

use std::fmt;

use serde::Serialize;

use crate::dom::RootClassList;
use crate::theme::{FileStore, SystemAmbient, ThemeMode, ThemeProvider};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input or failed validation
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI failure with its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    exit_code: ExitCode,
    message: String,
}

impl CliError {
    /// Bad input; exits with 1.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O failure; exits with 2.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Code the process exits with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    /// Message printed to stderr.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a token with its `FromStr`, mapping failures to validation errors.
pub fn parse_token<T>(value: &str) -> CliResult<T>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    value
        .parse()
        .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Preference store in the config directory.
pub fn preference_store() -> CliResult<FileStore> {
    FileStore::in_config_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve config directory: {e}")))
}

/// Provider over the on-disk preference and the OS preference.
pub fn open_provider(ambient: &SystemAmbient) -> CliResult<ThemeProvider> {
    Ok(ThemeProvider::new(
        preference_store()?,
        ambient,
        RootClassList::new(),
    ))
}

/// `--mode` if given, otherwise the mode a fresh session would start in.
pub fn resolve_mode(mode: Option<&str>) -> CliResult<ThemeMode> {
    match mode {
        Some(mode) => parse_token(mode),
        None => Ok(ThemeProvider::initialize(
            &preference_store()?,
            &SystemAmbient::new(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ButtonVariant;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("disk").exit_code().code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_parse_token_maps_to_validation() {
        assert_eq!(parse_token::<ButtonVariant>("ghost").unwrap(), ButtonVariant::Ghost);
        let err = parse_token::<ButtonVariant>("shiny").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Validation);
        assert!(err.message().contains("shiny"));
    }

    #[test]
    fn test_explicit_mode_wins() {
        assert_eq!(resolve_mode(Some("dark")).unwrap(), ThemeMode::Dark);
        assert!(resolve_mode(Some("dim")).is_err());
    }
}
