//! `civic-ui theme` commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{open_provider, parse_token, print_json, CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::theme::{AmbientSource, SystemAmbient, ThemeMode, ThemeProvider};

/// Inspect or change the theme preference
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Show the active mode and where it comes from
    Show(ThemeShowArgs),
    /// Flip between dark and light, and save the choice
    Toggle,
    /// Save an explicit mode
    Set(ThemeSetArgs),
    /// Forget the saved mode and follow the OS again
    Reset,
}

/// Show the active mode
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Save an explicit mode
#[derive(Args, Debug)]
pub struct ThemeSetArgs {
    /// dark or light
    #[arg(value_name = "MODE")]
    mode: String,
}

/// Where the active mode came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ModeSource {
    Saved,
    System,
    Default,
}

impl ModeSource {
    const fn describe(self) -> &'static str {
        match self {
            Self::Saved => "saved preference",
            Self::System => "system preference",
            Self::Default => "default",
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ThemeStatus {
    mode: ThemeMode,
    is_dark_mode: bool,
    source: ModeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<String>,
    system_prefers_dark: Option<bool>,
}

impl ThemeStatus {
    fn read(provider: &ThemeProvider, ambient: &dyn AmbientSource) -> Self {
        let saved = provider.stored_preference();
        let system_prefers_dark = ambient.prefers_dark();
        let source = match (&saved, system_prefers_dark) {
            (Some(_), _) => ModeSource::Saved,
            (None, Some(_)) => ModeSource::System,
            (None, None) => ModeSource::Default,
        };
        Self {
            mode: provider.mode(),
            is_dark_mode: provider.is_dark_mode(),
            source,
            saved,
            system_prefers_dark,
        }
    }
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        let ambient = SystemAmbient::new();
        let provider = open_provider(&ambient)?;

        match &self.command {
            ThemeCommand::Show(args) => {
                let status = ThemeStatus::read(&provider, &ambient);
                if args.json {
                    print_json(&status)?;
                } else {
                    println!("Mode: {} ({})", status.mode, status.source.describe());
                    match status.system_prefers_dark {
                        Some(dark) => println!("System: {}", ThemeMode::from_dark(dark)),
                        None => println!("System: unknown"),
                    }
                }
            }
            ThemeCommand::Toggle => {
                let mode = provider.toggle_dark_mode();
                ensure_saved(&provider, mode)?;
                println!("Theme set to {mode}.");
            }
            ThemeCommand::Set(args) => {
                let mode: ThemeMode = parse_token(&args.mode)?;
                provider.set_mode(mode);
                ensure_saved(&provider, mode)?;
                println!("Theme set to {mode}.");
            }
            ThemeCommand::Reset => {
                let mode = provider.reset_to_system(&ambient);
                if provider.stored_preference().is_some() {
                    return Err(CliError::io("Failed to clear saved theme preference"));
                }
                println!("Theme preference cleared; following the system ({mode}).");
                println!("Run `{APP_BINARY_NAME} theme set <dark|light>` to pin a mode.");
            }
        }

        Ok(())
    }
}

/// The provider logs and swallows write failures; the CLI reports them.
fn ensure_saved(provider: &ThemeProvider, mode: ThemeMode) -> CliResult<()> {
    if provider.stored_preference().as_deref() == Some(mode.as_str()) {
        Ok(())
    } else {
        Err(CliError::io("Failed to save theme preference"))
    }
}
