//! CLI command handlers for Civic UI.
//!
//! Headless access to the theme preference, the style table and the
//! component renderers, for scripting and for checking markup in CI.

pub mod classes;
pub mod common;
pub mod config;
pub mod render;
pub mod styles;
pub mod theme;

use clap::{Parser, Subcommand};

// Re-export types used by main.rs and tests
pub use classes::ClassesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use render::{RenderArgs, RenderTarget};
pub use styles::StylesArgs;
pub use theme::ThemeArgs;

/// Civic UI - theme and navigation toolkit for the grievance portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or change the theme preference
    Theme(ThemeArgs),
    /// Dump the style table for a mode
    Styles(StylesArgs),
    /// Compute component class strings
    Classes(ClassesArgs),
    /// Render components to HTML
    Render(RenderArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Runs the selected command.
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            Command::Theme(args) => args.execute(),
            Command::Styles(args) => args.execute(),
            Command::Classes(args) => args.execute(),
            Command::Render(args) => args.execute(),
            Command::Config(args) => args.execute(),
        }
    }
}
