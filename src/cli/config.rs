//! Configuration management CLI commands.

use crate::cli::common::{parse_token, print_json, CliError, CliResult};
use crate::config::{Config, LogoSize};
use crate::i18n::Language;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Application name shown in the navigation bar
    #[arg(long, value_name = "NAME")]
    app_name: Option<String>,

    /// Logo image URL
    #[arg(long, value_name = "URL")]
    logo_url: Option<String>,

    /// Logo size (small, medium or large)
    #[arg(long, value_name = "SIZE")]
    logo_size: Option<String>,

    /// Default language (en, hi or ml)
    #[arg(long, value_name = "CODE")]
    language: Option<String>,

    /// Render the notifications dropdown
    #[arg(long, value_name = "BOOL")]
    show_notifications: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.app_name.is_none()
            && self.logo_url.is_none()
            && self.logo_size.is_none()
            && self.language.is_none()
            && self.show_notifications.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --app-name, --logo-url, --logo-size, --language, or --show-notifications",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if let Some(name) = &self.app_name {
            config.system.app_name.clone_from(name);
        }
        if let Some(url) = &self.logo_url {
            config.system.app_logo_url = Some(url.clone());
        }
        if let Some(size) = &self.logo_size {
            config.system.app_logo_size = parse_token::<LogoSize>(size)?;
        }
        if let Some(code) = &self.language {
            config.ui.language = parse_token::<Language>(code)?;
        }
        if let Some(show) = self.show_notifications {
            config.ui.show_notifications = show;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn output_human_readable(config: &Config) {
    if let Ok(path) = Config::config_file_path() {
        if Config::exists() {
            println!("Config file: {}", path.display());
        } else {
            println!("Config file: {} (not created, showing defaults)", path.display());
        }
        println!();
    }
    println!("Branding:");
    println!("  Application name: {}", config.system.app_name);
    match &config.system.app_logo_url {
        Some(url) => println!("  Logo URL: {url}"),
        None => println!("  Logo URL: (not set)"),
    }
    println!("  Logo size: {}", config.system.app_logo_size);
    println!();
    println!("UI:");
    println!(
        "  Language: {} ({})",
        config.ui.language,
        config.ui.language.native_name()
    );
    println!("  Notifications: {}", config.ui.show_notifications);
}
