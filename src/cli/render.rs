//! `civic-ui render` command: print themed markup.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::cli::common::{parse_token, resolve_mode, CliError, CliResult};
use crate::components::{page, showcase, NavView, NavigationBar, NavigationOptions};
use crate::config::Config;
use crate::dom::{Document, RootClassList};
use crate::i18n::Language;
use crate::session::{User, UserRole};
use crate::theme::{PresentationMarker, ThemeContext};

/// What to render.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Navigation bar only
    Nav,
    /// Theme showcase only
    Showcase,
    /// Full HTML document with the bar and the showcase
    Page,
}

/// Render components to HTML
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// What to render
    #[arg(value_enum)]
    target: RenderTarget,

    /// Render for a signed-in user with this role
    #[arg(long, value_name = "ROLE")]
    role: Option<String>,

    /// Full name of the signed-in user
    #[arg(long, value_name = "NAME", default_value = "Demo User")]
    name: String,

    /// Language code (defaults to the configured language)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Current route, for the active-item highlight
    #[arg(long, value_name = "PATH", default_value = "/")]
    path: String,

    /// Render with the mobile menu open
    #[arg(long)]
    menu_open: bool,

    /// dark or light (defaults to the current mode)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute render command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let mode = resolve_mode(self.mode.as_deref())?;
        let language = match &self.lang {
            Some(code) => parse_token::<Language>(code)?,
            None => config.ui.language,
        };
        let user = match &self.role {
            Some(role) => Some(User::new(parse_token::<UserRole>(role)?, self.name.as_str())),
            None => None,
        };

        let theme = ThemeContext::for_mode(mode);
        let ui = theme.ui();
        let document = Document::new();
        let bar = NavigationBar::new(&document, NavigationOptions::from_config(&config));
        if self.menu_open {
            bar.menu().open();
        }

        let view = NavView {
            user: user.as_ref(),
            language,
            theme: &theme,
            system: &config.system,
            current_path: &self.path,
            notifications: &[],
        };

        let html = match self.target {
            RenderTarget::Nav => bar.render(&view).to_string(),
            RenderTarget::Showcase => showcase(&ui).to_string(),
            RenderTarget::Page => {
                let mut root = RootClassList::new();
                root.apply(mode.is_dark());
                page(
                    &ui,
                    &root,
                    language,
                    &config.system.app_name,
                    bar.render(&view),
                    showcase(&ui),
                )
            }
        };

        match &self.output {
            Some(path) => std::fs::write(path, html).map_err(|e| {
                CliError::io(format!("Failed to write {}: {e}", path.display()))
            })?,
            None => println!("{html}"),
        }

        Ok(())
    }
}
