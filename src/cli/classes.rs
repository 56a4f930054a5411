//! `civic-ui classes` commands: print the classes a component would get.

use clap::{Args, Subcommand};

use crate::cli::common::{parse_token, resolve_mode, CliResult};
use crate::style::{
    generate, ButtonSize, ButtonVariant, CardVariant, FontSize, InputState, TextTone,
};
use crate::ui_config::UiConfig;

/// Compute component class strings
#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// dark or light (defaults to the current mode)
    #[arg(long, global = true, value_name = "MODE")]
    mode: Option<String>,

    #[command(subcommand)]
    command: ClassesCommand,
}

#[derive(Subcommand, Debug)]
enum ClassesCommand {
    /// Button classes
    Button {
        /// primary, secondary, outline, ghost or destructive
        #[arg(long, default_value = "primary")]
        variant: String,
        /// default, small, large or icon
        #[arg(long, default_value = "default")]
        size: String,
        /// Extra classes appended last
        #[arg(long)]
        extra: Option<String>,
    },
    /// Card classes
    Card {
        /// default, elevated or bordered
        #[arg(long, default_value = "default")]
        variant: String,
        /// Extra classes appended last
        #[arg(long)]
        extra: Option<String>,
    },
    /// Text classes
    Text {
        /// primary, secondary or muted
        #[arg(long, default_value = "primary")]
        tone: String,
        /// xs, sm, base, lg, xl, 2xl or heading
        #[arg(long, default_value = "base")]
        size: String,
        /// Extra classes appended last
        #[arg(long)]
        extra: Option<String>,
    },
    /// Input classes
    Input {
        /// default, error or focus
        #[arg(long, default_value = "default")]
        state: String,
        /// Extra classes appended last
        #[arg(long)]
        extra: Option<String>,
    },
}

impl ClassesArgs {
    /// Execute classes subcommand
    pub fn execute(&self) -> CliResult<()> {
        let mode = resolve_mode(self.mode.as_deref())?;
        let style = generate(mode.is_dark());
        let ui = UiConfig::new(&style, mode.is_dark());

        let classes = match &self.command {
            ClassesCommand::Button {
                variant,
                size,
                extra,
            } => {
                let variant: ButtonVariant = parse_token(variant)?;
                let size: ButtonSize = parse_token(size)?;
                ui.button_classes(variant, size, extra.as_deref())
            }
            ClassesCommand::Card { variant, extra } => {
                let variant: CardVariant = parse_token(variant)?;
                ui.card_classes(variant, extra.as_deref())
            }
            ClassesCommand::Text { tone, size, extra } => {
                let tone: TextTone = parse_token(tone)?;
                let size: FontSize = parse_token(size)?;
                ui.text_classes(tone, size, extra.as_deref())
            }
            ClassesCommand::Input { state, extra } => {
                let state: InputState = parse_token(state)?;
                ui.input_classes(state, extra.as_deref())
            }
        };

        println!("{classes}");
        Ok(())
    }
}
