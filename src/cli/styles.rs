//! `civic-ui styles` command.

use clap::Args;
use serde_json::Value;

use crate::cli::common::{print_json, resolve_mode, CliError, CliResult};
use crate::style::generate;

/// Dump the style table for a mode
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// dark or light (defaults to the current mode)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl StylesArgs {
    /// Execute styles command
    pub fn execute(&self) -> CliResult<()> {
        let mode = resolve_mode(self.mode.as_deref())?;
        let style = generate(mode.is_dark());

        if self.json {
            return print_json(&style);
        }

        let value = serde_json::to_value(&style)
            .map_err(|e| CliError::io(format!("Failed to serialize style table: {e}")))?;
        println!("# {mode} mode");
        for (key, classes) in flatten(&value) {
            println!("{key} = {classes}");
        }
        Ok(())
    }
}

/// `category.key` / classes pairs, sorted by key.
pub(crate) fn flatten(value: &Value) -> Vec<(String, String)> {
    fn walk(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(child, &path, out);
                }
            }
            Value::String(classes) => out.push((prefix.to_string(), classes.clone())),
            other => out.push((prefix.to_string(), other.to_string())),
        }
    }

    let mut out = Vec::new();
    walk(value, "", &mut out);
    out
}
