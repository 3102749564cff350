use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
        }
    }

    /// Print a command result: the whole view model as JSON in json mode,
    /// otherwise badge + view + suggestions as plain text.
    pub fn render<T, V>(&self, result: &CommandResultViewModel<T>, view: V) -> Result<()>
    where
        T: Serialize,
        V: Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", view);

        if !result.suggestions.is_empty() {
            println!("\n{}", "Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }

        Ok(())
    }
}
