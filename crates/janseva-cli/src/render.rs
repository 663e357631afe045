use std::fmt;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge, StatusLevel};

fn badge_line(badge: &StatusBadge) -> String {
    let label = match badge.level {
        StatusLevel::Success => format!("{}", badge.label.green()),
        StatusLevel::Info => format!("{}", badge.label.cyan()),
        StatusLevel::Warning => format!("{}", badge.label.yellow()),
        StatusLevel::Error => format!("{}", badge.label.red()),
    };
    format!("{} {}", badge.icon(), label)
}

/// Write a command result to stdout. JSON dumps the whole envelope;
/// plain prints badge, view, then suggestions.
pub fn emit<T, V>(
    result: &CommandResultViewModel<T>,
    view: &V,
    format: OutputFormat,
) -> Result<()>
where
    T: Serialize,
    V: fmt::Display,
{
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Plain => {
            if let Some(badge) = &result.badge {
                println!("{}", badge_line(badge));
            }

            let body = view.to_string();
            if !body.is_empty() {
                if result.badge.is_some() {
                    println!();
                }
                print!("{}", body);
            }

            for guide in &result.suggestions {
                match &guide.command {
                    Some(cmd) => println!("{} {}: {}", "hint".bright_black(), guide.description, cmd),
                    None => println!("{} {}", "hint".bright_black(), guide.description),
                }
            }
        }
    }
    Ok(())
}
