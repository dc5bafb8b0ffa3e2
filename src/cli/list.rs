//! Catalog listing commands (effects, styles)

use serde::Serialize;
use std::process::ExitCode;

use crate::effects::catalog;
use crate::restyle::Style;

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Debug, Serialize)]
struct EffectInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    padding: u32,
}

#[derive(Debug, Serialize)]
struct StyleInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

fn print_json<T: Serialize>(items: &[T]) -> ExitCode {
    match serde_json::to_string_pretty(items) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the effects command
pub fn run_effects(json: bool) -> ExitCode {
    let effects: Vec<EffectInfo> = catalog()
        .iter()
        .map(|def| EffectInfo {
            id: def.id,
            name: def.name,
            description: def.description,
            padding: def.padding,
        })
        .collect();

    if json {
        return print_json(&effects);
    }

    println!("Available effects:");
    for effect in &effects {
        println!("  {:<14} {:>3}px  {}", effect.id, effect.padding, effect.description);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the styles command
pub fn run_styles(json: bool) -> ExitCode {
    let styles: Vec<StyleInfo> = Style::ALL
        .iter()
        .map(|s| StyleInfo { id: s.id(), name: s.name(), description: s.description() })
        .collect();

    if json {
        return print_json(&styles);
    }

    println!("Available styles:");
    for style in &styles {
        println!("  {:<14} {}", style.id, style.description);
    }
    ExitCode::from(EXIT_SUCCESS)
}
