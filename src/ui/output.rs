use crate::api::FlatMap;
use colored::*;
use serde_json::Value;

/// `key: value` lines with keys padded to a common width. `style` is applied
/// to the padded label only.
pub fn format_fields<F>(fields: &FlatMap, style: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let width = fields.keys().map(|k| k.chars().count()).max().unwrap_or(0) + 1;
    fields
        .iter()
        .map(|(key, value)| {
            let label = format!("{:<width$}", format!("{}:", key), width = width);
            format!("{}  {}", style(&label), value)
        })
        .collect()
}

/// Display a flat response with highlighted keys
pub fn display_fields(fields: &FlatMap) {
    if fields.is_empty() {
        println!("{}", "(no fields)".dimmed());
        return;
    }

    for line in format_fields(fields, |label| label.cyan().to_string()) {
        println!("{}", line);
    }
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", value),
    }
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}
