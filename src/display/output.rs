use colored::*;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    number: String,
    name: String,
    id: String,
    trophies: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Returns the `reason` of an error object sent back by the service, if any.
pub fn remote_error(value: &Value) -> Option<String> {
    let reason = value.get("reason")?.as_str()?;
    let message = value.get("message").and_then(Value::as_str);
    Some(match message {
        Some(message) => format!("{} ({})", reason, message),
        None => reason.to_string(),
    })
}

pub fn display_json(value: &Value, raw: bool) {
    let rendered = if raw {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };

    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => display_error(&format!("could not render response: {}", e)),
    }
}

fn item_rows(value: &Value) -> Option<Vec<ItemRow>> {
    let items = value.get("items")?.as_array()?;

    let rows: Vec<ItemRow> = items
        .iter()
        .filter(|item| item.is_object())
        .enumerate()
        .map(|(idx, item)| ItemRow {
            number: item
                .get("rank")
                .map(field_text)
                .unwrap_or_else(|| format!("{}", idx + 1)),
            name: item.get("name").map(field_text).unwrap_or_default(),
            id: item
                .get("tag")
                .or_else(|| item.get("id"))
                .map(field_text)
                .unwrap_or_default(),
            trophies: item
                .get("trophies")
                .or_else(|| item.get("clanPoints"))
                .map(field_text)
                .unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}

/// Prints a summary table for list responses (`{"items": [...]}`); anything else is skipped.
pub fn display_items_table(value: &Value) {
    let rows = match item_rows(value) {
        Some(rows) => rows,
        None => return,
    };

    println!("\n{}", format!("📋 {} items", rows.len()).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
