//! Terminal rendering shared by the commands

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Row, Table};
use serde_json::Value;
use std::path::Path;

use crate::error::Result;

/// How tabular results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// A rounded UTF-8 table with the given header
pub fn table(header: impl Into<Row>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header);
    table
}

/// Convert a JSON value to a display cell; null is blank
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            format!("[{}]", arr.iter().map(value_to_string).collect::<Vec<_>>().join(", "))
        },
        Value::Object(_) => value.to_string(),
    }
}

/// Three-decimal rate the way box scores print it (`.500`, `1.250`)
pub fn rate(value: f64) -> String {
    let text = format!("{value:.3}");
    match text.strip_prefix("0.") {
        Some(rest) => format!(".{rest}"),
        None => text,
    }
}

pub fn optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Write to `path` if given, else print to stdout
pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            success(&format!("Output written to: {}", path.display().to_string().cyan()));
        },
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&Value::Null), "");
        assert_eq!(value_to_string(&json!(3)), "3");
        assert_eq!(value_to_string(&json!(0.429)), "0.429");
        assert_eq!(value_to_string(&json!("1.500")), "1.500");
    }

    #[test]
    fn test_rate_drops_leading_zero() {
        assert_eq!(rate(0.5), ".500");
        assert_eq!(rate(0.0), ".000");
        assert_eq!(rate(1.25), "1.250");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        emit("a,b\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
    }
}
