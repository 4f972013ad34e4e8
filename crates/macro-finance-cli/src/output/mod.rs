pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
///
/// Rendered pages (values carrying a `markdown` string) are printed as-is
/// for the human-oriented formats.
pub fn format_output(format: &OutputFormat, value: &Value) {
    if let (OutputFormat::Table | OutputFormat::Minimal, Some(md)) =
        (format, value.get("markdown").and_then(Value::as_str))
    {
        println!("{md}");
        return;
    }

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar or nested JSON value as a single cell.
pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Split an object into scalar fields and nested tables (arrays of objects).
pub(crate) fn split_tables(
    map: &serde_json::Map<String, Value>,
) -> (Vec<(&String, &Value)>, Vec<(&String, &Vec<Value>)>) {
    let mut scalars = Vec::new();
    let mut tables = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(rows) if rows.first().map(Value::is_object).unwrap_or(false) => {
                tables.push((key, rows))
            }
            _ => scalars.push((key, val)),
        }
    }
    (scalars, tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_tables_separates_rows() {
        let value = json!({
            "price": "117.06",
            "schedule": [{"period": 1, "cash_flow": "5"}],
            "tags": ["a", "b"]
        });
        let (scalars, tables) = split_tables(value.as_object().unwrap());
        assert_eq!(scalars.len(), 2);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0, "schedule");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!(["x", 1, true])), "x, 1, true");
        assert_eq!(format_cell(&Value::Null), "");
    }
}
