use serde_json::{Map, Value};
use std::io;

use super::{format_cell, split_tables};

/// Write output as CSV to stdout.
///
/// Results with a nested row set (e.g. a coupon schedule) are written as that
/// table; otherwise a two-column `field,value` listing is produced.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let outcome = match target {
        Value::Object(map) => write_object(&mut wtr, map),
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => wtr.write_record([format_cell(other)]),
    };

    if let Err(e) = outcome.and_then(|_| wtr.flush().map_err(Into::into)) {
        eprintln!("CSV write error: {e}");
    }
}

fn write_object<W: io::Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> Result<(), csv::Error> {
    let (scalars, tables) = split_tables(map);
    if let Some((_, rows)) = tables.first() {
        return write_rows(wtr, rows);
    }

    wtr.write_record(["field", "value"])?;
    for (key, val) in scalars {
        wtr.write_record([key.clone(), format_cell(val)])?;
    }
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([format_cell(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_cell).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        match value {
            Value::Object(map) => write_object(&mut wtr, map).unwrap(),
            Value::Array(rows) => write_rows(&mut wtr, rows).unwrap(),
            _ => unreachable!(),
        }
        let bytes = match wtr.into_inner() {
            Ok(bytes) => bytes,
            Err(_) => panic!("csv writer failed to flush"),
        };
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_schedule_written_as_table() {
        let out = render(&json!({
            "price": "117.06",
            "schedule": [
                {"period": 1, "cash_flow": "5"},
                {"period": 2, "cash_flow": "105"}
            ]
        }));
        assert_eq!(out, "period,cash_flow\n1,5\n2,105\n");
    }

    #[test]
    fn test_flat_result_written_as_fields() {
        let out = render(&json!({"price": "0.7441"}));
        assert_eq!(out, "field,value\nprice,0.7441\n");
    }
}
