use serde_json::Value;

use super::format_cell;

/// Headline fields, in priority order, for each calculator's result.
const PRIORITY_KEYS: [&str; 10] = [
    "consumption_today",
    "risk_free_rate",
    "is_pareto_optimal",
    "price",
    "price_arrow_debreu",
    "outcome",
    "status",
    "pv_income",
    "state_price_good",
    "mrs_gap",
];

/// Print just the key answer value from the output.
///
/// Falls back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result_obj else {
        return format_cell(result_obj);
    };

    for key in PRIORITY_KEYS {
        match map.get(key) {
            Some(val) if !val.is_null() => return format_cell(val),
            _ => {}
        }
    }

    match map.iter().next() {
        Some((key, val)) => format!("{key}: {}", format_cell(val)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headline_prefers_priority_field() {
        let value = json!({
            "result": {"pv_coupons": "42.65", "price": "117.06"},
            "warnings": []
        });
        assert_eq!(headline(&value), "117.06");
    }

    #[test]
    fn test_headline_falls_back_to_first_field() {
        let value = json!({"result": {"questions": 3}});
        assert_eq!(headline(&value), "questions: 3");
    }
}
