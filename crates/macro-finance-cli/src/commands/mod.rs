pub mod contingent_claims;
pub mod course;
pub mod equilibrium;
pub mod fixed_income;
pub mod intertemporal;
pub mod risky_assets;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use macro_finance_core::course::Calculator;
use macro_finance_core::ComputationOutput;

pub type CommandResult = Result<Value, Box<dyn std::error::Error>>;

/// Flag value, or the session default for `key`.
pub(crate) fn or_default(value: Option<Decimal>, calculator: Calculator, key: &str) -> Decimal {
    value.unwrap_or_else(|| calculator.default_for(key))
}

/// Maturity flag, or the session default as whole years.
pub(crate) fn maturity_or_default(
    value: Option<u32>,
    calculator: Calculator,
) -> Result<u32, Box<dyn std::error::Error>> {
    match value {
        Some(years) => Ok(years),
        None => calculator
            .default_for("maturity_years")
            .to_u32()
            .ok_or_else(|| "default maturity is not a whole number of years".into()),
    }
}

/// Serialize a calculation, putting widget range messages ahead of the
/// calculator's own warnings.
pub(crate) fn finish<T: Serialize>(
    calculator: Calculator,
    values: &[(&str, Decimal)],
    mut output: ComputationOutput<T>,
) -> CommandResult {
    let mut warnings = calculator.check_inputs(values);
    warnings.append(&mut output.warnings);
    output.warnings = warnings;
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_finance_core::with_metadata;
    use rust_decimal_macros::dec;

    #[test]
    fn test_range_message_reported_once_ahead_of_calculator_warnings() {
        let output = with_metadata("test", &(), vec!["calculator note".to_string()], 0, 1);
        let value = finish(
            Calculator::DiscountBond,
            &[("maturity_years", dec!(45)), ("yield_rate", dec!(0.03))],
            output,
        )
        .unwrap();

        let warnings = value["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].as_str().unwrap().starts_with("Maturity (years) = 45"));
        assert_eq!(warnings[1], "calculator note");
    }
}
