//! Input ranges of the interactive session widgets.
//!
//! Each calculator field carries the bounds, default and step the session
//! exposes. Front ends use the defaults when a value is not supplied and
//! report values outside the range; the calculators themselves only enforce
//! the economic invariants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Interactive calculators embedded in the session pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    IntertemporalChoice,
    ContingentClaims,
    ParetoOptimality,
    DiscountBond,
    CouponBond,
    RiskyAssetPricing,
}

/// A numeric input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Control {
    pub key: &'static str,
    pub label: &'static str,
    pub min: Decimal,
    pub max: Decimal,
    pub default: Decimal,
    pub step: Decimal,
}

impl Control {
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Message describing an out-of-range value, if any.
    pub fn check(&self, value: Decimal) -> Option<String> {
        if self.contains(value) {
            None
        } else {
            Some(format!(
                "{} = {} is outside the session range [{}, {}]",
                self.label, value, self.min, self.max
            ))
        }
    }
}

const fn control(
    key: &'static str,
    label: &'static str,
    min: Decimal,
    max: Decimal,
    default: Decimal,
    step: Decimal,
) -> Control {
    Control {
        key,
        label,
        min,
        max,
        default,
        step,
    }
}

const INTERTEMPORAL: [Control; 4] = [
    control("income_today", "Income today (Y₀)", dec!(50), dec!(200), dec!(100), dec!(10)),
    control("income_tomorrow", "Income tomorrow (Y₁)", dec!(50), dec!(200), dec!(100), dec!(10)),
    control("discount_factor", "Discount factor (β)", dec!(0.80), dec!(0.99), dec!(0.95), dec!(0.01)),
    control("interest_rate", "Interest rate (r)", dec!(0), dec!(0.10), dec!(0.03), dec!(0.005)),
];

const CONTINGENT: [Control; 4] = [
    control("probability_good", "Probability of good state (π)", dec!(0.3), dec!(0.9), dec!(0.6), dec!(0.05)),
    control("discount_factor", "Discount factor (β)", dec!(0.90), dec!(0.99), dec!(0.95), dec!(0.01)),
    control("consumption_good", "Consumption in good state", dec!(50), dec!(200), dec!(120), dec!(10)),
    control("consumption_bad", "Consumption in bad state", dec!(30), dec!(150), dec!(80), dec!(10)),
];

const PARETO: [Control; 5] = [
    control("consumer1_good_a", "Consumer 1: Good A consumption", dec!(0), dec!(10), dec!(5), dec!(0.5)),
    control("weight_consumer1", "Consumer 1: Weight α", dec!(0.5), dec!(2.0), dec!(1.0), dec!(0.1)),
    control("weight_consumer2", "Consumer 2: Weight β", dec!(0.5), dec!(2.0), dec!(1.0), dec!(0.1)),
    control("endowment_a", "Total endowment of good A", dec!(5), dec!(15), dec!(10), dec!(1)),
    control("endowment_b", "Total endowment of good B", dec!(5), dec!(15), dec!(10), dec!(1)),
];

const DISCOUNT_BOND: [Control; 2] = [
    control("maturity_years", "Maturity (years)", dec!(1), dec!(30), dec!(10), dec!(1)),
    control("yield_rate", "Yield (per year)", dec!(0), dec!(0.10), dec!(0.03), dec!(0.005)),
];

const COUPON_BOND: [Control; 4] = [
    control("maturity_years", "Maturity (years)", dec!(1), dec!(30), dec!(10), dec!(1)),
    control("coupon", "Annual coupon ($)", dec!(1), dec!(100), dec!(5), dec!(1)),
    control("face_value", "Face value ($)", dec!(50), dec!(1000), dec!(100), dec!(10)),
    control("yield_rate", "Yield (per year)", dec!(0), dec!(0.10), dec!(0.03), dec!(0.005)),
];

const RISKY_ASSET: [Control; 4] = [
    control("payoff_good", "Payoff in good state ($)", dec!(50), dec!(200), dec!(150), dec!(10)),
    control("payoff_bad", "Payoff in bad state ($)", dec!(0), dec!(100), dec!(50), dec!(10)),
    control("probability_good", "Probability of good state", dec!(0.3), dec!(0.9), dec!(0.6), dec!(0.05)),
    control("risk_free_rate", "Risk-free rate", dec!(0), dec!(0.10), dec!(0.03), dec!(0.005)),
];

impl Calculator {
    pub fn title(&self) -> &'static str {
        match self {
            Calculator::IntertemporalChoice => "Interactive: Intertemporal Choice",
            Calculator::ContingentClaims => "Interactive: Contingent Claims Pricing",
            Calculator::ParetoOptimality => "Interactive: Pareto Optimality",
            Calculator::DiscountBond => "Interactive: Bond Pricing (Discount Bond)",
            Calculator::CouponBond => "Interactive: Bond Pricing (Coupon Bond)",
            Calculator::RiskyAssetPricing => "Interactive: Compare Pricing Methods",
        }
    }

    pub fn controls(&self) -> &'static [Control] {
        match self {
            Calculator::IntertemporalChoice => &INTERTEMPORAL,
            Calculator::ContingentClaims => &CONTINGENT,
            Calculator::ParetoOptimality => &PARETO,
            Calculator::DiscountBond => &DISCOUNT_BOND,
            Calculator::CouponBond => &COUPON_BOND,
            Calculator::RiskyAssetPricing => &RISKY_ASSET,
        }
    }

    pub fn control(&self, key: &str) -> Option<&'static Control> {
        self.controls().iter().find(|c| c.key == key)
    }

    /// Session default for `key`, or zero for an unknown key.
    pub fn default_for(&self, key: &str) -> Decimal {
        self.control(key).map(|c| c.default).unwrap_or(Decimal::ZERO)
    }

    /// Out-of-range messages for the supplied `(key, value)` pairs.
    pub fn check_inputs(&self, values: &[(&str, Decimal)]) -> Vec<String> {
        let messages: Vec<String> = values
            .iter()
            .filter_map(|(key, value)| self.control(key).and_then(|c| c.check(*value)))
            .collect();
        for message in &messages {
            tracing::debug!(calculator = ?self, "{message}");
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lie_within_ranges() {
        for calc in [
            Calculator::IntertemporalChoice,
            Calculator::ContingentClaims,
            Calculator::ParetoOptimality,
            Calculator::DiscountBond,
            Calculator::CouponBond,
            Calculator::RiskyAssetPricing,
        ] {
            for c in calc.controls() {
                assert!(c.contains(c.default), "{:?}.{} default out of range", calc, c.key);
                assert!(c.step > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_default_lookup() {
        assert_eq!(
            Calculator::IntertemporalChoice.default_for("discount_factor"),
            dec!(0.95)
        );
        assert_eq!(Calculator::CouponBond.default_for("face_value"), dec!(100));
        assert_eq!(Calculator::CouponBond.default_for("missing"), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_reported() {
        let messages = Calculator::DiscountBond.check_inputs(&[
            ("maturity_years", dec!(45)),
            ("yield_rate", dec!(0.04)),
        ]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Maturity"));
    }
}
