//! Arrow-Debreu state prices from the consumer's first-order conditions.
//!
//! With log utility `u'(c) = 1/c`, the FOC for the claim paying one unit in
//! state `s` is `q_s = beta * pi_s * u'(c1_s) / u'(c0) = beta * pi_s * c0 / c1_s`.
//! A risk-free bond pays one unit in every state, so its price is `q_G + q_B`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MacroFinanceError;
use crate::types::{with_metadata, ComputationOutput, Factor, Money, Probability, Rate};
use crate::MacroFinanceResult;

fn default_consumption_today() -> Money {
    dec!(100)
}

/// Input parameters for contingent claims pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePriceInput {
    /// Probability of the good state (pi), strictly between 0 and 1
    pub probability_good: Probability,
    /// Subjective discount factor beta
    pub discount_factor: Factor,
    /// Consumption tomorrow in the good state
    pub consumption_good: Money,
    /// Consumption tomorrow in the bad state
    pub consumption_bad: Money,
    /// Consumption today used to normalise marginal utility
    #[serde(default = "default_consumption_today")]
    pub consumption_today: Money,
}

/// Output of the state price computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePriceOutput {
    /// Price of a claim paying 1 in the good state (q_G)
    pub state_price_good: Factor,
    /// Price of a claim paying 1 in the bad state (q_B)
    pub state_price_bad: Factor,
    /// q_G + q_B
    pub risk_free_bond_price: Factor,
    /// 1 / (q_G + q_B) - 1
    pub risk_free_rate: Rate,
    /// q_G / q_B
    pub state_price_ratio: Decimal,
    /// pi / (1 - pi)
    pub probability_ratio: Decimal,
    /// u'(c1_G) / u'(c1_B) = c1_B / c1_G
    pub marginal_utility_ratio: Decimal,
}

/// Price the two Arrow-Debreu securities and the implied risk-free bond.
pub fn price_state_claims(
    input: &StatePriceInput,
) -> MacroFinanceResult<ComputationOutput<StatePriceOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = solve_state_prices(input)?;

    if output.risk_free_rate < Decimal::ZERO {
        warnings.push(format!(
            "State prices sum to {} > 1; implied risk-free rate is negative",
            output.risk_free_bond_price.round_dp(4)
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Arrow-Debreu state prices — log utility FOC, q_s = beta * pi_s * c0 / c1_s",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Evaluate the state price formulas without the output envelope.
///
/// Shared with the risky asset module when state prices are derived from
/// preferences instead of supplied directly.
pub fn solve_state_prices(input: &StatePriceInput) -> MacroFinanceResult<StatePriceOutput> {
    validate_input(input)?;

    let pi = input.probability_good;
    let beta = input.discount_factor;
    let c0 = input.consumption_today;

    let state_price_good = beta * pi * (c0 / input.consumption_good);
    let state_price_bad = beta * (Decimal::ONE - pi) * (c0 / input.consumption_bad);

    let risk_free_bond_price = state_price_good + state_price_bad;
    let risk_free_rate = Decimal::ONE / risk_free_bond_price - Decimal::ONE;

    tracing::debug!(
        %state_price_good,
        %state_price_bad,
        %risk_free_rate,
        "priced contingent claims"
    );

    Ok(StatePriceOutput {
        state_price_good,
        state_price_bad,
        risk_free_bond_price,
        risk_free_rate,
        state_price_ratio: state_price_good / state_price_bad,
        probability_ratio: pi / (Decimal::ONE - pi),
        marginal_utility_ratio: input.consumption_bad / input.consumption_good,
    })
}

fn validate_input(input: &StatePriceInput) -> MacroFinanceResult<()> {
    if input.probability_good <= Decimal::ZERO || input.probability_good >= Decimal::ONE {
        return Err(MacroFinanceError::InvalidInput {
            field: "probability_good".into(),
            reason: "Probability must be strictly between 0 and 1".into(),
        });
    }
    if input.discount_factor <= Decimal::ZERO || input.discount_factor >= Decimal::ONE {
        return Err(MacroFinanceError::InvalidInput {
            field: "discount_factor".into(),
            reason: "Discount factor must be strictly between 0 and 1".into(),
        });
    }
    for (field, value) in [
        ("consumption_good", input.consumption_good),
        ("consumption_bad", input.consumption_bad),
        ("consumption_today", input.consumption_today),
    ] {
        if value <= Decimal::ZERO {
            return Err(MacroFinanceError::InvalidInput {
                field: field.into(),
                reason: "Consumption must be positive".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session_default() -> StatePriceInput {
        StatePriceInput {
            probability_good: dec!(0.6),
            discount_factor: dec!(0.95),
            consumption_good: dec!(120),
            consumption_bad: dec!(80),
            consumption_today: dec!(100),
        }
    }

    #[test]
    fn test_session_default_prices() {
        let out = price_state_claims(&session_default()).unwrap().result;
        // q_G = 0.95 * 0.6 * 100/120 = 0.475
        // q_B = 0.95 * 0.4 * 100/80 = 0.475
        assert!((out.state_price_good - dec!(0.475)).abs() < dec!(0.0000000001));
        assert_eq!(out.state_price_bad, dec!(0.475));
        assert!((out.risk_free_bond_price - dec!(0.95)).abs() < dec!(0.0000000001));
        // 1/0.95 - 1 = 5.263%
        assert!((out.risk_free_rate - dec!(0.052632)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_bad_state_claim_dearer_per_unit_probability() {
        let input = session_default();
        let out = solve_state_prices(&input).unwrap();
        let per_prob_good = out.state_price_good / input.probability_good;
        let per_prob_bad = out.state_price_bad / (Decimal::ONE - input.probability_good);
        assert!(per_prob_bad > per_prob_good);
    }

    #[test]
    fn test_consumption_today_defaults_to_100() {
        let json = r#"{
            "probability_good": "0.6",
            "discount_factor": "0.95",
            "consumption_good": "120",
            "consumption_bad": "80"
        }"#;
        let input: StatePriceInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.consumption_today, dec!(100));
    }

    #[test]
    fn test_negative_rate_warning() {
        let input = StatePriceInput {
            consumption_good: dec!(60),
            consumption_bad: dec!(40),
            ..session_default()
        };
        let result = price_state_claims(&input).unwrap();
        assert!(result.result.risk_free_rate < Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_probability_bounds() {
        let input = StatePriceInput {
            probability_good: dec!(1),
            ..session_default()
        };
        assert!(matches!(
            price_state_claims(&input),
            Err(MacroFinanceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_zero_consumption_rejected() {
        let input = StatePriceInput {
            consumption_bad: dec!(0),
            ..session_default()
        };
        assert!(price_state_claims(&input).is_err());
    }
}
