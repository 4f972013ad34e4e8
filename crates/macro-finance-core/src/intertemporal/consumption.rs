//! Optimal two-period consumption, session closed form.
//!
//! With lifetime wealth `pv = Y0 + Y1/(1+r)` the session allocates
//! `c0 = pv(1+r) / ((1+r) + beta)` and `c1 = pv * beta * (1+r)^2 / ((1+r) + beta)`,
//! so `c1 = beta * (1+r) * c0` and the log-utility Euler equation holds.
//! For `r > 0` this allocation spends more than `pv` in present value; the
//! excess is reported as `budget_residual`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MacroFinanceError;
use crate::types::{with_metadata, ComputationOutput, Factor, Money, Rate};
use crate::MacroFinanceResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the intertemporal choice problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionInput {
    /// Income received today (Y0)
    pub income_today: Money,
    /// Income received tomorrow (Y1)
    pub income_tomorrow: Money,
    /// Subjective discount factor beta, strictly between 0 and 1
    pub discount_factor: Factor,
    /// Market interest rate as a decimal (0.03 = 3%)
    pub interest_rate: Rate,
}

/// Whether the agent lends or borrows at the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsDecision {
    Saves,
    Borrows,
    Neither,
}

/// Output of the intertemporal choice computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionOutput {
    /// Present value of lifetime income, Y0 + Y1/(1+r)
    pub pv_income: Money,
    /// Optimal consumption today (c0)
    pub consumption_today: Money,
    /// Optimal consumption tomorrow (c1)
    pub consumption_tomorrow: Money,
    /// Y0 - c0; negative when the agent borrows
    pub savings: Money,
    pub decision: SavingsDecision,
    /// |savings| * (1+r): received tomorrow by a saver, repaid by a borrower
    pub settlement_tomorrow: Money,
    /// u'(c0) / (beta * u'(c1)) = c1 / (beta * c0) under log utility
    pub intertemporal_mrs: Decimal,
    /// c0 + c1/(1+r) - pv; zero only when r = 0
    pub budget_residual: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Solve the two-period allocation in the session's closed form.
pub fn optimal_consumption(
    input: &ConsumptionInput,
) -> MacroFinanceResult<ComputationOutput<ConsumptionOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let beta = input.discount_factor;
    let gross_rate = Decimal::ONE + input.interest_rate;

    let pv_income = input.income_today + input.income_tomorrow / gross_rate;
    let denominator = gross_rate + beta;
    let consumption_today = pv_income * gross_rate / denominator;
    let consumption_tomorrow = pv_income * beta * gross_rate * gross_rate / denominator;
    let savings = input.income_today - consumption_today;

    let decision = if savings > Decimal::ZERO {
        SavingsDecision::Saves
    } else if savings < Decimal::ZERO {
        SavingsDecision::Borrows
    } else {
        SavingsDecision::Neither
    };

    // With u(c) = ln(c): u'(c0) / (beta u'(c1)) = c1 / (beta c0)
    let intertemporal_mrs = consumption_tomorrow / (beta * consumption_today);
    let budget_residual = consumption_today + consumption_tomorrow / gross_rate - pv_income;

    tracing::debug!(
        %pv_income,
        %consumption_today,
        %consumption_tomorrow,
        ?decision,
        "solved intertemporal choice"
    );

    let output = ConsumptionOutput {
        pv_income,
        consumption_today,
        consumption_tomorrow,
        savings,
        decision,
        settlement_tomorrow: savings.abs() * gross_rate,
        intertemporal_mrs,
        budget_residual,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Fisher two-period model — c0 = PV(income)(1+r)/((1+r)+beta)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &ConsumptionInput) -> MacroFinanceResult<()> {
    if input.income_today < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "income_today".into(),
            reason: "Income cannot be negative".into(),
        });
    }
    if input.income_tomorrow < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "income_tomorrow".into(),
            reason: "Income cannot be negative".into(),
        });
    }
    if input.discount_factor <= Decimal::ZERO || input.discount_factor >= Decimal::ONE {
        return Err(MacroFinanceError::InvalidInput {
            field: "discount_factor".into(),
            reason: "Discount factor must be strictly between 0 and 1".into(),
        });
    }
    if input.interest_rate < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if input.income_today.is_zero() && input.income_tomorrow.is_zero() {
        return Err(MacroFinanceError::DivisionByZero {
            context: "marginal utility at zero lifetime income".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session_default() -> ConsumptionInput {
        ConsumptionInput {
            income_today: dec!(100),
            income_tomorrow: dec!(100),
            discount_factor: dec!(0.95),
            interest_rate: dec!(0.03),
        }
    }

    #[test]
    fn test_quiz_scenario_borrows() {
        let input = ConsumptionInput {
            interest_rate: dec!(0.05),
            ..session_default()
        };
        let out = optimal_consumption(&input).unwrap().result;

        // pv = 100 + 100/1.05 = 195.238; c0 = 195.238 * 1.05 / 2.00 = 102.5
        assert!((out.pv_income - dec!(195.238)).abs() < dec!(0.001));
        assert!((out.consumption_today - dec!(102.5)).abs() < dec!(0.0000001));
        assert!((out.consumption_tomorrow - dec!(102.24375)).abs() < dec!(0.0000001));
        assert!((out.savings - dec!(-2.5)).abs() < dec!(0.0000001));
        assert_eq!(out.decision, SavingsDecision::Borrows);
    }

    #[test]
    fn test_euler_equation_holds() {
        let out = optimal_consumption(&session_default()).unwrap().result;
        assert!((out.intertemporal_mrs - dec!(1.03)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_high_rate_agent_saves() {
        let input = ConsumptionInput {
            income_today: dec!(150),
            income_tomorrow: dec!(50),
            interest_rate: dec!(0.10),
            discount_factor: dec!(0.99),
        };
        let out = optimal_consumption(&input).unwrap().result;
        assert_eq!(out.decision, SavingsDecision::Saves);
        assert_eq!(out.settlement_tomorrow, out.savings * dec!(1.10));
    }

    #[test]
    fn test_budget_residual_positive_when_rate_positive() {
        let out = optimal_consumption(&session_default()).unwrap().result;
        // c0 (1 + beta) - pv = pv * beta * r / ((1+r) + beta)
        let expected = out.pv_income * dec!(0.95) * dec!(0.03) / dec!(1.98);
        assert!((out.budget_residual - expected).abs() < dec!(0.0000000001));
        assert!(out.budget_residual > Decimal::ZERO);
    }

    #[test]
    fn test_impatient_agent_borrows_at_zero_rate() {
        let input = ConsumptionInput {
            interest_rate: dec!(0),
            ..session_default()
        };
        let out = optimal_consumption(&input).unwrap().result;
        assert_eq!(out.decision, SavingsDecision::Borrows);
    }

    #[test]
    fn test_discount_factor_out_of_range() {
        let input = ConsumptionInput {
            discount_factor: dec!(1),
            ..session_default()
        };
        let err = optimal_consumption(&input).unwrap_err();
        assert!(matches!(err, MacroFinanceError::InvalidInput { ref field, .. } if field == "discount_factor"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let input = ConsumptionInput {
            interest_rate: dec!(-0.01),
            ..session_default()
        };
        assert!(optimal_consumption(&input).is_err());
    }
}
