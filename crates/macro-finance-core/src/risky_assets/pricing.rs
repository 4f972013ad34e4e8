//! Risky two-state payoff priced by three equivalent approaches.
//!
//! 1. Arrow-Debreu: `P = q_G * C_G + q_B * C_B`
//! 2. Risk-neutral: `P = E^Q[C] / (1 + r_f)` with `pi_hat_s = q_s * (1 + r_f)`,
//!    normalised to sum to one
//! 3. Risk-adjusted: `P = (E[C] - Psi) / (1 + r_f)`
//!
//! Under no-arbitrage with consistent inputs the three coincide; the session
//! uses illustrative constants, so they generally differ.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::contingent_claims::state_prices::{self, StatePriceInput};
use crate::error::MacroFinanceError;
use crate::types::{with_metadata, ComputationOutput, Factor, Money, Probability, Rate};
use crate::MacroFinanceResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Illustrative good-state price used by the session widget.
pub const SESSION_STATE_PRICE_GOOD: Factor = dec!(0.45);
/// Illustrative bad-state price used by the session widget.
pub const SESSION_STATE_PRICE_BAD: Factor = dec!(0.52);
/// Illustrative risk adjustment (Psi) used by the session widget.
pub const SESSION_RISK_ADJUSTMENT: Money = dec!(5);

/// Largest tolerated gap between the risk-neutral probability mass and 1
/// before a consistency warning is raised.
const RISK_NEUTRAL_MASS_TOLERANCE: Decimal = dec!(0.0001);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where the Arrow-Debreu state prices come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum StatePriceSource {
    /// State prices supplied directly
    Given { good: Factor, bad: Factor },
    /// State prices derived from preferences via the contingent claims FOC
    Derived(StatePriceInput),
}

impl Default for StatePriceSource {
    fn default() -> Self {
        StatePriceSource::Given {
            good: SESSION_STATE_PRICE_GOOD,
            bad: SESSION_STATE_PRICE_BAD,
        }
    }
}

fn default_risk_adjustment() -> Money {
    SESSION_RISK_ADJUSTMENT
}

/// Input parameters for risky asset pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskyAssetInput {
    /// Payoff in the good state
    pub payoff_good: Money,
    /// Payoff in the bad state
    pub payoff_bad: Money,
    /// Physical probability of the good state; the bad state has 1 - pi
    pub probability_good: Probability,
    /// Risk-free rate as a decimal
    pub risk_free_rate: Rate,
    /// Risk adjustment Psi subtracted from the expected payoff
    #[serde(default = "default_risk_adjustment")]
    pub risk_adjustment: Money,
    #[serde(default)]
    pub state_prices: StatePriceSource,
}

/// One row of the method comparison table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingMethodRow {
    pub method: String,
    pub price: Money,
    pub formula: String,
}

/// Output of risky asset pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskyAssetOutput {
    pub state_price_good: Factor,
    pub state_price_bad: Factor,
    /// q_G * C_G + q_B * C_B
    pub price_arrow_debreu: Money,
    pub risk_neutral_prob_good: Probability,
    pub risk_neutral_prob_bad: Probability,
    /// E^Q[C] / (1 + r_f)
    pub price_risk_neutral: Money,
    /// pi * C_G + (1 - pi) * C_B
    pub expected_payoff: Money,
    /// (E[C] - Psi) / (1 + r_f)
    pub price_risk_adjusted: Money,
    pub methods: Vec<PricingMethodRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price a two-state risky payoff three ways.
pub fn price_risky_asset(
    input: &RiskyAssetInput,
) -> MacroFinanceResult<ComputationOutput<RiskyAssetOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let (q_good, q_bad) = resolve_state_prices(&input.state_prices)?;
    let gross_rf = Decimal::ONE + input.risk_free_rate;
    let pi = input.probability_good;

    // --- Arrow-Debreu ---
    let price_arrow_debreu = q_good * input.payoff_good + q_bad * input.payoff_bad;

    // --- Risk-neutral ---
    let pi_hat_good = q_good * gross_rf;
    let pi_hat_bad = q_bad * gross_rf;
    let mass = pi_hat_good + pi_hat_bad;
    if mass.is_zero() {
        return Err(MacroFinanceError::DivisionByZero {
            context: "risk-neutral probability normalisation".into(),
        });
    }
    if (mass - Decimal::ONE).abs() > RISK_NEUTRAL_MASS_TOLERANCE {
        warnings.push(format!(
            "State prices sum to {:.4} but 1/(1+r_f) = {:.4}; risk-neutral probabilities were normalised",
            q_good + q_bad,
            Decimal::ONE / gross_rf
        ));
    }
    let risk_neutral_prob_good = pi_hat_good / mass;
    let risk_neutral_prob_bad = pi_hat_bad / mass;
    let expected_payoff_rn =
        risk_neutral_prob_good * input.payoff_good + risk_neutral_prob_bad * input.payoff_bad;
    let price_risk_neutral = expected_payoff_rn / gross_rf;

    // --- Risk-adjusted ---
    let expected_payoff = pi * input.payoff_good + (Decimal::ONE - pi) * input.payoff_bad;
    let price_risk_adjusted = (expected_payoff - input.risk_adjustment) / gross_rf;

    tracing::debug!(
        %price_arrow_debreu,
        %price_risk_neutral,
        %price_risk_adjusted,
        "priced risky asset"
    );

    let methods = vec![
        PricingMethodRow {
            method: "1. Arrow-Debreu".into(),
            price: price_arrow_debreu,
            formula: format!(
                "qG×{} + qB×{}",
                input.payoff_good.round_dp(0),
                input.payoff_bad.round_dp(0)
            ),
        },
        PricingMethodRow {
            method: "2. Risk-Neutral".into(),
            price: price_risk_neutral,
            formula: "E[C]/(1+r) with π̂".into(),
        },
        PricingMethodRow {
            method: "3. Risk-Adjusted".into(),
            price: price_risk_adjusted,
            formula: "(E[C] - Ψ)/(1+r)".into(),
        },
    ];

    let output = RiskyAssetOutput {
        state_price_good: q_good,
        state_price_bad: q_bad,
        price_arrow_debreu,
        risk_neutral_prob_good,
        risk_neutral_prob_bad,
        price_risk_neutral,
        expected_payoff,
        price_risk_adjusted,
        methods,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Risky cash flow — Arrow-Debreu, risk-neutral and risk-adjusted pricing",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn resolve_state_prices(source: &StatePriceSource) -> MacroFinanceResult<(Factor, Factor)> {
    match source {
        StatePriceSource::Given { good, bad } => {
            if *good < Decimal::ZERO || *bad < Decimal::ZERO {
                return Err(MacroFinanceError::InvalidInput {
                    field: "state_prices".into(),
                    reason: "State prices cannot be negative".into(),
                });
            }
            Ok((*good, *bad))
        }
        StatePriceSource::Derived(claims) => {
            let solved = state_prices::solve_state_prices(claims)?;
            Ok((solved.state_price_good, solved.state_price_bad))
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &RiskyAssetInput) -> MacroFinanceResult<()> {
    if input.payoff_good < Decimal::ZERO || input.payoff_bad < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "payoff".into(),
            reason: "State payoffs cannot be negative".into(),
        });
    }
    if input.probability_good <= Decimal::ZERO || input.probability_good >= Decimal::ONE {
        return Err(MacroFinanceError::InvalidInput {
            field: "probability_good".into(),
            reason: "Probability must be strictly between 0 and 1".into(),
        });
    }
    if input.risk_free_rate < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "risk_free_rate".into(),
            reason: "Risk-free rate cannot be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
