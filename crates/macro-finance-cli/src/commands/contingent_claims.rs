use clap::Args;
use rust_decimal::Decimal;

use macro_finance_core::contingent_claims::state_prices::{self, StatePriceInput};
use macro_finance_core::course::Calculator;

use super::{finish, or_default, CommandResult};
use crate::input;

const CALC: Calculator = Calculator::ContingentClaims;

/// Arguments for Arrow-Debreu state prices
#[derive(Args)]
pub struct StatePriceArgs {
    /// Probability of the good state (pi)
    #[arg(long, alias = "pi")]
    pub probability_good: Option<Decimal>,

    /// Subjective discount factor (beta)
    #[arg(long, alias = "beta")]
    pub discount_factor: Option<Decimal>,

    /// Consumption tomorrow in the good state
    #[arg(long)]
    pub consumption_good: Option<Decimal>,

    /// Consumption tomorrow in the bad state
    #[arg(long)]
    pub consumption_bad: Option<Decimal>,

    /// Consumption today
    #[arg(long, default_value = "100")]
    pub consumption_today: Decimal,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_state_prices(args: StatePriceArgs) -> CommandResult {
    let claims = match input::load::<StatePriceInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => StatePriceInput {
            probability_good: or_default(args.probability_good, CALC, "probability_good"),
            discount_factor: or_default(args.discount_factor, CALC, "discount_factor"),
            consumption_good: or_default(args.consumption_good, CALC, "consumption_good"),
            consumption_bad: or_default(args.consumption_bad, CALC, "consumption_bad"),
            consumption_today: args.consumption_today,
        },
    };

    let result = state_prices::price_state_claims(&claims)?;
    finish(
        CALC,
        &[
            ("probability_good", claims.probability_good),
            ("discount_factor", claims.discount_factor),
            ("consumption_good", claims.consumption_good),
            ("consumption_bad", claims.consumption_bad),
        ],
        result,
    )
}
