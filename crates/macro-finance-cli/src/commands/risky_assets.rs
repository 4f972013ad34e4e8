use clap::Args;
use rust_decimal::Decimal;

use macro_finance_core::course::Calculator;
use macro_finance_core::risky_assets::pricing::{
    self, RiskyAssetInput, StatePriceSource, SESSION_RISK_ADJUSTMENT, SESSION_STATE_PRICE_BAD,
    SESSION_STATE_PRICE_GOOD,
};

use super::{finish, or_default, CommandResult};
use crate::input;

const CALC: Calculator = Calculator::RiskyAssetPricing;

/// Arguments for comparing risky asset pricing methods
#[derive(Args)]
pub struct RiskyAssetArgs {
    /// Payoff in the good state
    #[arg(long)]
    pub payoff_good: Option<Decimal>,

    /// Payoff in the bad state
    #[arg(long)]
    pub payoff_bad: Option<Decimal>,

    /// Physical probability of the good state
    #[arg(long, alias = "pi")]
    pub probability_good: Option<Decimal>,

    /// Risk-free rate (e.g. 0.03 for 3%)
    #[arg(long, alias = "rf")]
    pub risk_free_rate: Option<Decimal>,

    /// Risk adjustment (Psi) subtracted from the expected payoff
    #[arg(long, alias = "psi")]
    pub risk_adjustment: Option<Decimal>,

    /// Good-state Arrow-Debreu price
    #[arg(long)]
    pub q_good: Option<Decimal>,

    /// Bad-state Arrow-Debreu price
    #[arg(long)]
    pub q_bad: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_risky_asset(args: RiskyAssetArgs) -> CommandResult {
    let asset = match input::load::<RiskyAssetInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => RiskyAssetInput {
            payoff_good: or_default(args.payoff_good, CALC, "payoff_good"),
            payoff_bad: or_default(args.payoff_bad, CALC, "payoff_bad"),
            probability_good: or_default(args.probability_good, CALC, "probability_good"),
            risk_free_rate: or_default(args.risk_free_rate, CALC, "risk_free_rate"),
            risk_adjustment: args.risk_adjustment.unwrap_or(SESSION_RISK_ADJUSTMENT),
            state_prices: StatePriceSource::Given {
                good: args.q_good.unwrap_or(SESSION_STATE_PRICE_GOOD),
                bad: args.q_bad.unwrap_or(SESSION_STATE_PRICE_BAD),
            },
        },
    };

    let result = pricing::price_risky_asset(&asset)?;
    finish(
        CALC,
        &[
            ("payoff_good", asset.payoff_good),
            ("payoff_bad", asset.payoff_bad),
            ("probability_good", asset.probability_good),
            ("risk_free_rate", asset.risk_free_rate),
        ],
        result,
    )
}
