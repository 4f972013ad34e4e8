use clap::Args;
use rust_decimal::Decimal;

use macro_finance_core::course::Calculator;
use macro_finance_core::intertemporal::consumption::{self, ConsumptionInput};

use super::{finish, or_default, CommandResult};
use crate::input;

const CALC: Calculator = Calculator::IntertemporalChoice;

/// Arguments for the two-period consumption choice
#[derive(Args)]
pub struct ConsumptionArgs {
    /// Income today (Y0)
    #[arg(long, alias = "y0")]
    pub income_today: Option<Decimal>,

    /// Income tomorrow (Y1)
    #[arg(long, alias = "y1")]
    pub income_tomorrow: Option<Decimal>,

    /// Subjective discount factor (e.g. 0.95)
    #[arg(long, alias = "beta")]
    pub discount_factor: Option<Decimal>,

    /// Interest rate (e.g. 0.03 for 3%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_consumption(args: ConsumptionArgs) -> CommandResult {
    let consumption_input = match input::load::<ConsumptionInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => ConsumptionInput {
            income_today: or_default(args.income_today, CALC, "income_today"),
            income_tomorrow: or_default(args.income_tomorrow, CALC, "income_tomorrow"),
            discount_factor: or_default(args.discount_factor, CALC, "discount_factor"),
            interest_rate: or_default(args.interest_rate, CALC, "interest_rate"),
        },
    };

    let result = consumption::optimal_consumption(&consumption_input)?;
    finish(
        CALC,
        &[
            ("income_today", consumption_input.income_today),
            ("income_tomorrow", consumption_input.income_tomorrow),
            ("discount_factor", consumption_input.discount_factor),
            ("interest_rate", consumption_input.interest_rate),
        ],
        result,
    )
}
