use clap::Args;
use rust_decimal::Decimal;

use macro_finance_core::course::Calculator;
use macro_finance_core::equilibrium::pareto::{self, ParetoInput};

use super::{finish, or_default, CommandResult};
use crate::input;

const CALC: Calculator = Calculator::ParetoOptimality;

/// Arguments for the two-consumer Pareto check
#[derive(Args)]
pub struct ParetoArgs {
    /// Consumer 1's consumption of good A
    #[arg(long)]
    pub consumer1_good_a: Option<Decimal>,

    /// Consumer 1's preference weight (alpha)
    #[arg(long, alias = "alpha")]
    pub weight_consumer1: Option<Decimal>,

    /// Consumer 2's preference weight (beta)
    #[arg(long, alias = "beta")]
    pub weight_consumer2: Option<Decimal>,

    /// Total endowment of good A
    #[arg(long)]
    pub endowment_a: Option<Decimal>,

    /// Total endowment of good B
    #[arg(long)]
    pub endowment_b: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_pareto(args: ParetoArgs) -> CommandResult {
    let pareto_input = match input::load::<ParetoInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => ParetoInput {
            consumer1_good_a: or_default(args.consumer1_good_a, CALC, "consumer1_good_a"),
            weight_consumer1: or_default(args.weight_consumer1, CALC, "weight_consumer1"),
            weight_consumer2: or_default(args.weight_consumer2, CALC, "weight_consumer2"),
            endowment_a: or_default(args.endowment_a, CALC, "endowment_a"),
            endowment_b: or_default(args.endowment_b, CALC, "endowment_b"),
        },
    };

    let result = pareto::pareto_allocation(&pareto_input)?;
    finish(
        CALC,
        &[
            ("consumer1_good_a", pareto_input.consumer1_good_a),
            ("weight_consumer1", pareto_input.weight_consumer1),
            ("weight_consumer2", pareto_input.weight_consumer2),
            ("endowment_a", pareto_input.endowment_a),
            ("endowment_b", pareto_input.endowment_b),
        ],
        result,
    )
}
