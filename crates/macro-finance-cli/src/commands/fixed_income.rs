use clap::Args;
use rust_decimal::Decimal;

use macro_finance_core::course::Calculator;
use macro_finance_core::fixed_income::bonds::{self, CouponBondInput, DiscountBondInput};

use super::{finish, maturity_or_default, or_default, CommandResult};
use crate::input;

/// Arguments for pricing a discount (zero-coupon) bond
#[derive(Args)]
pub struct DiscountBondArgs {
    /// Years to maturity
    #[arg(long, alias = "years")]
    pub maturity: Option<u32>,

    /// Annual yield (e.g. 0.03 for 3%)
    #[arg(long = "yield", alias = "yield-rate")]
    pub yield_rate: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for pricing an annual-pay coupon bond
#[derive(Args)]
pub struct CouponBondArgs {
    /// Years to maturity
    #[arg(long, alias = "years")]
    pub maturity: Option<u32>,

    /// Annual coupon amount
    #[arg(long)]
    pub coupon: Option<Decimal>,

    /// Face value repaid at maturity
    #[arg(long, alias = "face")]
    pub face_value: Option<Decimal>,

    /// Annual yield (e.g. 0.03 for 3%)
    #[arg(long = "yield", alias = "yield-rate")]
    pub yield_rate: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_discount_bond(args: DiscountBondArgs) -> CommandResult {
    const CALC: Calculator = Calculator::DiscountBond;

    let bond = match input::load::<DiscountBondInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => DiscountBondInput {
            maturity_years: maturity_or_default(args.maturity, CALC)?,
            yield_rate: or_default(args.yield_rate, CALC, "yield_rate"),
        },
    };

    let result = bonds::price_discount_bond(&bond)?;
    finish(
        CALC,
        &[
            ("maturity_years", Decimal::from(bond.maturity_years)),
            ("yield_rate", bond.yield_rate),
        ],
        result,
    )
}

pub fn run_coupon_bond(args: CouponBondArgs) -> CommandResult {
    const CALC: Calculator = Calculator::CouponBond;

    let bond = match input::load::<CouponBondInput>(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => CouponBondInput {
            maturity_years: maturity_or_default(args.maturity, CALC)?,
            coupon: or_default(args.coupon, CALC, "coupon"),
            face_value: or_default(args.face_value, CALC, "face_value"),
            yield_rate: or_default(args.yield_rate, CALC, "yield_rate"),
        },
    };

    let result = bonds::price_coupon_bond(&bond)?;
    finish(
        CALC,
        &[
            ("maturity_years", Decimal::from(bond.maturity_years)),
            ("coupon", bond.coupon),
            ("face_value", bond.face_value),
            ("yield_rate", bond.yield_rate),
        ],
        result,
    )
}
