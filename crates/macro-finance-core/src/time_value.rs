use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MacroFinanceError;
use crate::types::{Factor, Money, Rate};
use crate::MacroFinanceResult;

/// Longest horizon, in periods, the compounding helpers accept.
pub const MAX_PERIODS: u32 = 1_000;

fn validate_rate(rate: Rate) -> MacroFinanceResult<()> {
    if rate <= dec!(-1) {
        return Err(MacroFinanceError::InvalidInput {
            field: "rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }
    Ok(())
}

fn validate_periods(periods: u32) -> MacroFinanceResult<()> {
    if periods > MAX_PERIODS {
        return Err(MacroFinanceError::InvalidInput {
            field: "periods".into(),
            reason: format!("At most {MAX_PERIODS} periods are supported"),
        });
    }
    Ok(())
}

fn compound_step(factor: Factor, one_plus_r: Factor, period: u32) -> MacroFinanceResult<Factor> {
    factor
        .checked_mul(one_plus_r)
        .ok_or_else(|| MacroFinanceError::InvalidInput {
            field: "rate".into(),
            reason: format!("Compounding overflows the decimal range at period {period}"),
        })
}

/// Compounding factor (1+r)^periods, built by iterative multiplication.
pub fn compound_factor(rate: Rate, periods: u32) -> MacroFinanceResult<Factor> {
    validate_rate(rate)?;
    validate_periods(periods)?;

    let one_plus_r = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for t in 1..=periods {
        factor = compound_step(factor, one_plus_r, t)?;
    }
    Ok(factor)
}

/// Present value of a single amount received `periods` periods from now.
pub fn present_value(amount: Money, rate: Rate, periods: u32) -> MacroFinanceResult<Money> {
    let factor = compound_factor(rate, periods)?;
    amount
        .checked_div(factor)
        .ok_or_else(|| MacroFinanceError::DivisionByZero {
            context: format!("discount factor at period {periods}"),
        })
}

/// Discount factor 1/(1+r)^periods
pub fn discount_factor(rate: Rate, periods: u32) -> MacroFinanceResult<Factor> {
    present_value(Decimal::ONE, rate, periods)
}

/// Present values of a level payment received at the end of periods 1..=periods.
///
/// Returns one `(period, discount_factor, present_value)` triple per period.
pub fn annuity_schedule(
    rate: Rate,
    periods: u32,
    payment: Money,
) -> MacroFinanceResult<Vec<(u32, Factor, Money)>> {
    validate_rate(rate)?;
    validate_periods(periods)?;

    let one_plus_r = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    let mut schedule = Vec::with_capacity(periods as usize);

    for t in 1..=periods {
        factor = compound_step(factor, one_plus_r, t)?;
        let (Some(df), Some(pv)) = (Decimal::ONE.checked_div(factor), payment.checked_div(factor))
        else {
            return Err(MacroFinanceError::DivisionByZero {
                context: format!("annuity discount factor at period {t}"),
            });
        };
        schedule.push((t, df, pv));
    }

    Ok(schedule)
}

/// Present value of a level annuity: sum of payment/(1+r)^t for t = 1..=periods.
pub fn annuity_pv(rate: Rate, periods: u32, payment: Money) -> MacroFinanceResult<Money> {
    Ok(annuity_schedule(rate, periods, payment)?
        .iter()
        .map(|(_, _, pv)| *pv)
        .sum())
}
