//! Safe cash flow pricing: zero-coupon (discount) bonds and level coupon bonds
//! with annual payments, discounted at a flat yield.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MacroFinanceError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Factor, Money, Rate};
use crate::MacroFinanceResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Decimal places kept when comparing a price with face value for
/// premium/discount/par classification.
const CLASSIFICATION_DP: u32 = 10;

/// Longest maturity accepted, in years. Century bonds are the longest
/// issued in practice.
pub const MAX_MATURITY_YEARS: u32 = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a discount bond paying 1 at maturity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountBondInput {
    /// Years to maturity (T >= 1)
    pub maturity_years: u32,
    /// Annual yield as a decimal
    pub yield_rate: Rate,
}

/// Output of discount bond pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountBondOutput {
    /// 1 / (1+r)^T
    pub price: Factor,
    /// Gross return from holding to maturity, 1/price - 1
    pub holding_period_return: Rate,
}

/// Input parameters for an annual-pay coupon bond.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponBondInput {
    /// Years to maturity (T >= 1)
    pub maturity_years: u32,
    /// Annual coupon amount (C)
    pub coupon: Money,
    /// Face value repaid at maturity (F)
    pub face_value: Money,
    /// Annual yield as a decimal
    pub yield_rate: Rate,
}

/// Where a coupon bond trades relative to its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondClassification {
    /// Price above face: coupon rate exceeds yield
    Premium,
    /// Price below face: coupon rate is under yield
    Discount,
    Par,
}

/// One row of the coupon bond cash flow schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCashflow {
    pub period: u32,
    pub cash_flow: Money,
    pub discount_factor: Factor,
    pub present_value: Money,
}

/// Output of coupon bond pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponBondOutput {
    /// Sum of C/(1+r)^t for t = 1..=T
    pub pv_coupons: Money,
    /// F/(1+r)^T
    pub pv_face: Money,
    /// pv_coupons + pv_face
    pub price: Money,
    /// C / F
    pub coupon_rate: Rate,
    pub classification: BondClassification,
    pub schedule: Vec<CouponCashflow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price a bond paying 1 at maturity.
pub fn price_discount_bond(
    input: &DiscountBondInput,
) -> MacroFinanceResult<ComputationOutput<DiscountBondOutput>> {
    let start = Instant::now();

    validate_terms(input.maturity_years, input.yield_rate)?;

    let price = time_value::discount_factor(input.yield_rate, input.maturity_years)?;
    let holding_period_return = Decimal::ONE
        .checked_div(price)
        .ok_or_else(|| MacroFinanceError::DivisionByZero {
            context: "discount bond price rounds to zero".into(),
        })?
        - Decimal::ONE;

    tracing::debug!(maturity = input.maturity_years, %price, "priced discount bond");

    let output = DiscountBondOutput {
        price,
        holding_period_return,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Discount bond — P_T = 1/(1+r)^T",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Price an annual-pay coupon bond and classify it against face value.
pub fn price_coupon_bond(
    input: &CouponBondInput,
) -> MacroFinanceResult<ComputationOutput<CouponBondOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(input.maturity_years, input.yield_rate)?;
    if input.coupon < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "coupon".into(),
            reason: "Coupon cannot be negative".into(),
        });
    }
    if input.face_value <= Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "face_value".into(),
            reason: "Face value must be positive".into(),
        });
    }

    let coupon_flows =
        time_value::annuity_schedule(input.yield_rate, input.maturity_years, input.coupon)?;
    let pv_coupons: Money = coupon_flows.iter().map(|(_, _, pv)| *pv).sum();
    let pv_face =
        time_value::present_value(input.face_value, input.yield_rate, input.maturity_years)?;
    let price = pv_coupons + pv_face;

    let schedule = coupon_flows
        .into_iter()
        .map(|(period, discount_factor, pv)| {
            if period == input.maturity_years {
                CouponCashflow {
                    period,
                    cash_flow: input.coupon + input.face_value,
                    discount_factor,
                    present_value: pv + pv_face,
                }
            } else {
                CouponCashflow {
                    period,
                    cash_flow: input.coupon,
                    discount_factor,
                    present_value: pv,
                }
            }
        })
        .collect();

    let coupon_rate = input.coupon / input.face_value;
    let classification = classify(price, input.face_value);

    if input.coupon.is_zero() {
        warnings.push("Zero coupon: price equals the discount bond price times face value".into());
    }

    tracing::debug!(%price, ?classification, "priced coupon bond");

    let output = CouponBondOutput {
        pv_coupons,
        pv_face,
        price,
        coupon_rate,
        classification,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Coupon bond — sum of C/(1+r)^t plus F/(1+r)^T",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Classify a price against face value: premium, discount or par.
pub fn classify(price: Money, face_value: Money) -> BondClassification {
    let rounded = price.round_dp(CLASSIFICATION_DP);
    if rounded > face_value {
        BondClassification::Premium
    } else if rounded < face_value {
        BondClassification::Discount
    } else {
        BondClassification::Par
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_terms(maturity_years: u32, yield_rate: Rate) -> MacroFinanceResult<()> {
    if maturity_years == 0 {
        return Err(MacroFinanceError::InvalidInput {
            field: "maturity_years".into(),
            reason: "Maturity must be at least one year".into(),
        });
    }
    if maturity_years > MAX_MATURITY_YEARS {
        return Err(MacroFinanceError::InvalidInput {
            field: "maturity_years".into(),
            reason: format!("Maturity cannot exceed {MAX_MATURITY_YEARS} years"),
        });
    }
    if yield_rate < Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "yield_rate".into(),
            reason: "Yield cannot be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
