use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;
use std::path::Path;

use macro_finance_core::course::{materials, quiz, session};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Intertemporal choice
// ---------------------------------------------------------------------------

#[napi]
pub fn optimal_consumption(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::intertemporal::consumption::ConsumptionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = macro_finance_core::intertemporal::consumption::optimal_consumption(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Contingent claims
// ---------------------------------------------------------------------------

#[napi]
pub fn state_prices(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::contingent_claims::state_prices::StatePriceInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = macro_finance_core::contingent_claims::state_prices::price_state_claims(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Equilibrium
// ---------------------------------------------------------------------------

#[napi]
pub fn pareto_allocation(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::equilibrium::pareto::ParetoInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        macro_finance_core::equilibrium::pareto::pareto_allocation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Fixed income
// ---------------------------------------------------------------------------

#[napi]
pub fn discount_bond_price(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::fixed_income::bonds::DiscountBondInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        macro_finance_core::fixed_income::bonds::price_discount_bond(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn coupon_bond_price(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::fixed_income::bonds::CouponBondInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        macro_finance_core::fixed_income::bonds::price_coupon_bond(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Risky assets
// ---------------------------------------------------------------------------

#[napi]
pub fn price_risky_asset(input_json: String) -> NapiResult<String> {
    let input: macro_finance_core::risky_assets::pricing::RiskyAssetInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        macro_finance_core::risky_assets::pricing::price_risky_asset(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Course pages
// ---------------------------------------------------------------------------

#[napi]
pub fn session_page(slug: String) -> NapiResult<String> {
    let page = session::find_page(&slug).map_err(to_napi_error)?;
    serde_json::to_string(&page).map_err(to_napi_error)
}

#[napi]
pub fn session_markdown(slug: String) -> NapiResult<String> {
    let page = session::find_page(&slug).map_err(to_napi_error)?;
    Ok(page.render_markdown())
}

/// Status of the session PDF under `materials_dir`; `null` for pages without one.
#[napi]
pub fn session_material(slug: String, materials_dir: String) -> NapiResult<String> {
    let page = session::find_page(&slug).map_err(to_napi_error)?;
    let status = materials::locate_material(Path::new(&materials_dir), &page);
    serde_json::to_string(&status).map_err(to_napi_error)
}

#[napi]
pub fn quiz_questions() -> NapiResult<String> {
    serde_json::to_string(quiz::questions()).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct QuizAnswer {
    question: u8,
    /// Zero-based
    choice: usize,
}

#[napi]
pub fn grade_quiz(answer_json: String) -> NapiResult<String> {
    let answer: QuizAnswer = serde_json::from_str(&answer_json).map_err(to_napi_error)?;
    let outcome = quiz::grade(answer.question, answer.choice).map_err(to_napi_error)?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}
