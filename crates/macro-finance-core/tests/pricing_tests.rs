use macro_finance_core::contingent_claims::state_prices::{self, StatePriceInput};
use macro_finance_core::risky_assets::pricing::{self, RiskyAssetInput, StatePriceSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Contingent claims
// ===========================================================================

#[test]
fn test_state_price_ratio_decomposition() {
    let tolerance = dec!(0.0000000001);
    for pi in [dec!(0.3), dec!(0.45), dec!(0.6), dec!(0.9)] {
        for (good, bad) in [(dec!(120), dec!(80)), (dec!(50), dec!(150)), (dec!(200), dec!(30))] {
            let input = StatePriceInput {
                probability_good: pi,
                discount_factor: dec!(0.95),
                consumption_good: good,
                consumption_bad: bad,
                consumption_today: dec!(100),
            };
            let out = state_prices::price_state_claims(&input).unwrap().result;
            let expected = (pi / (Decimal::ONE - pi)) * (bad / good);
            assert!(
                (out.state_price_ratio - expected).abs() < tolerance,
                "pi={pi} c=({good},{bad})"
            );
            assert!(
                (out.state_price_ratio - out.probability_ratio * out.marginal_utility_ratio).abs()
                    < tolerance
            );
        }
    }
}

#[test]
fn test_risk_free_rate_consistent_with_bond_price() {
    let input = StatePriceInput {
        probability_good: dec!(0.7),
        discount_factor: dec!(0.97),
        consumption_good: dec!(110),
        consumption_bad: dec!(90),
        consumption_today: dec!(100),
    };
    let out = state_prices::price_state_claims(&input).unwrap().result;
    let implied = Decimal::ONE / (Decimal::ONE + out.risk_free_rate);
    assert!((implied - out.risk_free_bond_price).abs() < dec!(0.0000000001));
}

// ===========================================================================
// Risky assets
// ===========================================================================

fn session_risky_asset() -> RiskyAssetInput {
    RiskyAssetInput {
        payoff_good: dec!(150),
        payoff_bad: dec!(50),
        probability_good: dec!(0.6),
        risk_free_rate: dec!(0.03),
        risk_adjustment: dec!(5),
        state_prices: StatePriceSource::default(),
    }
}

#[test]
fn test_risky_asset_session_example() {
    let out = pricing::price_risky_asset(&session_risky_asset()).unwrap().result;
    assert_eq!(out.state_price_good, dec!(0.45));
    assert_eq!(out.state_price_bad, dec!(0.52));
    assert_eq!(out.price_arrow_debreu, dec!(93.5));
    assert!((out.price_risk_neutral - dec!(93.58)).abs() < dec!(0.01));
    assert!((out.price_risk_adjusted - dec!(101.94)).abs() < dec!(0.01));
}

#[test]
fn test_risky_asset_json_defaults() {
    let json = r#"{
        "payoff_good": 150,
        "payoff_bad": 50,
        "probability_good": 0.6,
        "risk_free_rate": 0.03
    }"#;
    let input: RiskyAssetInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.risk_adjustment, dec!(5));
    let out = pricing::price_risky_asset(&input).unwrap().result;
    assert_eq!(out.price_arrow_debreu, dec!(93.5));
}

#[test]
fn test_risky_asset_with_derived_state_prices_from_json() {
    let json = r#"{
        "payoff_good": "150",
        "payoff_bad": "50",
        "probability_good": "0.6",
        "risk_free_rate": "0.03",
        "state_prices": {
            "source": "derived",
            "probability_good": "0.6",
            "discount_factor": "0.95",
            "consumption_good": "120",
            "consumption_bad": "80"
        }
    }"#;
    let input: RiskyAssetInput = serde_json::from_str(json).unwrap();
    let out = pricing::price_risky_asset(&input).unwrap().result;
    // q_G = q_B = 0.475 -> equal risk-neutral weights
    assert!((out.risk_neutral_prob_good - dec!(0.5)).abs() < dec!(0.0000000001));
}

#[test]
fn test_risk_free_payoff_priced_identically_by_ad_and_rn() {
    // q_G + q_B = 1/(1+r_f) exactly when r_f = 0 and prices sum to one
    let input = RiskyAssetInput {
        payoff_good: dec!(100),
        payoff_bad: dec!(100),
        risk_free_rate: dec!(0),
        state_prices: StatePriceSource::Given {
            good: dec!(0.55),
            bad: dec!(0.45),
        },
        ..session_risky_asset()
    };
    let out = pricing::price_risky_asset(&input).unwrap().result;
    assert_eq!(out.price_arrow_debreu, dec!(100));
    assert_eq!(out.price_risk_neutral, dec!(100));
}
