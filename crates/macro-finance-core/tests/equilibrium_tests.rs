use macro_finance_core::equilibrium::pareto::{self, ParetoInput, PARETO_TOLERANCE};
use rust_decimal_macros::dec;

#[test]
fn test_symmetric_economies_are_pareto_optimal() {
    for weight in [dec!(0.5), dec!(1.0), dec!(1.7), dec!(2.0)] {
        for (endowment_a, endowment_b) in [(dec!(10), dec!(10)), (dec!(6), dec!(14)), (dec!(15), dec!(5))] {
            let input = ParetoInput {
                consumer1_good_a: endowment_a / dec!(2),
                weight_consumer1: weight,
                weight_consumer2: weight,
                endowment_a,
                endowment_b,
            };
            let out = pareto::pareto_allocation(&input).unwrap().result;
            assert_eq!(out.consumer1_good_b, endowment_b / dec!(2));
            assert_eq!(out.mrs_consumer1, out.mrs_consumer2);
            assert!(out.is_pareto_optimal);
        }
    }
}

#[test]
fn test_gap_reported_against_tolerance() {
    let input = ParetoInput {
        consumer1_good_a: dec!(6),
        weight_consumer1: dec!(1),
        weight_consumer2: dec!(1),
        endowment_a: dec!(10),
        endowment_b: dec!(10),
    };
    let result = pareto::pareto_allocation(&input).unwrap();
    // b1 = 10 * 4 / 10 = 4, MRS_1 = 4/6, MRS_2 = 6/4
    assert_eq!(result.result.consumer1_good_b, dec!(4));
    assert!(result.result.mrs_gap >= PARETO_TOLERANCE);
    assert!(!result.result.is_pareto_optimal);
    assert!(result.warnings[0].starts_with("Not Pareto optimal"));
}

#[test]
fn test_consumer2_holding_everything_fails_loudly() {
    let input = ParetoInput {
        consumer1_good_a: dec!(10),
        weight_consumer1: dec!(1),
        weight_consumer2: dec!(1),
        endowment_a: dec!(10),
        endowment_b: dec!(10),
    };
    assert!(pareto::pareto_allocation(&input).is_err());
}
