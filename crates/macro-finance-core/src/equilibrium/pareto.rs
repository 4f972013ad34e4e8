//! Pareto allocations in a two-consumer, two-good exchange economy.
//!
//! Consumer 1 has utility `ln(a1) + alpha * ln(b1)` and consumer 2 has
//! `ln(a2) + beta * ln(b2)`. Given consumer 1's holding of good A, the good A
//! resource constraint fixes consumer 2's holding, and good B is split so that
//! `b1 / (alpha * a1) = b2 / (beta * a2)` with `b1 + b2 = Y_B`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MacroFinanceError;
use crate::types::{with_metadata, ComputationOutput, Factor, Money};
use crate::MacroFinanceResult;

/// Maximum |MRS_1 - MRS_2| for an allocation to count as Pareto optimal.
pub const PARETO_TOLERANCE: Decimal = dec!(0.01);

/// Input parameters for the Pareto allocation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParetoInput {
    /// Consumer 1's consumption of good A, within [0, endowment_a]
    pub consumer1_good_a: Money,
    /// Consumer 1's preference weight on good B (alpha)
    pub weight_consumer1: Factor,
    /// Consumer 2's preference weight on good B (beta)
    pub weight_consumer2: Factor,
    /// Total endowment of good A
    pub endowment_a: Money,
    /// Total endowment of good B
    pub endowment_b: Money,
}

/// One consumer's row in the allocation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerAllocation {
    pub consumer: String,
    pub good_a: Money,
    pub good_b: Money,
    pub mrs: Decimal,
}

/// Output of the Pareto allocation computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParetoOutput {
    pub consumer2_good_a: Money,
    pub consumer1_good_b: Money,
    pub consumer2_good_b: Money,
    /// b1 / (alpha * a1)
    pub mrs_consumer1: Decimal,
    /// b2 / (beta * a2)
    pub mrs_consumer2: Decimal,
    /// |MRS_1 - MRS_2|
    pub mrs_gap: Decimal,
    pub is_pareto_optimal: bool,
    pub allocations: Vec<ConsumerAllocation>,
}

/// Complete the allocation from consumer 1's good A holding and test optimality.
pub fn pareto_allocation(
    input: &ParetoInput,
) -> MacroFinanceResult<ComputationOutput<ParetoOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let alpha = input.weight_consumer1;
    let beta = input.weight_consumer2;
    let a1 = input.consumer1_good_a;

    // Resource constraint for good A
    let a2 = input.endowment_a - a1;

    let weighted_1 = alpha * a1;
    let weighted_2 = beta * a2;
    if weighted_1.is_zero() {
        return Err(MacroFinanceError::DivisionByZero {
            context: "consumer 1 MRS with zero good A consumption".into(),
        });
    }
    if weighted_2.is_zero() {
        return Err(MacroFinanceError::DivisionByZero {
            context: "consumer 2 MRS with zero good A consumption".into(),
        });
    }

    let b1 = input.endowment_b * weighted_2 / (weighted_1 + weighted_2);
    let b2 = input.endowment_b - b1;

    let mrs_consumer1 = b1 / weighted_1;
    let mrs_consumer2 = b2 / weighted_2;
    let mrs_gap = (mrs_consumer1 - mrs_consumer2).abs();
    let is_pareto_optimal = mrs_gap < PARETO_TOLERANCE;

    if !is_pareto_optimal {
        warnings.push(format!(
            "Not Pareto optimal: MRS_1 = {:.3} differs from MRS_2 = {:.3}; gains from trade exist",
            mrs_consumer1, mrs_consumer2
        ));
    }

    tracing::debug!(%mrs_consumer1, %mrs_consumer2, is_pareto_optimal, "checked allocation");

    let allocations = vec![
        ConsumerAllocation {
            consumer: "Consumer 1".into(),
            good_a: a1,
            good_b: b1,
            mrs: mrs_consumer1,
        },
        ConsumerAllocation {
            consumer: "Consumer 2".into(),
            good_a: a2,
            good_b: b2,
            mrs: mrs_consumer2,
        },
    ];

    let output = ParetoOutput {
        consumer2_good_a: a2,
        consumer1_good_b: b1,
        consumer2_good_b: b2,
        mrs_consumer1,
        mrs_consumer2,
        mrs_gap,
        is_pareto_optimal,
        allocations,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Two-consumer exchange economy — log utility, Pareto optimal iff MRS_1 = MRS_2",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate_input(input: &ParetoInput) -> MacroFinanceResult<()> {
    if input.weight_consumer1 <= Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "weight_consumer1".into(),
            reason: "Preference weight must be positive".into(),
        });
    }
    if input.weight_consumer2 <= Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "weight_consumer2".into(),
            reason: "Preference weight must be positive".into(),
        });
    }
    if input.endowment_a <= Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "endowment_a".into(),
            reason: "Endowment must be positive".into(),
        });
    }
    if input.endowment_b <= Decimal::ZERO {
        return Err(MacroFinanceError::InvalidInput {
            field: "endowment_b".into(),
            reason: "Endowment must be positive".into(),
        });
    }
    if input.consumer1_good_a < Decimal::ZERO || input.consumer1_good_a > input.endowment_a {
        return Err(MacroFinanceError::InvalidInput {
            field: "consumer1_good_a".into(),
            reason: "Consumption of good A must lie within [0, endowment_a]".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn session_default() -> ParetoInput {
        ParetoInput {
            consumer1_good_a: dec!(5),
            weight_consumer1: dec!(1),
            weight_consumer2: dec!(1),
            endowment_a: dec!(10),
            endowment_b: dec!(10),
        }
    }

    #[test]
    fn test_symmetric_split_is_optimal() {
        let out = pareto_allocation(&session_default()).unwrap().result;
        assert_eq!(out.consumer1_good_b, dec!(5));
        assert_eq!(out.consumer2_good_b, dec!(5));
        assert_eq!(out.mrs_consumer1, dec!(1));
        assert_eq!(out.mrs_consumer2, dec!(1));
        assert!(out.is_pareto_optimal);
    }

    #[test]
    fn test_allocation_table_rows() {
        let out = pareto_allocation(&session_default()).unwrap().result;
        assert_eq!(
            out.allocations[1],
            ConsumerAllocation {
                consumer: "Consumer 2".into(),
                good_a: dec!(5),
                good_b: dec!(5),
                mrs: dec!(1),
            }
        );
    }

    #[test]
    fn test_lopsided_split_not_optimal() {
        let input = ParetoInput {
            consumer1_good_a: dec!(8),
            ..session_default()
        };
        let result = pareto_allocation(&input).unwrap();
        assert!(!result.result.is_pareto_optimal);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_resources_exhausted() {
        let input = ParetoInput {
            consumer1_good_a: dec!(3.5),
            weight_consumer1: dec!(1.4),
            weight_consumer2: dec!(0.7),
            endowment_a: dec!(12),
            endowment_b: dec!(9),
        };
        let out = pareto_allocation(&input).unwrap().result;
        assert_eq!(dec!(3.5) + out.consumer2_good_a, dec!(12));
        assert_eq!(out.consumer1_good_b + out.consumer2_good_b, dec!(9));
    }

    #[test]
    fn test_zero_good_a_fails_loudly() {
        let input = ParetoInput {
            consumer1_good_a: dec!(0),
            ..session_default()
        };
        assert!(matches!(
            pareto_allocation(&input),
            Err(MacroFinanceError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_consumption_above_endowment_rejected() {
        let input = ParetoInput {
            consumer1_good_a: dec!(11),
            ..session_default()
        };
        assert!(matches!(
            pareto_allocation(&input),
            Err(MacroFinanceError::InvalidInput { .. })
        ));
    }
}
