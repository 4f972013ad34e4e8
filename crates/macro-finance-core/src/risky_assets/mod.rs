//! Risky cash flows priced three ways: Arrow-Debreu, risk-neutral, risk-adjusted.

pub mod pricing;
