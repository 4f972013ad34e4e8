//! Two-consumer exchange economy and Pareto optimality.

pub mod pareto;
