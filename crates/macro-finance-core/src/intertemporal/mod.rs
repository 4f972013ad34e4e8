//! Fisher two-period consumption/savings problem.

pub mod consumption;
