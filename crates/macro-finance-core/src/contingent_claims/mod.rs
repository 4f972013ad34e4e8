//! Arrow-Debreu state prices implied by consumer first-order conditions.

pub mod state_prices;
