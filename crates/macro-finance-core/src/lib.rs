pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "intertemporal")]
pub mod intertemporal;

#[cfg(feature = "contingent_claims")]
pub mod contingent_claims;

#[cfg(feature = "equilibrium")]
pub mod equilibrium;

#[cfg(feature = "fixed_income")]
pub mod fixed_income;

#[cfg(feature = "risky_assets")]
pub mod risky_assets;

#[cfg(feature = "course")]
pub mod course;

pub use error::MacroFinanceError;
pub use types::*;

/// Standard result type for all macro-finance operations
pub type MacroFinanceResult<T> = Result<T, MacroFinanceError>;
