pub mod constants;
pub mod errors;

pub mod holdings;
pub mod income;
pub mod performance;
pub mod real_estate;
pub mod timeseries;
pub mod transactions;
pub mod valuation;

pub use errors::{Error, Result};
pub use transactions::*;
