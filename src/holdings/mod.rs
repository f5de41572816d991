pub mod holdings_calculator;
pub mod holdings_model;


pub use holdings_calculator::{holdings_timeline, reconstruct_holdings};
pub use holdings_model::{Holding, HoldingsSnapshot};
