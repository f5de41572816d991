pub mod valuation_calculator;
pub mod valuation_model;


pub use valuation_calculator::{compute_current_valuation, compute_portfolio_time_series};
pub use valuation_model::{PortfolioSnapshot, PositionValuation};
