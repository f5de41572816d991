pub mod performance_calculator;
pub mod performance_model;

#[cfg(test)]
mod performance_calculator_tests;

pub use performance_calculator::{
    aggregate_return, bottom_categories, distribution_by_category, position_returns, rank_returns,
    top_categories,
};
pub use performance_model::{
    CategoryDistribution, CategoryKey, PortfolioReturn, PositionReturn, RankedReturns,
};
