use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time value of a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub shares: Decimal,
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub currency: String,
    pub sector: Option<String>,
}

/// One day in the portfolio value series.
///
/// Forward-filled: a date with no new transaction, dividend, or price event
/// repeats the prior day's values exactly, never an interpolation. All
/// three figures are sums over whatever currencies the inputs carry; the
/// caller normalizes currencies beforehand when it needs a single-currency
/// chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub date: NaiveDate,
    pub portfolio_value: Decimal,
    pub invested_value: Decimal,
    pub cumulative_dividends: Decimal,
}
