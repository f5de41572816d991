use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Absolute and percentage return of one position.
///
/// `return_percentage` is `None` when the invested capital is zero or
/// negative; the UI must be able to tell "no return" apart from "cannot
/// compute".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReturn {
    pub symbol: String,
    pub current_value: Decimal,
    pub total_invested: Decimal,
    pub return_value: Decimal,
    pub return_percentage: Option<Decimal>,
}

/// Aggregate return over all open positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReturn {
    pub current_value: Decimal,
    pub total_invested: Decimal,
    pub return_value: Decimal,
    pub return_percentage: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedReturns {
    pub top: Vec<PositionReturn>,
    pub bottom: Vec<PositionReturn>,
}

/// Which position attribute a distribution groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    Currency,
    Sector,
    Symbol,
}

/// One slice of a category breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDistribution {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}
