use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A symbol's running share count and invested-capital total, derived by
/// replaying transactions.
///
/// `total_invested` increases by `shares * price` on a Buy and decreases by
/// `shares * price` on a Sell. The reduction uses the sale's own price, not
/// a weighted-average or FIFO cost basis. Documented product policy:
/// changing it would change every historical return figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub shares: Decimal,
    pub total_invested: Decimal,
    /// Listing currency, taken from the symbol's first transaction.
    pub currency: String,
    pub sector: Option<String>,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, currency: impl Into<String>) -> Self {
        Holding {
            symbol: symbol.into(),
            shares: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            currency: currency.into(),
            sector: None,
        }
    }
}

/// The full holdings map as of the close of one transaction date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsSnapshot {
    pub date: NaiveDate,
    pub holdings: HashMap<String, Holding>,
}
