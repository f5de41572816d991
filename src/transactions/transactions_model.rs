use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

pub const TRANSACTION_TYPE_BUY: &str = "BUY";
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// A recorded buy or sell of an instrument. Immutable once recorded;
/// corrections are modeled as new records, not in-place updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub shares: Decimal,
    /// Per-share price in `currency`.
    pub price: Decimal,
    pub date: NaiveDate,
    pub currency: String,
    pub sector: Option<String>,
    pub platform: Option<String>,
}

impl Transaction {
    /// Boundary validation. The calculators assume validated input; callers
    /// run this on rows coming in from the data-access layer.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.shares <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Transaction {}: shares must be positive, got {}",
                self.id, self.shares
            ))
            .into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Transaction {}: price must be positive, got {}",
                self.id, self.price
            ))
            .into());
        }
        Ok(())
    }
}

/// A dividend cash event. `amount` is gross; the net amount received is
/// `amount - withheld_taxes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub id: String,
    pub symbol: String,
    pub amount: Decimal,
    pub withheld_taxes: Decimal,
    pub currency: String,
    pub date: NaiveDate,
}

impl Dividend {
    /// Net cash received. A negative net (withholding exceeding the gross
    /// amount) passes through unclamped so the caller can surface the
    /// likely data-entry error.
    pub fn net_amount(&self) -> Decimal {
        self.amount - self.withheld_taxes
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.withheld_taxes < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Dividend {}: withheld taxes must be non-negative, got {}",
                self.id, self.withheld_taxes
            ))
            .into());
        }
        Ok(())
    }
}

/// A daily closing price for one symbol. Sparse: only trading days produce
/// a point; gaps are forward-filled by the consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: Decimal,
    pub currency: String,
}
