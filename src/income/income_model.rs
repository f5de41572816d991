use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bucketing granularity for dividend aggregation. Period keys are
/// "%Y-%m-%d", "%Y-%m", and "%Y" respectively, so lexicographic order is
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    pub fn period_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Day => date.format("%Y-%m-%d").to_string(),
            Granularity::Month => date.format("%Y-%m").to_string(),
            Granularity::Year => date.format("%Y").to_string(),
        }
    }
}

/// Net dividend total for one (period, currency) pair. Amounts in
/// different currencies are never summed together; conversion is a
/// separate, explicit step with a caller-supplied rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendBucket {
    pub period: String,
    pub currency: String,
    pub amount: Decimal,
}

/// One step of the running net dividend total for a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeDividendPoint {
    pub date: NaiveDate,
    pub currency: String,
    pub amount: Decimal,
}

/// Fixed, caller-supplied exchange rates keyed by (from, to) currency
/// pair. Display-time conversion only; nothing in this crate fetches or
/// refreshes rates.
pub type RateTable = HashMap<(String, String), Decimal>;
