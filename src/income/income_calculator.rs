use std::collections::BTreeMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{CurrencyError, Result};
use crate::income::income_model::{
    CumulativeDividendPoint, DividendBucket, Granularity, RateTable,
};
use crate::transactions::Dividend;

/// Buckets net dividend amounts (gross minus withheld taxes) by
/// (period, currency). Totals stay per-currency; nothing is converted
/// here. Output is sorted by period then currency.
pub fn aggregate_dividends(dividends: &[Dividend], granularity: Granularity) -> Vec<DividendBucket> {
    debug!(
        "Aggregating {} dividends at {:?} granularity",
        dividends.len(),
        granularity
    );

    let mut buckets: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for dividend in dividends {
        let key = (
            granularity.period_key(dividend.date),
            dividend.currency.clone(),
        );
        *buckets.entry(key).or_default() += dividend.net_amount();
    }

    buckets
        .into_iter()
        .map(|((period, currency), amount)| DividendBucket {
            period,
            currency,
            amount,
        })
        .collect()
}

/// Running net dividend total ordered by date, tracked independently per
/// currency. Emits one point per dividend event carrying that currency's
/// total so far.
pub fn cumulative_dividends(dividends: &[Dividend]) -> Vec<CumulativeDividendPoint> {
    let mut sorted: Vec<&Dividend> = dividends.iter().collect();
    sorted.sort_by_key(|d| d.date);

    let mut running: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut points = Vec::with_capacity(sorted.len());
    for dividend in sorted {
        let total = running.entry(dividend.currency.clone()).or_default();
        *total += dividend.net_amount();
        points.push(CumulativeDividendPoint {
            date: dividend.date,
            currency: dividend.currency.clone(),
            amount: *total,
        });
    }
    points
}

/// Converts per-currency buckets into `target` currency using a fixed,
/// caller-supplied rate table, then merges buckets that land on the same
/// period. A missing rate is an error, never a silent identity rate.
pub fn convert_buckets(
    buckets: &[DividendBucket],
    rates: &RateTable,
    target: &str,
) -> Result<Vec<DividendBucket>> {
    let mut merged: BTreeMap<String, Decimal> = BTreeMap::new();
    for bucket in buckets {
        let rate = rate_for(rates, &bucket.currency, target)?;
        *merged.entry(bucket.period.clone()).or_default() += bucket.amount * rate;
    }

    Ok(merged
        .into_iter()
        .map(|(period, amount)| DividendBucket {
            period,
            currency: target.to_string(),
            amount,
        })
        .collect())
}

/// Rate lookup with inverse fallback. Same-currency pairs are the identity
/// rate.
fn rate_for(rates: &RateTable, from: &str, to: &str) -> Result<Decimal> {
    if from == to {
        return Ok(Decimal::ONE);
    }

    let pair = (from.to_string(), to.to_string());
    if let Some(rate) = rates.get(&pair) {
        return Ok(*rate);
    }

    let inverse_pair = (to.to_string(), from.to_string());
    match rates.get(&inverse_pair) {
        Some(inverse) if !inverse.is_zero() => Ok(Decimal::ONE / *inverse),
        _ => {
            warn!(
                "Exchange rate missing for {}->{}; inverse lookup also failed or rate was zero",
                from, to
            );
            Err(CurrencyError::RateNotFound(format!("{}->{}", from, to)).into())
        }
    }
}
