use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::holdings::Holding;
use crate::transactions::{Dividend, PricePoint, Transaction, TransactionType};
use crate::valuation::valuation_model::{PortfolioSnapshot, PositionValuation};

/// Values every holding at the latest known close at or before `as_of`.
///
/// A position with no price at or before `as_of` is valued at its invested
/// capital, i.e. an assumed unrealized return of zero. Reporting a zero
/// value instead would show a misleading 100% loss on stale data; the
/// fallback is warn-logged so the caller can surface staleness.
///
/// Output is ordered by symbol so identical inputs produce identical
/// output.
pub fn compute_current_valuation(
    holdings: &HashMap<String, Holding>,
    prices: &[PricePoint],
    as_of: NaiveDate,
) -> Vec<PositionValuation> {
    debug!(
        "Valuing {} holdings against {} price points as of {}",
        holdings.len(),
        prices.len(),
        as_of
    );

    // Latest close at or before as_of, per symbol.
    let mut latest: HashMap<&str, (NaiveDate, Decimal)> = HashMap::new();
    for price in prices {
        if price.date > as_of {
            continue;
        }
        latest
            .entry(price.symbol.as_str())
            .and_modify(|known| {
                if price.date > known.0 {
                    *known = (price.date, price.close);
                }
            })
            .or_insert((price.date, price.close));
    }

    let mut valuations: Vec<PositionValuation> = holdings
        .values()
        .map(|holding| {
            let current_value = match latest.get(holding.symbol.as_str()) {
                Some((_, close)) => holding.shares * *close,
                None => {
                    warn!(
                        "No price for {} at or before {}; valuing at invested capital",
                        holding.symbol, as_of
                    );
                    holding.total_invested
                }
            };
            PositionValuation {
                symbol: holding.symbol.clone(),
                shares: holding.shares,
                total_invested: holding.total_invested,
                current_value,
                currency: holding.currency.clone(),
                sector: holding.sector.clone(),
            }
        })
        .collect();
    valuations.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    valuations
}

/// Builds the day-by-day portfolio value series from transactions,
/// dividends, and sparse daily prices.
///
/// Walks the sorted union of all event dates, carrying the last known
/// price per symbol forward. On each date
/// `portfolio_value = Σ shares * last_known_price` over symbols with a
/// positive share count (a held symbol with no known price yet counts at
/// its invested capital, same policy as the point-in-time case).
/// Snapshots where value, invested capital, and cumulative dividends are
/// all zero are suppressed.
pub fn compute_portfolio_time_series(
    transactions: &[Transaction],
    dividends: &[Dividend],
    prices: &[PricePoint],
) -> Vec<PortfolioSnapshot> {
    // Per-date event buckets. Transactions keep input order within a date.
    let mut transactions_by_date: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for transaction in transactions {
        transactions_by_date
            .entry(transaction.date)
            .or_default()
            .push(transaction);
    }
    let mut dividends_by_date: BTreeMap<NaiveDate, Vec<&Dividend>> = BTreeMap::new();
    for dividend in dividends {
        dividends_by_date
            .entry(dividend.date)
            .or_default()
            .push(dividend);
    }
    let mut prices_by_date: BTreeMap<NaiveDate, Vec<&PricePoint>> = BTreeMap::new();
    for price in prices {
        prices_by_date.entry(price.date).or_default().push(price);
    }

    let all_dates: BTreeSet<NaiveDate> = transactions_by_date
        .keys()
        .chain(dividends_by_date.keys())
        .chain(prices_by_date.keys())
        .copied()
        .collect();

    debug!(
        "Computing portfolio time series across {} event dates",
        all_dates.len()
    );

    let mut shares: HashMap<String, Decimal> = HashMap::new();
    let mut invested: HashMap<String, Decimal> = HashMap::new();
    let mut last_price: HashMap<String, Decimal> = HashMap::new();
    let mut invested_value = Decimal::ZERO;
    let mut cumulative_dividends = Decimal::ZERO;

    let mut series = Vec::with_capacity(all_dates.len());
    for date in all_dates {
        if let Some(todays) = transactions_by_date.get(&date) {
            for transaction in todays {
                let amount = transaction.shares * transaction.price;
                let symbol_shares = shares.entry(transaction.symbol.clone()).or_default();
                let symbol_invested = invested.entry(transaction.symbol.clone()).or_default();
                match transaction.transaction_type {
                    TransactionType::Buy => {
                        *symbol_shares += transaction.shares;
                        *symbol_invested += amount;
                        invested_value += amount;
                    }
                    TransactionType::Sell => {
                        *symbol_shares -= transaction.shares;
                        *symbol_invested -= amount;
                        invested_value -= amount;
                    }
                }
            }
        }

        if let Some(todays) = dividends_by_date.get(&date) {
            for dividend in todays {
                cumulative_dividends += dividend.net_amount();
            }
        }

        if let Some(todays) = prices_by_date.get(&date) {
            for price in todays {
                last_price.insert(price.symbol.clone(), price.close);
            }
        }

        let mut portfolio_value = Decimal::ZERO;
        for (symbol, count) in &shares {
            if *count <= Decimal::ZERO {
                continue;
            }
            portfolio_value += match last_price.get(symbol) {
                Some(close) => *count * *close,
                None => invested.get(symbol).copied().unwrap_or(Decimal::ZERO),
            };
        }

        if portfolio_value == Decimal::ZERO
            && invested_value == Decimal::ZERO
            && cumulative_dividends == Decimal::ZERO
        {
            continue;
        }

        series.push(PortfolioSnapshot {
            date,
            portfolio_value,
            invested_value,
            cumulative_dividends,
        });
    }

    series
}
