use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::holdings::holdings_model::{Holding, HoldingsSnapshot};
use crate::transactions::{Transaction, TransactionType};

/// Replays an ordered transaction log into per-symbol holdings as of
/// `as_of` (inclusive; `None` means the whole log).
///
/// Transactions are processed by date ascending; same-day transactions keep
/// their input order. Over-sold positions surface as negative share counts,
/// the engine does not decide the legality of short positions. Fully closed
/// symbols stay in the map so a realized return can still be reported for
/// them; callers filter `shares == 0` when they only want open positions.
pub fn reconstruct_holdings(
    transactions: &[Transaction],
    as_of: Option<NaiveDate>,
) -> HashMap<String, Holding> {
    let mut holdings: HashMap<String, Holding> = HashMap::new();
    for transaction in sorted_by_date(transactions) {
        if let Some(cutoff) = as_of {
            if transaction.date > cutoff {
                continue;
            }
        }
        apply_transaction(&mut holdings, transaction);
    }
    holdings
}

/// Replays the transaction log into one holdings snapshot per distinct
/// transaction date, for day-by-day valuation replay.
pub fn holdings_timeline(transactions: &[Transaction]) -> Vec<HoldingsSnapshot> {
    let sorted = sorted_by_date(transactions);
    debug!(
        "Building holdings timeline from {} transactions",
        sorted.len()
    );

    let mut holdings: HashMap<String, Holding> = HashMap::new();
    let mut timeline: Vec<HoldingsSnapshot> = Vec::new();

    for transaction in sorted {
        apply_transaction(&mut holdings, transaction);
        let same_date = timeline
            .last()
            .map_or(false, |snapshot| snapshot.date == transaction.date);
        if same_date {
            if let Some(snapshot) = timeline.last_mut() {
                snapshot.holdings = holdings.clone();
            }
        } else {
            timeline.push(HoldingsSnapshot {
                date: transaction.date,
                holdings: holdings.clone(),
            });
        }
    }

    timeline
}

/// Stable date sort: same-day transactions keep their input order.
fn sorted_by_date(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);
    sorted
}

fn apply_transaction(holdings: &mut HashMap<String, Holding>, transaction: &Transaction) {
    let holding = holdings
        .entry(transaction.symbol.clone())
        .or_insert_with(|| {
            let mut holding = Holding::new(&transaction.symbol, &transaction.currency);
            holding.sector = transaction.sector.clone();
            holding
        });

    let amount = transaction.shares * transaction.price;
    match transaction.transaction_type {
        TransactionType::Buy => {
            holding.shares += transaction.shares;
            holding.total_invested += amount;
        }
        TransactionType::Sell => {
            holding.shares -= transaction.shares;
            holding.total_invested -= amount;
            if holding.shares < Decimal::ZERO {
                warn!(
                    "Transaction {} over-sells {}: position is now {} shares",
                    transaction.id, transaction.symbol, holding.shares
                );
            }
        }
    }
}
