use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::constants::UNKNOWN_CATEGORY;
use crate::performance::performance_model::{
    CategoryDistribution, CategoryKey, PortfolioReturn, PositionReturn, RankedReturns,
};
use crate::valuation::PositionValuation;

/// Derives the per-position return figures.
pub fn position_returns(valuations: &[PositionValuation]) -> Vec<PositionReturn> {
    valuations
        .iter()
        .map(|valuation| {
            let return_value = valuation.current_value - valuation.total_invested;
            PositionReturn {
                symbol: valuation.symbol.clone(),
                current_value: valuation.current_value,
                total_invested: valuation.total_invested,
                return_value,
                return_percentage: guarded_percentage(return_value, valuation.total_invested),
            }
        })
        .collect()
}

/// Aggregate return across all positions with a positive share count.
pub fn aggregate_return(valuations: &[PositionValuation]) -> PortfolioReturn {
    let mut current_value = Decimal::zero();
    let mut total_invested = Decimal::zero();
    for valuation in valuations {
        if valuation.shares <= Decimal::ZERO {
            continue;
        }
        current_value += valuation.current_value;
        total_invested += valuation.total_invested;
    }

    let return_value = current_value - total_invested;
    PortfolioReturn {
        current_value,
        total_invested,
        return_value,
        return_percentage: guarded_percentage(return_value, total_invested),
    }
}

/// Top-N and bottom-N positions by percentage return.
///
/// Both sorts are stable, so ties keep their input order. Positions whose
/// percentage is not computable sort after every real percentage in both
/// lists; they are reported rather than dropped so a fully-closed position
/// still shows up.
pub fn rank_returns(positions: &[PositionReturn], n: usize) -> RankedReturns {
    debug!("Ranking {} positions, n = {}", positions.len(), n);

    let mut top: Vec<PositionReturn> = positions.to_vec();
    top.sort_by(|a, b| compare_desc(a.return_percentage, b.return_percentage));
    top.truncate(n);

    let mut bottom: Vec<PositionReturn> = positions.to_vec();
    bottom.sort_by(|a, b| compare_asc(a.return_percentage, b.return_percentage));
    bottom.truncate(n);

    RankedReturns { top, bottom }
}

/// Groups positions by the selected category, sums current value per group
/// and expresses each group as a percentage of the total. When the total
/// is zero every percentage is zero. Output is sorted by value descending;
/// the sort is stable over first-appearance order.
pub fn distribution_by_category(
    positions: &[PositionValuation],
    category: CategoryKey,
) -> Vec<CategoryDistribution> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    let mut grand_total = Decimal::zero();

    for position in positions {
        let name = category_name(position, category);
        if !totals.contains_key(&name) {
            order.push(name.clone());
        }
        *totals.entry(name).or_default() += position.current_value;
        grand_total += position.current_value;
    }

    let mut distribution: Vec<CategoryDistribution> = order
        .into_iter()
        .map(|name| {
            let value = totals[&name];
            let percentage = if grand_total.is_zero() {
                Decimal::zero()
            } else {
                value / grand_total * Decimal::ONE_HUNDRED
            };
            CategoryDistribution {
                name,
                value,
                percentage,
            }
        })
        .collect();
    distribution.sort_by(|a, b| b.value.cmp(&a.value));
    distribution
}

/// First `n` categories by percentage, descending.
pub fn top_categories(distribution: &[CategoryDistribution], n: usize) -> Vec<CategoryDistribution> {
    let mut sorted = distribution.to_vec();
    sorted.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    sorted.truncate(n);
    sorted
}

/// First `n` categories by percentage, ascending.
pub fn bottom_categories(
    distribution: &[CategoryDistribution],
    n: usize,
) -> Vec<CategoryDistribution> {
    let mut sorted = distribution.to_vec();
    sorted.sort_by(|a, b| a.percentage.cmp(&b.percentage));
    sorted.truncate(n);
    sorted
}

/// `value / invested * 100`, or `None` when the denominator is not
/// positive. Guarded before dividing; never NaN, infinity, or a panic.
fn guarded_percentage(return_value: Decimal, total_invested: Decimal) -> Option<Decimal> {
    if total_invested <= Decimal::ZERO {
        return None;
    }
    Some(return_value / total_invested * Decimal::ONE_HUNDRED)
}

fn compare_desc(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        // Not-computable entries go after every real percentage.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_asc(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn category_name(position: &PositionValuation, category: CategoryKey) -> String {
    match category {
        CategoryKey::Currency => position.currency.clone(),
        CategoryKey::Sector => position
            .sector
            .clone()
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        CategoryKey::Symbol => position.symbol.clone(),
    }
}
