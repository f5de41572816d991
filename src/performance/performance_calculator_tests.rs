use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::performance::{
    aggregate_return, bottom_categories, distribution_by_category, position_returns, rank_returns,
    top_categories, CategoryKey, PositionReturn,
};
use crate::valuation::PositionValuation;

fn valuation(symbol: &str, shares: Decimal, invested: Decimal, value: Decimal) -> PositionValuation {
    PositionValuation {
        symbol: symbol.to_string(),
        shares,
        total_invested: invested,
        current_value: value,
        currency: "USD".to_string(),
        sector: None,
    }
}

fn position(symbol: &str, percentage: Option<Decimal>) -> PositionReturn {
    PositionReturn {
        symbol: symbol.to_string(),
        current_value: dec!(100),
        total_invested: dec!(100),
        return_value: dec!(0),
        return_percentage: percentage,
    }
}

#[test]
fn test_position_return_figures() {
    let returns = position_returns(&[valuation("AAPL", dec!(15), dec!(1700), dec!(2250))]);
    assert_eq!(returns[0].return_value, dec!(550));
    assert_eq!(
        returns[0].return_percentage.unwrap().round_dp(2),
        dec!(32.35)
    );
}

#[test]
fn test_zero_invested_yields_na_not_a_division() {
    let returns = position_returns(&[valuation("FREE", dec!(3), dec!(0), dec!(120))]);
    assert_eq!(returns[0].return_value, dec!(120));
    assert_eq!(returns[0].return_percentage, None);

    // Negative invested capital (net seller) is equally not a ratio base.
    let returns = position_returns(&[valuation("X", dec!(1), dec!(-30), dec!(10))]);
    assert_eq!(returns[0].return_percentage, None);
}

#[test]
fn test_aggregate_return_ignores_closed_positions() {
    let valuations = vec![
        valuation("A", dec!(10), dec!(1000), dec!(1100)),
        valuation("B", dec!(5), dec!(500), dec!(400)),
        // Closed out; must not distort the aggregate ratio.
        valuation("C", dec!(0), dec!(-30), dec!(-30)),
    ];

    let aggregate = aggregate_return(&valuations);
    assert_eq!(aggregate.current_value, dec!(1500));
    assert_eq!(aggregate.total_invested, dec!(1500));
    assert_eq!(aggregate.return_value, dec!(0));
    assert_eq!(aggregate.return_percentage, Some(dec!(0)));
}

#[test]
fn test_ranking_preserves_input_order_on_ties() {
    let positions = vec![
        position("A", Some(dec!(10))),
        position("B", Some(dec!(10))),
        position("C", Some(dec!(5))),
    ];

    let ranked = rank_returns(&positions, 3);
    let top: Vec<_> = ranked.top.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(top, vec!["A", "B", "C"]);

    let bottom: Vec<_> = ranked.bottom.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(bottom, vec!["C", "A", "B"]);
}

#[test]
fn test_ranking_places_na_last() {
    let positions = vec![
        position("NA1", None),
        position("UP", Some(dec!(8))),
        position("DOWN", Some(dec!(-3))),
    ];

    let ranked = rank_returns(&positions, 3);
    let top: Vec<_> = ranked.top.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(top, vec!["UP", "DOWN", "NA1"]);

    let bottom: Vec<_> = ranked.bottom.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(bottom, vec!["DOWN", "UP", "NA1"]);
}

#[test]
fn test_ranking_truncates_to_n() {
    let positions = vec![
        position("A", Some(dec!(1))),
        position("B", Some(dec!(2))),
        position("C", Some(dec!(3))),
    ];
    let ranked = rank_returns(&positions, 2);
    assert_eq!(ranked.top.len(), 2);
    assert_eq!(ranked.bottom.len(), 2);
}

#[test]
fn test_distribution_by_currency() {
    let mut eur = valuation("MC.PA", dec!(1), dec!(600), dec!(750));
    eur.currency = "EUR".to_string();
    let valuations = vec![
        valuation("AAPL", dec!(10), dec!(1000), dec!(1500)),
        valuation("MSFT", dec!(5), dec!(1000), dec!(750)),
        eur,
    ];

    let distribution = distribution_by_category(&valuations, CategoryKey::Currency);
    assert_eq!(distribution.len(), 2);
    assert_eq!(distribution[0].name, "USD");
    assert_eq!(distribution[0].value, dec!(2250));
    assert_eq!(distribution[0].percentage, dec!(75));
    assert_eq!(distribution[1].name, "EUR");
    assert_eq!(distribution[1].percentage, dec!(25));
}

#[test]
fn test_distribution_missing_sector_buckets_as_unknown() {
    let mut tech = valuation("AAPL", dec!(1), dec!(100), dec!(100));
    tech.sector = Some("Technology".to_string());
    let bare = valuation("MYST", dec!(1), dec!(100), dec!(300));

    let distribution = distribution_by_category(&[tech, bare], CategoryKey::Sector);
    assert_eq!(distribution[0].name, "Unknown");
    assert_eq!(distribution[0].percentage, dec!(75));
    assert_eq!(distribution[1].name, "Technology");
}

#[test]
fn test_distribution_zero_total_yields_zero_percentages() {
    let valuations = vec![
        valuation("A", dec!(1), dec!(0), dec!(0)),
        valuation("B", dec!(1), dec!(0), dec!(0)),
    ];

    let distribution = distribution_by_category(&valuations, CategoryKey::Symbol);
    assert!(distribution.iter().all(|d| d.percentage == dec!(0)));
}

#[test]
fn test_top_and_bottom_categories() {
    let valuations = vec![
        valuation("A", dec!(1), dec!(0), dec!(500)),
        valuation("B", dec!(1), dec!(0), dec!(300)),
        valuation("C", dec!(1), dec!(0), dec!(150)),
        valuation("D", dec!(1), dec!(0), dec!(50)),
    ];

    let distribution = distribution_by_category(&valuations, CategoryKey::Symbol);
    let top: Vec<_> = top_categories(&distribution, 3)
        .iter()
        .map(|d| d.name.clone())
        .collect();
    assert_eq!(top, vec!["A", "B", "C"]);

    let bottom: Vec<_> = bottom_categories(&distribution, 3)
        .iter()
        .map(|d| d.name.clone())
        .collect();
    assert_eq!(bottom, vec!["D", "C", "B"]);
}
