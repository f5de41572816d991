use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::timeseries::{merge_series, NamedSeries};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_merge_forward_fills_gaps() {
    let value = NamedSeries::with_points(
        "value",
        vec![
            (date(2023, 1, 2), dec!(100)),
            (date(2023, 1, 5), dec!(110)),
        ],
    );
    let invested = NamedSeries::with_points(
        "invested",
        vec![
            (date(2023, 1, 1), dec!(90)),
            (date(2023, 1, 4), dec!(95)),
        ],
    );

    let merged = merge_series(&[value, invested]);
    let dates: Vec<_> = merged.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2023, 1, 1),
            date(2023, 1, 2),
            date(2023, 1, 4),
            date(2023, 1, 5)
        ]
    );

    // Before the first "value" point: defaults to zero.
    assert_eq!(merged[0].values["value"], dec!(0));
    assert_eq!(merged[0].values["invested"], dec!(90));

    // 2023-01-04 has no "value" point; it carries the 01-02 value forward.
    assert_eq!(merged[2].values["value"], dec!(100));
    assert_eq!(merged[2].values["invested"], dec!(95));

    assert_eq!(merged[3].values["value"], dec!(110));
    assert_eq!(merged[3].values["invested"], dec!(95));
}

#[test]
fn test_merge_never_interpolates() {
    let series = NamedSeries::with_points(
        "value",
        vec![
            (date(2023, 1, 1), dec!(100)),
            (date(2023, 1, 10), dec!(200)),
        ],
    );
    let marker = NamedSeries::with_points("marker", vec![(date(2023, 1, 5), dec!(1))]);

    let merged = merge_series(&[series, marker]);
    let mid = merged.iter().find(|p| p.date == date(2023, 1, 5)).unwrap();
    // Exactly the prior value, not anything between 100 and 200.
    assert_eq!(mid.values["value"], dec!(100));
}

#[test]
fn test_merge_empty_input() {
    assert!(merge_series(&[]).is_empty());
    assert!(merge_series(&[NamedSeries::new("value")]).is_empty());
}

#[test]
fn test_merge_is_deterministic() {
    let series = vec![
        NamedSeries::with_points("a", vec![(date(2023, 2, 1), dec!(5))]),
        NamedSeries::with_points("b", vec![(date(2023, 2, 2), dec!(7))]),
    ];
    assert_eq!(merge_series(&series), merge_series(&series));
}
