use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named, date-keyed numeric series. The `BTreeMap` keeps points sorted
/// by date, which the merge relies on for its single forward pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSeries {
    pub name: String,
    pub points: BTreeMap<NaiveDate, Decimal>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>) -> Self {
        NamedSeries {
            name: name.into(),
            points: BTreeMap::new(),
        }
    }

    pub fn with_points(
        name: impl Into<String>,
        points: impl IntoIterator<Item = (NaiveDate, Decimal)>,
    ) -> Self {
        NamedSeries {
            name: name.into(),
            points: points.into_iter().collect(),
        }
    }
}

/// One merged record: every input series' forward-filled value on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPoint {
    pub date: NaiveDate,
    pub values: HashMap<String, Decimal>,
}

/// Merges N date-keyed series into one aligned sequence, one record per
/// date in the union of all dates (ascending). Each record carries every
/// series' value forward-filled from its most recent point at or before
/// the date, and `Decimal::ZERO` before a series' first point. Values are
/// never interpolated.
///
/// Single pass over the sorted union with one cursor per series, so the
/// whole merge is O(total points), not a per-date scan.
pub fn merge_series(series: &[NamedSeries]) -> Vec<MergedPoint> {
    let all_dates: BTreeSet<NaiveDate> = series
        .iter()
        .flat_map(|s| s.points.keys().copied())
        .collect();

    debug!(
        "Merging {} series across {} distinct dates",
        series.len(),
        all_dates.len()
    );

    let mut cursors: Vec<_> = series.iter().map(|s| s.points.iter().peekable()).collect();
    let mut last_values: Vec<Decimal> = vec![Decimal::ZERO; series.len()];

    let mut merged = Vec::with_capacity(all_dates.len());
    for date in all_dates {
        for (idx, cursor) in cursors.iter_mut().enumerate() {
            while let Some((point_date, value)) = cursor.peek() {
                if **point_date > date {
                    break;
                }
                last_values[idx] = **value;
                cursor.next();
            }
        }

        let values = series
            .iter()
            .zip(&last_values)
            .map(|(s, value)| (s.name.clone(), *value))
            .collect();
        merged.push(MergedPoint { date, values });
    }

    merged
}
