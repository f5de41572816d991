pub mod merge_calculator;

#[cfg(test)]
mod merge_calculator_tests;

pub use merge_calculator::{merge_series, MergedPoint, NamedSeries};
