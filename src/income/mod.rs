pub mod income_calculator;
pub mod income_model;


pub use income_calculator::{aggregate_dividends, convert_buckets, cumulative_dividends};
pub use income_model::{CumulativeDividendPoint, DividendBucket, Granularity, RateTable};
