/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default number of positions in top/bottom return rankings
pub const DEFAULT_RANKING_SIZE: usize = 5;

/// Default number of categories in top/bottom distribution rankings
pub const DEFAULT_DISTRIBUTION_SIZE: usize = 3;

/// Category label for positions without a sector
pub const UNKNOWN_CATEGORY: &str = "Unknown";
