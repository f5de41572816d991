pub mod amortization_calculator;
pub mod cashflow_calculator;
pub mod real_estate_model;


pub use amortization_calculator::{generate_amortization_schedule, monthly_payment};
pub use cashflow_calculator::{capital_gain, compute_cash_flow, overall_return, price_per_area};
pub use real_estate_model::{
    CashFlowSummary, LoanAmortizationRow, LoanTerms, PropertyStatus, RealEstateProperty,
};
