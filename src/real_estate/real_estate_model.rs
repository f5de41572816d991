use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Property lifecycle: `NotRented -> Rented -> (Rented|NotRented) -> Sold`.
/// `Sold` is terminal and suppresses all forward-looking rent and
/// cash-flow projection; accrued history stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyStatus {
    NotRented,
    Rented,
    Sold,
}

/// A real-estate holding as recorded by the user. Mutated via full-record
/// update only; the engine never patches fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateProperty {
    pub id: String,
    pub purchase_price: Decimal,
    pub acquisition_date: NaiveDate,

    pub loan_amount: Option<Decimal>,
    /// Annual rate in percent (3 means 3% per year).
    pub loan_rate: Option<Decimal>,
    pub loan_duration_months: Option<u32>,
    pub loan_start_date: Option<NaiveDate>,

    pub monthly_rent: Option<Decimal>,
    pub is_rented: bool,
    pub is_sold: bool,
    pub sale_price: Option<Decimal>,
    pub sale_date: Option<NaiveDate>,

    /// Annual figures, spread evenly across months.
    pub property_tax: Decimal,
    pub housing_tax: Decimal,
    pub other_taxes: Decimal,

    pub surface_area: Option<Decimal>,
    pub repaid_capital: Decimal,
    pub total_rents_collected: Decimal,
}

impl RealEstateProperty {
    pub fn status(&self) -> PropertyStatus {
        if self.is_sold {
            PropertyStatus::Sold
        } else if self.is_rented {
            PropertyStatus::Rented
        } else {
            PropertyStatus::NotRented
        }
    }

    /// The loan terms, when the record carries all four of them. `None`
    /// means the amortization schedule is not computable and the caller
    /// must show an incomplete-data state, not a zeroed table.
    pub fn loan_terms(&self) -> Option<LoanTerms> {
        let principal = self.loan_amount?;
        let annual_rate_pct = self.loan_rate?;
        let duration_months = self.loan_duration_months?;
        let start_date = self.loan_start_date?;
        if duration_months == 0 {
            return None;
        }
        Some(LoanTerms {
            principal,
            annual_rate_pct,
            duration_months,
            start_date,
        })
    }

    /// Annual taxes spread evenly across twelve months; no seasonality.
    pub fn monthly_taxes(&self) -> Decimal {
        (self.property_tax + self.housing_tax + self.other_taxes) / Decimal::from(12)
    }
}

/// A complete fixed-rate, fixed-term loan description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub principal: Decimal,
    pub annual_rate_pct: Decimal,
    pub duration_months: u32,
    pub start_date: NaiveDate,
}

/// One month of a loan amortization schedule.
/// `payment = interest_payment + principal_payment` and
/// `remaining_principal` never increases and floors at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanAmortizationRow {
    pub date: NaiveDate,
    pub remaining_principal: Decimal,
    pub payment: Decimal,
    pub interest_payment: Decimal,
    pub principal_payment: Decimal,
}

/// Monthly cash-flow projection for an unsold property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub monthly_payment: Decimal,
    pub monthly_taxes: Decimal,
    pub cashflow: Decimal,
    /// Annualized rent over purchase price; `None` without a positive
    /// purchase price.
    pub gross_yield: Option<Decimal>,
    /// Annualized cash-flow over purchase price; same guard.
    pub net_yield: Option<Decimal>,
}
