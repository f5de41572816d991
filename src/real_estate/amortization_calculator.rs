use chrono::Months;
use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::real_estate::real_estate_model::{LoanAmortizationRow, LoanTerms};

/// Fixed monthly annuity payment:
/// `principal * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
/// A zero-rate loan degenerates to straight-line `principal / n`.
pub fn monthly_payment(terms: &LoanTerms) -> Decimal {
    let n = Decimal::from(terms.duration_months);
    let rate = monthly_rate(terms);
    if rate == Decimal::ZERO {
        return terms.principal / n;
    }
    let factor = (Decimal::ONE + rate).powi(terms.duration_months as i64);
    terms.principal * rate * factor / (factor - Decimal::ONE)
}

/// Generates up to `months` rows of the amortization schedule, capped at
/// the loan term. Each row carries the principal remaining after that
/// month's payment; the balance floors at zero on the final payment.
pub fn generate_amortization_schedule(terms: &LoanTerms, months: u32) -> Vec<LoanAmortizationRow> {
    let row_count = terms.duration_months.min(months);
    debug!(
        "Generating {} amortization rows for a {}-month loan of {}",
        row_count, terms.duration_months, terms.principal
    );

    let rate = monthly_rate(terms);
    let payment = monthly_payment(terms);

    let mut remaining = terms.principal;
    let mut schedule = Vec::with_capacity(row_count as usize);
    for i in 0..row_count {
        let date = terms
            .start_date
            .checked_add_months(Months::new(i))
            .unwrap_or(terms.start_date);
        let interest_payment = remaining * rate;
        let principal_payment = payment - interest_payment;
        remaining = (remaining - principal_payment).max(Decimal::ZERO);
        schedule.push(LoanAmortizationRow {
            date,
            remaining_principal: remaining,
            payment,
            interest_payment,
            principal_payment,
        });
    }
    schedule
}

fn monthly_rate(terms: &LoanTerms) -> Decimal {
    terms.annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12)
}
