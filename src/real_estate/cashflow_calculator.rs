use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::real_estate::amortization_calculator::monthly_payment;
use crate::real_estate::real_estate_model::{CashFlowSummary, RealEstateProperty};

/// Monthly cash-flow projection as of `as_of`. Returns `None` for a sold
/// property: its lifecycle is terminal and no forward projection is made.
///
/// Debt service applies only while the loan runs (from its start date to
/// start plus duration); a property without complete loan terms simply has
/// no debt service. Rent counts only while the property is rented, but the
/// gross yield is computed from the stated rent level either way since it
/// describes the property's pricing, not its occupancy.
pub fn compute_cash_flow(property: &RealEstateProperty, as_of: NaiveDate) -> Option<CashFlowSummary> {
    if property.is_sold {
        debug!("Property {} is sold; no cash-flow projection", property.id);
        return None;
    }

    let payment = match property.loan_terms() {
        Some(terms) if loan_active(&terms.start_date, terms.duration_months, as_of) => {
            monthly_payment(&terms)
        }
        _ => Decimal::ZERO,
    };

    let monthly_taxes = property.monthly_taxes();
    let stated_rent = property.monthly_rent.unwrap_or(Decimal::ZERO);
    let collected_rent = if property.is_rented {
        stated_rent
    } else {
        Decimal::ZERO
    };
    let cashflow = collected_rent - payment - monthly_taxes;

    let twelve = Decimal::from(12);
    let (gross_yield, net_yield) = if property.purchase_price > Decimal::ZERO {
        (
            Some(stated_rent * twelve / property.purchase_price * Decimal::ONE_HUNDRED),
            Some(cashflow * twelve / property.purchase_price * Decimal::ONE_HUNDRED),
        )
    } else {
        (None, None)
    };

    Some(CashFlowSummary {
        monthly_payment: payment,
        monthly_taxes,
        cashflow,
        gross_yield,
        net_yield,
    })
}

/// `sale_price - purchase_price` for a sold property; not adjusted for the
/// remaining loan or taxes.
pub fn capital_gain(property: &RealEstateProperty) -> Option<Decimal> {
    if !property.is_sold {
        return None;
    }
    Some(property.sale_price? - property.purchase_price)
}

/// Overall return on a completed sale: capital gain plus rents collected,
/// less the taxes accrued over the ownership months and the equity still
/// tied up (`(purchase_price - loan_amount) - repaid_capital`).
pub fn overall_return(property: &RealEstateProperty) -> Option<Decimal> {
    let gain = capital_gain(property)?;
    let sale_date = property.sale_date?;

    let months_owned = months_between(property.acquisition_date, sale_date);
    let taxes_paid = Decimal::from(months_owned) * property.monthly_taxes();
    let total_investment =
        property.purchase_price - property.loan_amount.unwrap_or(Decimal::ZERO);
    let unrecovered_equity = total_investment - property.repaid_capital;

    Some(gain + property.total_rents_collected - taxes_paid - unrecovered_equity)
}

/// Purchase price per surface unit, for neighborhood comparison. `None`
/// without a positive surface area.
pub fn price_per_area(property: &RealEstateProperty) -> Option<Decimal> {
    match property.surface_area {
        Some(area) if area > Decimal::ZERO => Some(property.purchase_price / area),
        _ => None,
    }
}

fn loan_active(start: &NaiveDate, duration_months: u32, as_of: NaiveDate) -> bool {
    if as_of < *start {
        return false;
    }
    match start.checked_add_months(Months::new(duration_months)) {
        Some(end) => as_of < end,
        None => true,
    }
}

/// Whole calendar months between two dates, floored at zero.
fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    months.max(0) as u32
}
