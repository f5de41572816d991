use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::errors::Error;
use crate::transactions::{Dividend, Transaction, TransactionType};

fn sample_transaction() -> Transaction {
    Transaction {
        id: "1".to_string(),
        symbol: "AAPL".to_string(),
        transaction_type: TransactionType::Buy,
        shares: dec!(10),
        price: dec!(100),
        date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        currency: "USD".to_string(),
        sector: Some("Technology".to_string()),
        platform: None,
    }
}

#[test]
fn test_transaction_type_round_trip() {
    assert_eq!(TransactionType::Buy.as_str(), "BUY");
    assert_eq!(TransactionType::from_str("SELL"), Ok(TransactionType::Sell));
    assert!(TransactionType::from_str("SPLIT").is_err());
}

#[test]
fn test_valid_transaction_passes() {
    assert!(sample_transaction().validate().is_ok());
}

#[test]
fn test_transaction_rejects_non_positive_amounts() {
    let mut tx = sample_transaction();
    tx.shares = dec!(0);
    assert!(matches!(tx.validate(), Err(Error::Validation(_))));

    let mut tx = sample_transaction();
    tx.price = dec!(-5);
    assert!(matches!(tx.validate(), Err(Error::Validation(_))));
}

#[test]
fn test_transaction_rejects_blank_symbol() {
    let mut tx = sample_transaction();
    tx.symbol = "  ".to_string();
    assert!(tx.validate().is_err());
}

#[test]
fn test_dividend_net_amount() {
    let dividend = Dividend {
        id: "d1".to_string(),
        symbol: "AAPL".to_string(),
        amount: dec!(100),
        withheld_taxes: dec!(15),
        currency: "USD".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
    };
    assert_eq!(dividend.net_amount(), dec!(85));
    assert!(dividend.validate().is_ok());
}

#[test]
fn test_dividend_net_amount_can_go_negative() {
    // Withholding above the gross amount is passed through, not clamped.
    let dividend = Dividend {
        id: "d2".to_string(),
        symbol: "AAPL".to_string(),
        amount: dec!(10),
        withheld_taxes: dec!(12),
        currency: "USD".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
    };
    assert_eq!(dividend.net_amount(), dec!(-2));
}

#[test]
fn test_dividend_rejects_negative_withholding() {
    let dividend = Dividend {
        id: "d3".to_string(),
        symbol: "AAPL".to_string(),
        amount: dec!(10),
        withheld_taxes: dec!(-1),
        currency: "USD".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
    };
    assert!(dividend.validate().is_err());
}
