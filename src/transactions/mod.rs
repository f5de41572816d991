pub mod transactions_model;

#[cfg(test)]
mod transactions_model_tests;

pub use transactions_model::{Dividend, PricePoint, Transaction, TransactionType};
