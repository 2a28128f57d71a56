use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("invalid payment amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid loan state: {message}")]
    InvalidLoanState {
        message: String,
    },

    #[error("persistence failure: {message}")]
    PersistenceFailure {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SettlementError>;
