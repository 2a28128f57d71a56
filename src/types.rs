use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for a payment
pub type PaymentId = Uuid;

/// unique identifier for a client
pub type ClientId = Uuid;

/// cadence a loan's interest rate is quoted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestBasis {
    /// rate quoted per day
    Daily,
    /// rate quoted per week
    Weekly,
    /// rate quoted per month
    Monthly,
    /// rate quoted over the full term, split across installments
    Total,
    /// unrecognized basis, computed like monthly
    #[serde(other)]
    Other,
}

/// loan status, owned by the surrounding application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// loan disbursed and collecting payments
    Active,
    /// remaining balance fully repaid
    Paid,
    /// past next_payment_date without payment
    Overdue,
    /// written off by the operator
    Cancelled,
}

/// payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

/// partial update written back to the record store for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoanUpdate {
    pub remaining_amount: Option<Money>,
    pub next_payment_date: Option<NaiveDate>,
    pub status: Option<LoanStatus>,
}

impl LoanUpdate {
    /// update carrying only a new remaining balance
    pub fn balance(remaining_amount: Money) -> Self {
        Self {
            remaining_amount: Some(remaining_amount),
            ..Default::default()
        }
    }

    /// update carrying only a renewed due date
    pub fn due_date(next_payment_date: NaiveDate) -> Self {
        Self {
            next_payment_date: Some(next_payment_date),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_amount.is_none()
            && self.next_payment_date.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_basis_unknown_value_deserializes_as_other() {
        let basis: InterestBasis = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(basis, InterestBasis::Other);

        let basis: InterestBasis = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(basis, InterestBasis::Monthly);
    }

    #[test]
    fn test_loan_update_builders() {
        let update = LoanUpdate::balance(Money::from_major(300));
        assert_eq!(update.remaining_amount, Some(Money::from_major(300)));
        assert!(update.next_payment_date.is_none());
        assert!(update.status.is_none());

        assert!(LoanUpdate::default().is_empty());
    }
}
