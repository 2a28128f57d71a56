use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SettlementError};
use crate::types::{ClientId, InterestBasis, LoanId, LoanStatus, PaymentId, PaymentStatus};

/// loan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    // identification
    pub id: LoanId,
    pub client_id: ClientId,

    // principal tracking
    pub amount: Money,
    pub remaining_amount: Money,

    // interest terms
    pub interest_rate: Rate,
    pub interest_type: InterestBasis,
    pub installments: u32,
    pub installment_value: Money,

    // dates
    pub start_date: NaiveDate,
    pub next_payment_date: NaiveDate,

    // status, maintained by the surrounding application
    pub status: LoanStatus,
}

impl Loan {
    /// create a new loan, validating creation-time invariants
    #[allow(clippy::too_many_arguments)]
    pub fn originate(
        client_id: ClientId,
        amount: Money,
        interest_rate: Rate,
        interest_type: InterestBasis,
        installments: u32,
        installment_value: Money,
        start_date: NaiveDate,
        next_payment_date: NaiveDate,
    ) -> Result<Self> {
        if !amount.is_positive() {
            return Err(SettlementError::InvalidLoanState {
                message: format!("principal must be positive, got {}", amount),
            });
        }
        if interest_rate.is_negative() {
            return Err(SettlementError::InvalidLoanState {
                message: format!("interest rate must not be negative, got {}", interest_rate),
            });
        }
        if installments == 0 {
            return Err(SettlementError::InvalidLoanState {
                message: "installments must be at least 1".to_string(),
            });
        }
        if !installment_value.is_positive() {
            return Err(SettlementError::InvalidLoanState {
                message: format!("installment value must be positive, got {}", installment_value),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            client_id,
            amount,
            remaining_amount: amount,
            interest_rate,
            interest_type,
            installments,
            installment_value,
            start_date,
            next_payment_date,
            status: LoanStatus::Active,
        })
    }

    /// default amount offered for a full payment: the installment value,
    /// capped at what is still owed
    pub fn suggested_payment(&self) -> Money {
        self.installment_value.min(self.remaining_amount)
    }

    /// check if the balance is fully repaid
    pub fn is_settled(&self) -> bool {
        self.remaining_amount.is_zero()
    }

    /// check if the loan is past due as of the given date
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        !self.is_settled() && as_of > self.next_payment_date
    }

    /// check if the loan can accept settlement operations
    pub fn can_accept_payment(&self) -> bool {
        !matches!(self.status, LoanStatus::Paid | LoanStatus::Cancelled)
    }
}

/// payment record, one per full/partial payment event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub loan_id: LoanId,
    pub amount: Money,
    pub payment_date: NaiveDate,
    /// 1-based sequence: count of prior payments for the loan, plus one
    pub installment_number: u32,
    pub status: PaymentStatus,
}

impl Payment {
    /// create a paid installment record
    pub fn paid(
        loan_id: LoanId,
        amount: Money,
        payment_date: NaiveDate,
        installment_number: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            loan_id,
            amount,
            payment_date,
            installment_number,
            status: PaymentStatus::Paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_loan() -> Loan {
        Loan::originate(
            Uuid::new_v4(),
            Money::from_major(1_000),
            Rate::from_percentage(dec!(2.5)),
            InterestBasis::Monthly,
            10,
            Money::from_major(125),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_origination_starts_at_full_balance() {
        let loan = base_loan();
        assert_eq!(loan.remaining_amount, loan.amount);
        assert_eq!(loan.status, LoanStatus::Active);
        assert!(!loan.is_settled());
    }

    #[test]
    fn test_origination_guards() {
        let client = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

        let zero_principal = Loan::originate(
            client,
            Money::ZERO,
            Rate::from_percentage(dec!(2.5)),
            InterestBasis::Monthly,
            10,
            Money::from_major(125),
            start,
            due,
        );
        assert!(matches!(
            zero_principal,
            Err(SettlementError::InvalidLoanState { .. })
        ));

        let negative_rate = Loan::originate(
            client,
            Money::from_major(1_000),
            Rate::from_percentage(dec!(-1)),
            InterestBasis::Monthly,
            10,
            Money::from_major(125),
            start,
            due,
        );
        assert!(matches!(
            negative_rate,
            Err(SettlementError::InvalidLoanState { .. })
        ));

        let zero_installments = Loan::originate(
            client,
            Money::from_major(1_000),
            Rate::from_percentage(dec!(2.5)),
            InterestBasis::Total,
            0,
            Money::from_major(125),
            start,
            due,
        );
        assert!(matches!(
            zero_installments,
            Err(SettlementError::InvalidLoanState { .. })
        ));
    }

    #[test]
    fn test_suggested_payment_caps_at_remaining() {
        let mut loan = base_loan();
        assert_eq!(loan.suggested_payment(), Money::from_major(125));

        loan.remaining_amount = Money::from_major(80);
        assert_eq!(loan.suggested_payment(), Money::from_major(80));
    }

    #[test]
    fn test_overdue_by_date_comparison() {
        let loan = base_loan();
        assert!(!loan.is_overdue(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
        assert!(loan.is_overdue(NaiveDate::from_ymd_opt(2024, 2, 11).unwrap()));
    }

    #[test]
    fn test_terminal_statuses_refuse_payments() {
        let mut loan = base_loan();
        assert!(loan.can_accept_payment());

        loan.status = LoanStatus::Paid;
        assert!(!loan.can_accept_payment());

        loan.status = LoanStatus::Cancelled;
        assert!(!loan.can_accept_payment());

        loan.status = LoanStatus::Overdue;
        assert!(loan.can_accept_payment());
    }

    #[test]
    fn test_settled_loan_is_never_overdue() {
        let mut loan = base_loan();
        loan.remaining_amount = Money::ZERO;
        assert!(!loan.is_overdue(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }

    #[test]
    fn test_loan_json_shape() {
        // the hosted database layer exchanges loans as json
        let loan = base_loan();
        let json = serde_json::to_value(&loan).unwrap();

        assert_eq!(json["interest_type"], "monthly");
        assert_eq!(json["status"], "active");
        assert_eq!(json["next_payment_date"], "2024-02-10");

        let back: Loan = serde_json::from_value(json).unwrap();
        assert_eq!(back, loan);
    }
}
