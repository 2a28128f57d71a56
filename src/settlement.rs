use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SettlementError};
use crate::events::{Event, EventStore};
use crate::interest::cycle_interest;
use crate::loan::{Loan, Payment};
use crate::store::RecordStore;
use crate::types::LoanUpdate;

/// outcome of a full/partial payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullSettlement {
    pub remaining_amount: Money,
    pub payment: Payment,
    pub fully_settled: bool,
}

/// outcome of a minimum/interest-only payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renewal {
    pub interest_amount: Money,
    pub next_payment_date: NaiveDate,
}

/// applies payment instructions to loans.
///
/// The two payment paths are deliberately asymmetric: a full payment reduces
/// the balance and appends a payment record without touching the due date; a
/// minimum payment charges one cycle of interest and rolls the due date one
/// month forward without touching the balance or the payment history.
///
/// Each operation persists through the record store first and mutates the
/// in-memory loan only after the write is confirmed, so a persistence
/// failure leaves no partial state.
pub struct SettlementEngine<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> SettlementEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// record a payment against the remaining balance.
    ///
    /// The balance is clamped at zero: paying more than is owed settles the
    /// loan, it never produces a negative balance. Repeated identical calls
    /// are real payment events, not retries, and are not deduplicated.
    pub fn settle_full(
        &mut self,
        loan: &mut Loan,
        amount: Money,
        payment_date: NaiveDate,
        events: &mut EventStore,
    ) -> Result<FullSettlement> {
        if !amount.is_positive() {
            return Err(SettlementError::InvalidAmount { amount });
        }

        let installment_number = self.store.payment_count(loan.id)? + 1;
        let fully_settled = amount >= loan.remaining_amount;
        let new_remaining = (loan.remaining_amount - amount).max(Money::ZERO);

        let payment = Payment::paid(loan.id, amount, payment_date, installment_number);
        self.store.commit_settlement(
            loan.id,
            LoanUpdate::balance(new_remaining),
            payment.clone(),
        )?;

        loan.remaining_amount = new_remaining;

        events.emit(Event::PaymentReceived {
            loan_id: loan.id,
            payment_id: payment.id,
            amount,
            installment_number,
            remaining_after: new_remaining,
            payment_date,
        });
        if fully_settled {
            events.emit(Event::LoanSettled {
                loan_id: loan.id,
                final_payment: amount,
                payment_date,
            });
        }

        Ok(FullSettlement {
            remaining_amount: new_remaining,
            payment,
            fully_settled,
        })
    }

    /// record an interest-only payment: charge one cycle of interest and
    /// roll the due date one month forward.
    ///
    /// The renewal cycle is one calendar month regardless of the interest
    /// basis. No payment record is created; the balance is unchanged.
    pub fn settle_minimum(
        &mut self,
        loan: &mut Loan,
        payment_date: NaiveDate,
        events: &mut EventStore,
    ) -> Result<Renewal> {
        let interest_amount = cycle_interest(
            loan.remaining_amount,
            loan.interest_rate,
            loan.interest_type,
            loan.installments,
        )?;

        let previous_due_date = loan.next_payment_date;
        let next_payment_date = previous_due_date
            .checked_add_months(Months::new(1))
            .ok_or_else(|| SettlementError::InvalidLoanState {
                message: format!("due date out of range: {}", previous_due_date),
            })?;

        self.store
            .update_loan(loan.id, LoanUpdate::due_date(next_payment_date))?;

        loan.next_payment_date = next_payment_date;

        events.emit(Event::LoanRenewed {
            loan_id: loan.id,
            interest_amount,
            previous_due_date,
            new_due_date: next_payment_date,
            payment_date,
        });

        Ok(Renewal {
            interest_amount,
            next_payment_date,
        })
    }
}
