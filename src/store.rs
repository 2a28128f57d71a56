use std::collections::HashMap;

use crate::errors::{Result, SettlementError};
use crate::loan::{Loan, Payment};
use crate::types::{LoanId, LoanUpdate};

/// persistence collaborator supplied by the surrounding application.
///
/// Implementations backed by a shared database must serialize concurrent
/// settlements per `loan_id` (row lock or compare-and-swap on a version
/// column); the engine holds `&mut` on the store within a process, so only
/// cross-process writers can race.
pub trait RecordStore {
    /// number of payment records already persisted for the loan
    fn payment_count(&self, loan_id: LoanId) -> Result<u32>;

    /// persist a balance update together with its payment record.
    ///
    /// Must be atomic: either both the update and the payment are committed
    /// or neither is.
    fn commit_settlement(
        &mut self,
        loan_id: LoanId,
        update: LoanUpdate,
        payment: Payment,
    ) -> Result<()>;

    /// persist a partial loan update with no payment record
    fn update_loan(&mut self, loan_id: LoanId, update: LoanUpdate) -> Result<()>;
}

/// in-memory record store, used in tests and as a reference implementation
#[derive(Debug, Default)]
pub struct InMemoryStore {
    loans: HashMap<LoanId, Loan>,
    payments: Vec<Payment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_loan(&mut self, loan: Loan) {
        self.loans.insert(loan.id, loan);
    }

    pub fn loan(&self, loan_id: LoanId) -> Option<&Loan> {
        self.loans.get(&loan_id)
    }

    pub fn payments_for(&self, loan_id: LoanId) -> Vec<&Payment> {
        self.payments.iter().filter(|p| p.loan_id == loan_id).collect()
    }

    fn apply_update(loan: &mut Loan, update: &LoanUpdate) {
        if let Some(remaining) = update.remaining_amount {
            loan.remaining_amount = remaining;
        }
        if let Some(due) = update.next_payment_date {
            loan.next_payment_date = due;
        }
        if let Some(status) = update.status {
            loan.status = status;
        }
    }
}

impl RecordStore for InMemoryStore {
    fn payment_count(&self, loan_id: LoanId) -> Result<u32> {
        Ok(self.payments.iter().filter(|p| p.loan_id == loan_id).count() as u32)
    }

    fn commit_settlement(
        &mut self,
        loan_id: LoanId,
        update: LoanUpdate,
        payment: Payment,
    ) -> Result<()> {
        // look up before mutating so a missing loan leaves no orphan payment
        let loan = self.loans.get_mut(&loan_id).ok_or_else(|| {
            SettlementError::PersistenceFailure {
                message: format!("loan not found: {}", loan_id),
            }
        })?;

        Self::apply_update(loan, &update);
        self.payments.push(payment);
        Ok(())
    }

    fn update_loan(&mut self, loan_id: LoanId, update: LoanUpdate) -> Result<()> {
        let loan = self.loans.get_mut(&loan_id).ok_or_else(|| {
            SettlementError::PersistenceFailure {
                message: format!("loan not found: {}", loan_id),
            }
        })?;

        Self::apply_update(loan, &update);
        Ok(())
    }
}
