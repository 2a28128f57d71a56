use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{LoanId, PaymentId};

/// all events that can be emitted by the settlement engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// a full/partial payment was recorded against the balance
    PaymentReceived {
        loan_id: LoanId,
        payment_id: PaymentId,
        amount: Money,
        installment_number: u32,
        remaining_after: Money,
        payment_date: NaiveDate,
    },
    /// a payment brought the remaining balance to zero
    LoanSettled {
        loan_id: LoanId,
        final_payment: Money,
        payment_date: NaiveDate,
    },
    /// an interest-only payment rolled the due date forward
    LoanRenewed {
        loan_id: LoanId,
        interest_amount: Money,
        previous_due_date: NaiveDate,
        new_due_date: NaiveDate,
        payment_date: NaiveDate,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
