pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod loan;
pub mod settlement;
pub mod store;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, SettlementError};
pub use events::{Event, EventStore};
pub use interest::{cycle_interest, quote_for_loan, InterestQuote};
pub use loan::{Loan, Payment};
pub use settlement::{FullSettlement, Renewal, SettlementEngine};
pub use store::{InMemoryStore, RecordStore};
pub use types::{
    ClientId, InterestBasis, LoanId, LoanStatus, LoanUpdate, PaymentId, PaymentStatus,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
