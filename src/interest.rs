use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SettlementError};
use crate::loan::Loan;
use crate::types::InterestBasis;

/// one billing cycle's interest quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    pub interest_amount: Money,
    pub principal_base: Money,
    pub rate: Rate,
    pub basis: InterestBasis,
}

/// calculate the interest owed for one billing cycle.
///
/// The daily, weekly, and monthly bases all charge the flat per-cycle rate;
/// the basis label records the cadence the caller applies it at, it does not
/// scale the arithmetic. The total basis spreads the full-term interest
/// evenly across all installments.
pub fn cycle_interest(
    remaining_amount: Money,
    rate: Rate,
    basis: InterestBasis,
    installments: u32,
) -> Result<Money> {
    if remaining_amount.is_negative() {
        return Err(SettlementError::InvalidLoanState {
            message: format!("remaining balance must not be negative, got {}", remaining_amount),
        });
    }
    if rate.is_negative() {
        return Err(SettlementError::InvalidLoanState {
            message: format!("interest rate must not be negative, got {}", rate),
        });
    }

    let full_cycle = remaining_amount.percentage(rate);

    match basis {
        InterestBasis::Daily
        | InterestBasis::Weekly
        | InterestBasis::Monthly
        | InterestBasis::Other => Ok(full_cycle),
        InterestBasis::Total => {
            if installments == 0 {
                return Err(SettlementError::InvalidLoanState {
                    message: "total basis requires at least 1 installment".to_string(),
                });
            }
            Ok(full_cycle / Decimal::from(installments))
        }
    }
}

/// quote one cycle's interest for a loan
pub fn quote_for_loan(loan: &Loan) -> Result<InterestQuote> {
    let interest_amount = cycle_interest(
        loan.remaining_amount,
        loan.interest_rate,
        loan.interest_type,
        loan.installments,
    )?;

    Ok(InterestQuote {
        interest_amount,
        principal_base: loan.remaining_amount,
        rate: loan.interest_rate,
        basis: loan.interest_type,
    })
}
