//! Ledger guard - pure checks on opening-balance writes and transaction
//! candidates. Nothing here mutates the state it is given.

use rust_decimal::Decimal;

use super::LedgerState;
use crate::categories::Category;
use crate::constants::{AMOUNT_DECIMAL_PRECISION, MAX_AMOUNT_UNITS};
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::NewTransaction;

/// Applies the opening balance to `state`, returning the initialized state.
///
/// Fails with `InvariantViolation` when the balance is already set or when
/// the ledger already holds transactions, whatever the new amount is.
pub fn set_opening_balance(state: &LedgerState, amount: Decimal) -> Result<LedgerState> {
    if let Some(existing) = state.opening_balance {
        return Err(Error::InvariantViolation(format!(
            "opening balance is already set to {}",
            existing
        )));
    }
    if state.has_transactions() {
        return Err(Error::InvariantViolation(format!(
            "opening balance cannot be set after {} transaction(s) were recorded",
            state.transactions.len()
        )));
    }
    validate_amount_range(amount)?;
    validate_amount_precision(amount)?;

    Ok(LedgerState {
        opening_balance: Some(amount),
        transactions: Vec::new(),
    })
}

/// Checks a candidate against the ledger and the known categories.
///
/// Returns the category the candidate resolves to.
pub fn validate_transaction<'a>(
    state: &LedgerState,
    candidate: &NewTransaction,
    categories: &'a [Category],
) -> Result<&'a Category> {
    if !state.is_initialized() {
        return Err(ValidationError::LedgerNotInitialized.into());
    }
    if candidate.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(candidate.amount.to_string()).into());
    }
    validate_amount_range(candidate.amount)?;
    validate_amount_precision(candidate.amount)?;

    categories
        .iter()
        .find(|c| c.id == candidate.category_id)
        .ok_or_else(|| ValidationError::UnknownCategory(candidate.category_id.clone()).into())
}

/// Rejects amounts whose magnitude exceeds [`MAX_AMOUNT_UNITS`].
pub fn validate_amount_range(amount: Decimal) -> Result<()> {
    if amount.abs() > Decimal::from(MAX_AMOUNT_UNITS) {
        return Err(
            ValidationError::AmountOutOfRange(amount.to_string(), MAX_AMOUNT_UNITS).into(),
        );
    }
    Ok(())
}

/// Rejects amounts finer than the currency minor unit.
pub fn validate_amount_precision(amount: Decimal) -> Result<()> {
    if amount.normalize().scale() > AMOUNT_DECIMAL_PRECISION {
        return Err(ValidationError::ExcessPrecision(
            amount.to_string(),
            AMOUNT_DECIMAL_PRECISION,
        )
        .into());
    }
    Ok(())
}
