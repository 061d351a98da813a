//! Ledger module - ledger state, the opening-balance guard, the store
//! contract, and the ledger application service.

mod ledger_guard;
mod ledger_model;
mod ledger_service;
mod ledger_traits;
mod memory_store;



pub use ledger_guard::{
    set_opening_balance, validate_amount_precision, validate_amount_range, validate_transaction,
};
pub use ledger_model::{LedgerState, LedgerStatus, LedgerStatusSummary};
pub use ledger_service::{load_ledger_state, LedgerService};
pub use ledger_traits::{LedgerServiceTrait, LedgerStoreTrait};
pub use memory_store::InMemoryLedgerStore;
