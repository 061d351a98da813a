//! FinSight Core - ledger rules, financial metrics, and insight orchestration.
//!
//! This crate is storage- and provider-agnostic. It defines the traits a
//! ledger store and an insight provider implement, and the pure engines that
//! derive metrics from a ledger snapshot.

pub mod categories;
pub mod constants;
pub mod errors;
pub mod insights;
pub mod ledger;
pub mod metrics;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
