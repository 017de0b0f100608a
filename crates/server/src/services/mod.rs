//! Orchestration layer: one function per public operation.
//!
//! Every mutating operation opens a single transaction, locks the rows it is
//! about to reconcile, runs the ledger arithmetic in memory, and persists all
//! affected rows together. If anything fails, nothing is committed.

pub mod inventory;
pub mod items;
pub mod orders;
