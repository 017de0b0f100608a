//! Stockroom Core - Shared types and stock reconciliation logic.
//!
//! This crate provides the pieces of Stockroom that must stay pure and
//! provable, shared by the `server` crate and the integration tests.
//!
//! # Architecture
//!
//! The core crate contains only types and arithmetic - no I/O, no database
//! access, no HTTP. All stock mutation in the system funnels through
//! [`ledger`], which is the single place the non-negative stock invariant
//! is enforced.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the generic page type
//! - [`ledger`] - Stock delta computation for transfers and withdrawals
//! - [`order_no`] - Sequential order identifiers (`O001`, `O002`, ...)
//! - [`pricing`] - Server-side order total computation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ledger;
pub mod order_no;
pub mod pricing;
pub mod types;

pub use ledger::{LedgerError, MovementKind};
pub use order_no::OrderNo;
pub use types::*;
