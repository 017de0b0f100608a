//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `stock_reconciliation` - ledger math across movement lifecycles
//! - `order_lifecycle` - order numbering, pricing and stock flows
//! - `api_contract` - request validation and the response envelope
//!
//! These tests exercise the service logic without a database; the stock
//! arithmetic, order sequencing and error mapping are all pure functions
//! over values the repositories would otherwise load.
