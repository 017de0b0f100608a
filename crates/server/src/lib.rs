//! Stockroom server library.
//!
//! This crate provides the HTTP service as a library, allowing the routing,
//! services and error mapping to be tested and reused.
//!
//! # Layers
//!
//! - [`routes`] - axum handlers and the response envelope
//! - [`services`] - one transaction per mutating operation; all stock math
//!   delegated to `stockroom_core::ledger`
//! - [`db`] - `PostgreSQL` repositories with runtime-checked queries
//! - [`models`] - domain structs and request/response shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
