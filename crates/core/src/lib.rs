//! Pedidos Core - Shared domain types.
//!
//! This crate provides the types shared by the Pedidos front-end: monetary
//! amounts and their locale-aware formatting, order statuses with their
//! Spanish display labels, and the order/customer records exchanged with
//! the upstream services.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
