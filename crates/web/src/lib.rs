//! Pedidos web front-end library.
//!
//! This crate provides the front-end as a library, allowing the router to
//! be driven directly in integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod filters;
pub mod routes;
pub mod services;
pub mod state;
