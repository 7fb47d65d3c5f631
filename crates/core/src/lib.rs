//! Pizza Stub Core - Shared types library.
//!
//! This crate provides common types used across all Pizza Stub components:
//! - `server` - The mock pizza-service API (fixture router)
//! - `loadgen` - Load-test scenario driver
//! - `integration-tests` - End-to-end tests against the mock API
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! async. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain types and newtype wrappers for ids, emails, and roles
//! - [`query`] - Name filtering and pagination semantics shared by the
//!   directory-style listing endpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod query;
pub mod types;

pub use query::*;
pub use types::*;
