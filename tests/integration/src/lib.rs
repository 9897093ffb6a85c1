//! Integration test utilities for the board data layer
//!
//! This crate provides helpers for running end-to-end tests against
//! the services backed by a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
