//! Test helpers module
//!
//! Utilities for the DB-backed integration suites: database setup/cleanup
//! and test-data builders.

// Not every suite uses every helper.
#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;

pub use database_helper::*;
pub use test_data::*;
