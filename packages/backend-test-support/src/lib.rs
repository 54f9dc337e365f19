//! Backend test support utilities
//!
//! This crate provides utilities shared by unit and integration tests:
//! unified logging initialization and unique test-data helpers.

pub mod logging;
pub mod unique_helpers;
