//! Test support for the portal backend.
//!
//! Logging initialization, Problem Details assertions and unique test data
//! shared by the backend's unit and integration tests.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
