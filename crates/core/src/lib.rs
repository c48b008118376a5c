//! Domain types, errors, and validation for the Stellight schedule service.

pub mod error;
pub mod schedule;
pub mod types;
