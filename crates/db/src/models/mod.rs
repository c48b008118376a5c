//! Row models and request DTOs, one module per table.

pub mod schedule;
pub mod stellar;
