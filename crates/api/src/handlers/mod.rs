//! Request handlers, one module per resource.

pub mod schedules;
pub mod stellars;
