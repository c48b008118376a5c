//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod schedule_repo;
pub mod stellar_repo;

pub use schedule_repo::ScheduleRepo;
pub use stellar_repo::StellarRepo;
