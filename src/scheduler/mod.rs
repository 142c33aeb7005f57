//! Scheduled background jobs.

pub mod presence;
