//! Store capability trait.

pub mod database_backend;
