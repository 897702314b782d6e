//! Visitor set: distinct visitor identifiers (usually IP addresses).
//!
//! Guarded by its own `RwLock`, independent from the counting store. The set
//! only grows during the process lifetime; its cardinality is the unique
//! views figure.

pub mod impls;
pub mod structs;
