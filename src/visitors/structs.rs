//! Visitor set structures.

pub mod visitor_set;
