//! Implementation blocks for the visitor set.

pub mod visitor_set;
