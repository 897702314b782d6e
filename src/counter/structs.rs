//! Counting store structures.

pub mod page_counter;
