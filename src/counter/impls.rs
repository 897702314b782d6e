//! Implementation blocks for the counting store.

pub mod page_counter;
