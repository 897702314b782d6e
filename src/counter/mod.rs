//! Counting store: page name to view count.
//!
//! One `RwLock` guards the whole mapping. Writers (`increment`, `add_page`,
//! `delete_page`, `set_count`) take it exclusively, readers (`get_count`,
//! `snapshot`) share it, so every increment is an atomic read-modify-write.

pub mod impls;
pub mod structs;
