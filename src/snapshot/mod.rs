//! Snapshot codec.
//!
//! Converts the live structures into self-describing JSON records and back.
//! Field names are tagged (`PageCounts`, `UniqueViews`, `IPs`), unknown fields
//! are ignored on decode and missing or `null` collections decode as empty, so
//! records written by older or newer versions stay readable.
//!
//! ```text
//! current / <day key> : {"PageCounts":{"home":4},"UniqueViews":2}
//! IPs                 : {"IPs":{"1.2.3.4":true,"5.6.7.8":true}}
//! ```

/// Codec error types.
pub mod errors;

/// Serde helpers shared by the snapshot records.
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod tests;
