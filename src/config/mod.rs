//! Configuration management module.
//!
//! Loads, parses and validates the view counter configuration from a TOML
//! file.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging verbosity and how often
//!   the statistics line is printed
//! - **database**: store file location and the flush interval
//! - **database_structure**: bucket (table) and column names inside the store
//!
//! # Example
//!
//! ```rust,ignore
//! use view_counter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let interval = config.flush_interval();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
