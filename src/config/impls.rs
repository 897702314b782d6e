//! Implementation blocks for configuration types.

/// Loading, saving and validating `Configuration`.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;
