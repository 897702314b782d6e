//! Configuration enumerations.

/// Errors raised while reading, parsing or validating configuration.
pub mod configuration_error;
