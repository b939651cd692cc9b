//! Utils module - Shared utilities and helpers
//!
//! Helpers used by the CLI layer and the storage layer.

/// Logger initialisation and verbose output
pub mod logging;

/// Input validation utilities
pub mod validation;
