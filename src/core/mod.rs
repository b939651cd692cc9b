//! Core layer
//!
//! Stateless helpers: every function works on its own inputs, or on files it
//! opens and closes within the call.

/// Append formatted values to strings
pub mod append;

/// Host environment and process introspection
pub mod environment;

/// Byte level file comparison
pub mod file_diff;

/// Fixture file creation and inspection
pub mod fixtures;

/// GoogleTest filter and argument helpers
pub mod gtest;

/// String splitting, joining, case and trim helpers
pub mod strings;

/// Services holding application settings
pub mod services;
