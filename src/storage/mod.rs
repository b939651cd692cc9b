//! Storage layer for rassist
//!
//! Handles the optional TOML settings file.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
