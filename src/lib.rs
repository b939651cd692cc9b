//! # rassist
//!
//! String helpers, environment introspection and test-support utilities.
//!
//! ```rust
//! use rassist::core::strings::{join, split};
//!
//! let fields = split("Aa.Bb.Cc.", Some("."));
//! assert_eq!(fields, vec!["Aa", "Bb", "Cc", ""]);
//! assert_eq!(join(&fields, Some(".")), "Aa.Bb.Cc.");
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // String, file and test helpers
pub mod storage; // Settings persistence

/// Support modules (used across layers)
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Logging and validation

pub type Result<T> = std::result::Result<T, AppError>;
