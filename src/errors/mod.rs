//! Centralized error handling for the IPTV server
//!
//! Parsing itself never fails: malformed playlist lines degrade to defaults or
//! are dropped. The errors defined here cover what happens around the parser,
//! such as rejected uploads and failed channel lookups.
//!
//! # Usage
//!
//! ```rust
//! use iptv_server::errors::{AppError, AppResult};
//!
//! fn example_function(name: &str) -> AppResult<String> {
//!     if name.is_empty() {
//!         return Err(AppError::validation("name must not be empty"));
//!     }
//!     Ok(name.to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
