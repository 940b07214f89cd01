//! Shared types, errors, and configuration for currfmt.
//!
//! This crate provides the pieces used by both the formatter and its front ends:
//! - The formatting error type
//! - The `Price` value type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, FormatterConfig, LoggingConfig};
pub use error::{FormatError, FormatResult};
pub use types::{Price, ZeroMajor};
