//! Logging utilities for output and operation tracking
//!
//! This module provides standardized log messages and console output for the
//! demo binary.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
