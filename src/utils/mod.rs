//! Shared helpers: date parsing, logging and test fixtures

pub mod date;
pub mod logging;
