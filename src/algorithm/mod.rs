//! Algorithm implementations for the household registry
//!
//! Currently the ring-zone classification that tags each household with its
//! proximity to the facility.

pub mod zone;

pub use zone::{RingDefinition, ZoneClassifier, classify};
