//! Family Card household registry core.
//!
//! Resolves the province → regency → district → village cascade, classifies
//! households into proximity ring zones, reconciles the two registry feeds
//! into one list shape, and drives validated create, update and delete calls
//! against a registry backend.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod region;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::zone::{RingDefinition, ZoneClassifier, classify};
pub use config::RegistryConfig;
pub use error::{MutationKind, RegistryError, Result, ValidationError};
pub use filter::{EntryFilter, SearchFilter, filter_entries};
pub use form::HouseholdForm;
pub use models::{
    AccessRole, HouseholdRecord, Location, MemberRecord, NormalizedListEntry, RegionLevel,
    RegionNode, RegionOption,
};
pub use region::{RegionCascadeResolver, RegionSource};
pub use registry::{
    RecordNormalizer, RegistryBackend, RegistryListModel, SubmissionState, SubmitOutcome,
    validate_household,
};
