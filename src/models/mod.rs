//! Domain models for the household registry
//!
//! Region hierarchy, household cards with their members, and the normalized
//! list entries the list, detail and edit views consume.

pub mod entry;
pub mod household;
pub mod member;
pub mod region;
pub mod types;

// Re-export commonly used types
pub use entry::NormalizedListEntry;
pub use household::{HouseholdRecord, REGISTRY_NUMBER_LEN, is_sixteen_digits};
pub use member::MemberRecord;
pub use region::{Location, RegionLevel, RegionNode, RegionOption};
pub use types::{AccessRole, BloodType, Citizenship, DomicileStatus, MaritalStatus, Sex};
