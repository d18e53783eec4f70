//! Household registry: backend seam, feed reconciliation and the list model
//!
//! The registry backend exposes two read paths. Privileged callers read the
//! full cross-household registry ("all household cards"); standard callers
//! read their own submitted documents ("my documents"), of which only
//! household cards are relevant. Writes always carry a full household
//! aggregate and target the backend's own record handle.

pub mod field_mapping;
pub mod list_model;
pub mod memory;
pub mod normalize;
pub mod submission;
pub mod validation;

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::Result;
use crate::models::{AccessRole, HouseholdRecord};

pub use list_model::{RegistryListModel, SubmitOutcome};
pub use normalize::RecordNormalizer;
pub use submission::{SubmissionState, SubmissionTracker};
pub use validation::validate_household;

/// Registry backend collaborator
///
/// Implementations report transport or server failures as
/// `RegistryError::Backend` and expired sessions as `RegistryError::AuthExpired`.
pub trait RegistryBackend: Send + Sync {
    /// Full registry, for privileged roles
    fn all_household_cards(&self) -> BoxFuture<'_, Result<Vec<Value>>>;

    /// Documents submitted by the caller, of every document type
    fn my_documents(&self) -> BoxFuture<'_, Result<Vec<Value>>>;

    /// Create a household card
    fn create_household<'a>(&'a self, record: &'a HouseholdRecord) -> BoxFuture<'a, Result<()>>;

    /// Replace the header and member list of a household card
    fn update_household<'a>(
        &'a self,
        source_record_id: &'a str,
        record: &'a HouseholdRecord,
    ) -> BoxFuture<'a, Result<()>>;

    /// Delete a household card
    fn delete_household<'a>(&'a self, source_record_id: &'a str) -> BoxFuture<'a, Result<()>>;

    /// Read path for a role
    fn fetch_for(&self, role: AccessRole) -> BoxFuture<'_, Result<Vec<Value>>> {
        match role {
            AccessRole::Privileged => self.all_household_cards(),
            AccessRole::Standard => self.my_documents(),
        }
    }
}

impl<B: RegistryBackend + ?Sized> RegistryBackend for Arc<B> {
    fn all_household_cards(&self) -> BoxFuture<'_, Result<Vec<Value>>> {
        (**self).all_household_cards()
    }

    fn my_documents(&self) -> BoxFuture<'_, Result<Vec<Value>>> {
        (**self).my_documents()
    }

    fn create_household<'a>(&'a self, record: &'a HouseholdRecord) -> BoxFuture<'a, Result<()>> {
        (**self).create_household(record)
    }

    fn update_household<'a>(
        &'a self,
        source_record_id: &'a str,
        record: &'a HouseholdRecord,
    ) -> BoxFuture<'a, Result<()>> {
        (**self).update_household(source_record_id, record)
    }

    fn delete_household<'a>(&'a self, source_record_id: &'a str) -> BoxFuture<'a, Result<()>> {
        (**self).delete_household(source_record_id)
    }
}

/// Human-readable name of the read path for a role, used in logs and errors
#[must_use]
pub const fn source_name(role: AccessRole) -> &'static str {
    match role {
        AccessRole::Privileged => "household cards",
        AccessRole::Standard => "my documents",
    }
}
