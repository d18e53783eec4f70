//! Utility functions for error handling
//!
//! Collaborators report raw backend failures; these helpers re-classify them
//! at the boundary where the core decides what the failure means.

use crate::error::{MutationKind, RegistryError, Result};

/// Extension trait for collaborator results
pub trait BackendResultExt<T> {
    /// Re-classify a failure as a fetch error for the named source
    ///
    /// `AuthExpired` is passed through unchanged.
    fn as_fetch(self, source_name: &str) -> Result<T>;

    /// Re-classify a failure as a mutation error
    ///
    /// `AuthExpired` and validation errors are passed through unchanged.
    fn as_mutation(self, action: MutationKind) -> Result<T>;
}

impl<T> BackendResultExt<T> for Result<T> {
    fn as_fetch(self, source_name: &str) -> Result<T> {
        self.map_err(|err| match err {
            RegistryError::AuthExpired => RegistryError::AuthExpired,
            fetch @ RegistryError::Fetch { .. } => fetch,
            other => RegistryError::fetch(source_name, other.user_message()),
        })
    }

    fn as_mutation(self, action: MutationKind) -> Result<T> {
        self.map_err(|err| match err {
            RegistryError::AuthExpired => RegistryError::AuthExpired,
            validation @ RegistryError::Validation(_) => validation,
            mutation @ RegistryError::Mutation { .. } => mutation,
            other => RegistryError::mutation(action, other.user_message()),
        })
    }
}
