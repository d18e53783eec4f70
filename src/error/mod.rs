//! Error handling for the household registry core.
//!
//! Errors fall into four families: validation failures that never reach the
//! network, fetch failures that degrade to empty data, mutation failures that
//! are surfaced to the user, and expired sessions that the hosting shell must
//! act on.

pub mod util;

use std::fmt;
use std::io;

use crate::models::RegionLevel;

/// Kind of write issued against the registry backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// A new household card
    Create,
    /// Full replacement of an existing household card
    Update,
    /// Removal of a household card
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Client-side rule violations, checked before any network call
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Registry number is required")]
    RegistryNumberMissing,

    #[error("Registry number must be exactly 16 digits")]
    RegistryNumberFormat,

    #[error("{0} must be selected")]
    RegionMissing(RegionLevel),

    #[error("At least one family member is required")]
    NoMembers,

    #[error("Member #{position}: full name is required")]
    MemberNameMissing { position: usize },

    #[error("Member #{position}: national id must be exactly 16 digits")]
    MemberNationalIdFormat { position: usize },

    #[error("Member #{position}: marriage date is required for married members")]
    MarriageDateMissing { position: usize },
}

/// Specialized error type for registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A client-side rule was violated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Loading regions or list data failed
    #[error("Failed to fetch {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    /// A create, update or delete call failed
    #[error("Failed to {action} household card: {message}")]
    Mutation {
        action: MutationKind,
        message: String,
    },

    /// The backend reported that the session is no longer valid
    #[error("Session expired, please sign in again")]
    AuthExpired,

    /// Raw failure reported by a collaborator
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create a fetch error for the named source
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a mutation error
    pub fn mutation(action: MutationKind, message: impl Into<String>) -> Self {
        Self::Mutation {
            action,
            message: message.into(),
        }
    }

    /// Whether this error must be handed to the hosting shell untouched
    #[must_use]
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Message suitable for display next to a form or list
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Mutation { message, .. } | Self::Fetch { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
