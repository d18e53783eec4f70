//! Configuration for the household registry core.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::zone::{RingDefinition, standard_rings};
use crate::error::{RegistryError, Result};

/// Configuration for the registry list model and its normalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Document type that marks a standard-feed document as a household card
    pub household_document_type: String,
    /// How long the submission state stays at `Success` before reverting
    #[serde(rename = "success_reset_delay_ms", with = "duration_millis")]
    pub success_reset_delay: Duration,
    /// Ring table used by the zone classifier, innermost first
    pub ring_definitions: Vec<RingDefinition>,
    /// Formats tried, in order, when parsing header dates from either feed
    pub date_formats: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            household_document_type: "household_card".to_string(),
            success_reset_delay: Duration::from_millis(3000),
            ring_definitions: standard_rings(),
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // 15-01-2023
                "%d/%m/%Y".to_string(), // 15/01/2023
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%Y%m%d".to_string(),   // Compact: 20230115
            ],
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a JSON file, defaulting missing keys
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the core cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.household_document_type.trim().is_empty() {
            return Err(RegistryError::Config(
                "household_document_type must not be empty".to_string(),
            ));
        }
        if self.ring_definitions.iter().any(|ring| ring.ring.trim().is_empty()) {
            return Err(RegistryError::Config(
                "every ring definition needs a ring identifier".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a standard-feed document type marks a household card
    #[must_use]
    pub fn is_household_document(&self, document_type: &str) -> bool {
        document_type
            .trim()
            .eq_ignore_ascii_case(self.household_document_type.trim())
    }
}

impl fmt::Display for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registry Configuration:")?;
        writeln!(f, "  Household Document Type: {}", self.household_document_type)?;
        writeln!(f, "  Success Reset Delay: {:?}", self.success_reset_delay)?;
        writeln!(f, "  Ring Definitions: {}", self.ring_definitions.len())?;
        for ring in &self.ring_definitions {
            writeln!(f, "    {} ({} keywords)", ring.ring, ring.keywords.len())?;
        }
        writeln!(f, "  Date Formats: {}", self.date_formats.join(", "))?;
        Ok(())
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
