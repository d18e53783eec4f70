//! Ring definitions
//!
//! Each ring names the places that belong to it. Keyword sets are domain data;
//! the matching rules live in the classifier.

use serde::{Deserialize, Serialize};

/// Fallback label when the regency or province is Kolaka
pub const KOLAKA_ZONE: &str = "Ring-III - Kabupaten Kolaka";

/// Fallback label for anywhere else in Sulawesi
pub const SULAWESI_ZONE: &str = "Ring-IV - Sulawesi Tenggara & Provinsi Sulawesi Lainnya";

/// Fallback label when not even a province is known
pub const NATIONAL_ZONE: &str = "Ring-V - Indonesia";

/// Ring identifier used for households outside Sulawesi
pub const OUTER_RING: &str = "Ring-V";

/// A proximity ring with its label and place keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingDefinition {
    /// Ring identifier, e.g. `Ring-I`
    pub ring: String,
    /// Human-readable list of places in the ring
    pub label: String,
    /// Lowercase substrings matched against village, district and regency
    pub keywords: Vec<String>,
}

impl RingDefinition {
    /// Create a ring definition; keywords are lowercased and blanks dropped
    pub fn new<I, S>(ring: impl Into<String>, label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ring: ring.into(),
            label: label.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    /// The `"{ring} - {label}"` string stored on a household
    #[must_use]
    pub fn zone_label(&self) -> String {
        format!("{} - {}", self.ring, self.label)
    }

    /// Whether any keyword occurs in any of the given normalized names
    #[must_use]
    pub fn matches_any(&self, haystacks: &[&str]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| haystacks.iter().any(|haystack| haystack.contains(keyword.as_str())))
    }
}

/// The rings recognised around the Wolo facility, innermost first
#[must_use]
pub fn standard_rings() -> Vec<RingDefinition> {
    vec![
        RingDefinition::new(
            "Ring-I",
            "Wolo, Ulu Wolo, Samaenre, Tolowe Ponre Waru, Iwoimendaa, Muara Lapao-pao",
            ["wolo", "samaenre", "tolowe", "ponre waru", "iwoimendaa", "muara lapao-pao"],
        ),
        RingDefinition::new(
            "Ring-II",
            "Donggala, Ulu Lapao-pao, Laggomali, Lalonggopi, Iwoimopuro, Lalonaha, Lana, Ulu Rina",
            [
                "donggala",
                "ulu lapao-pao",
                "laggomali",
                "lalonggopi",
                "iwoimopuro",
                "lalonaha",
                "lana",
                "ulu rina",
            ],
        ),
        RingDefinition::new(
            "Ring-III",
            "Samaturu, Latambaga, Wundulako, Pomalaa, Baula, Tanggetada, Watubangga",
            [
                "samaturu",
                "latambaga",
                "wundulako",
                "pomalaa",
                "baula",
                "tanggetada",
                "watubangga",
            ],
        ),
    ]
}
