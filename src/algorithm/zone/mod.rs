//! Ring-zone classification
//!
//! Maps a resolved location to a proximity ring label. Ring definitions are
//! checked in list order against village, district and regency (never the
//! province); the first match wins. When nothing matches, fixed fallbacks are
//! tried: Kolaka, then Sulawesi, then the province itself, then Indonesia.
//!
//! A village inside a non-Kolaka regency that hits a ring keyword outranks the
//! Kolaka fallback. That precedence is intentional and preserved.

pub mod rings;

use std::sync::LazyLock;

use crate::models::Location;

pub use rings::{
    KOLAKA_ZONE, NATIONAL_ZONE, OUTER_RING, RingDefinition, SULAWESI_ZONE, standard_rings,
};

static STANDARD_CLASSIFIER: LazyLock<ZoneClassifier> = LazyLock::new(ZoneClassifier::default);

/// Classify a location with the standard ring table
#[must_use]
pub fn classify(location: &Location) -> String {
    STANDARD_CLASSIFIER.classify(location)
}

/// Location fields trimmed and lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NormalizedLocation {
    province: String,
    regency: String,
    district: String,
    village: String,
}

impl NormalizedLocation {
    fn from_location(location: &Location) -> Self {
        let normalize = |s: &str| s.trim().to_lowercase();
        Self {
            province: normalize(&location.province),
            regency: normalize(&location.regency),
            district: normalize(&location.district),
            village: normalize(&location.village),
        }
    }
}

/// Pure, total classifier over an ordered ring table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneClassifier {
    rings: Vec<RingDefinition>,
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        Self::new(standard_rings())
    }
}

impl ZoneClassifier {
    /// Create a classifier over the given rings, checked in order
    #[must_use]
    pub fn new(rings: Vec<RingDefinition>) -> Self {
        // Definitions may come from configuration, so normalize again
        let rings = rings
            .into_iter()
            .map(|ring| RingDefinition::new(ring.ring, ring.label, ring.keywords))
            .collect();
        Self { rings }
    }

    #[must_use]
    pub fn rings(&self) -> &[RingDefinition] {
        &self.rings
    }

    /// Ring label for a location
    #[must_use]
    pub fn classify(&self, location: &Location) -> String {
        let normalized = NormalizedLocation::from_location(location);
        let haystacks = [
            normalized.village.as_str(),
            normalized.district.as_str(),
            normalized.regency.as_str(),
        ];

        if let Some(ring) = self.rings.iter().find(|ring| ring.matches_any(&haystacks)) {
            return ring.zone_label();
        }

        if normalized.regency.contains("kolaka") || normalized.province.contains("kolaka") {
            return KOLAKA_ZONE.to_string();
        }

        if normalized.province.contains("sulawesi") {
            return SULAWESI_ZONE.to_string();
        }

        if !normalized.province.is_empty() {
            return format!("{OUTER_RING} - {}", location.province);
        }

        NATIONAL_ZONE.to_string()
    }

    /// Recompute `current` from `location`
    ///
    /// Returns `true` only when the stored value actually changed; an equal
    /// result leaves `current` untouched.
    pub fn reclassify(&self, location: &Location, current: &mut String) -> bool {
        let zone = self.classify(location);
        if *current == zone {
            return false;
        }
        *current = zone;
        true
    }
}
