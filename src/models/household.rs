//! Household (Family Card) aggregate
//!
//! A household card is a header plus an ordered list of members, keyed by its
//! 16-digit registry number. Edits always replace the header and the full
//! member list together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::member::MemberRecord;
use super::region::Location;
use super::types::DomicileStatus;
use crate::utils::date::lenient_date;

/// Length of registry numbers and national ids
pub const REGISTRY_NUMBER_LEN: usize = 16;

/// Whether a value is exactly sixteen ASCII digits
#[must_use]
pub fn is_sixteen_digits(value: &str) -> bool {
    value.len() == REGISTRY_NUMBER_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// A household card as written to the registry backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseholdRecord {
    /// 16-digit registry number, the natural key of the aggregate
    pub registry_number: String,
    pub head_of_household_name: String,
    /// Free-text street address
    pub address: String,
    #[serde(flatten)]
    pub location: Location,
    /// Derived from `location` by the zone classifier
    pub ring_zone: String,
    pub domicile_status: DomicileStatus,
    #[serde(deserialize_with = "lenient_date")]
    pub issue_date: Option<NaiveDate>,
    pub members: Vec<MemberRecord>,
}

impl HouseholdRecord {
    /// Create a household with a registry number and head of household
    pub fn new(registry_number: impl Into<String>, head_of_household_name: impl Into<String>) -> Self {
        Self {
            registry_number: registry_number.into(),
            head_of_household_name: head_of_household_name.into(),
            ..Self::default()
        }
    }

    /// Set the location
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Append a member
    #[must_use]
    pub fn with_member(mut self, member: MemberRecord) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
