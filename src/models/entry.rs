//! Display-ready list entries

use chrono::NaiveDate;
use serde::Serialize;

use super::household::HouseholdRecord;
use super::member::MemberRecord;
use super::region::Location;
use super::types::DomicileStatus;

/// A household card reconciled from either backend feed
///
/// `id` keys the entry in a display list. `source_record_id` is the handle of
/// the backend entity that update and delete calls target. Neither is the
/// registry number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListEntry {
    pub id: String,
    pub source_record_id: String,
    pub registry_number: String,
    pub head_of_household_name: String,
    pub address: String,
    #[serde(flatten)]
    pub location: Location,
    pub ring_zone: String,
    pub domicile_status: DomicileStatus,
    pub issue_date: Option<NaiveDate>,
    pub members: Vec<MemberRecord>,
}

impl NormalizedListEntry {
    /// The household aggregate carried by this entry, for editing
    #[must_use]
    pub fn to_record(&self) -> HouseholdRecord {
        HouseholdRecord {
            registry_number: self.registry_number.clone(),
            head_of_household_name: self.head_of_household_name.clone(),
            address: self.address.clone(),
            location: self.location.clone(),
            ring_zone: self.ring_zone.clone(),
            domicile_status: self.domicile_status,
            issue_date: self.issue_date,
            members: self.members.clone(),
        }
    }
}
