//! Household draft form
//!
//! Holds the household being created or edited together with its region
//! cascade. Every change to a region name goes through the form, which then
//! recomputes the ring zone. Recomputation is a no-op when the zone is
//! unchanged.

use chrono::NaiveDate;

use crate::algorithm::zone::ZoneClassifier;
use crate::error::ValidationError;
use crate::models::{
    DomicileStatus, HouseholdRecord, MaritalStatus, MemberRecord, NormalizedListEntry, RegionLevel,
};
use crate::region::{RegionCascadeResolver, RegionSource};
use crate::registry::validate_household;

/// Draft of one household card
#[derive(Debug)]
pub struct HouseholdForm<S> {
    record: HouseholdRecord,
    source_record_id: Option<String>,
    cascade: RegionCascadeResolver<S>,
    classifier: ZoneClassifier,
}

impl<S: RegionSource> HouseholdForm<S> {
    /// Blank form for a new household, with one empty member row
    pub fn new(source: S) -> Self {
        Self::with_classifier(source, ZoneClassifier::default())
    }

    pub fn with_classifier(source: S, classifier: ZoneClassifier) -> Self {
        let mut form = Self {
            record: HouseholdRecord::default(),
            source_record_id: None,
            cascade: RegionCascadeResolver::new(source),
            classifier,
        };
        form.record.members.push(MemberRecord::default());
        form.refresh_zone();
        form
    }

    /// Form pre-filled from a list entry, for editing
    ///
    /// Entries carry region names but no ids, so the cascade starts with
    /// nothing selected. The names are kept until a level is re-selected.
    pub fn from_entry(source: S, entry: &NormalizedListEntry) -> Self {
        let mut form = Self::new(source);
        form.record = entry.to_record();
        form.source_record_id = Some(entry.source_record_id.clone());
        if form.record.members.is_empty() {
            form.record.members.push(MemberRecord::default());
        }
        form.refresh_zone();
        form
    }

    #[must_use]
    pub const fn record(&self) -> &HouseholdRecord {
        &self.record
    }

    /// Consume the form, returning the draft
    #[must_use]
    pub fn into_record(self) -> HouseholdRecord {
        self.record
    }

    /// Backend handle of the household being edited; `None` when creating
    #[must_use]
    pub fn source_record_id(&self) -> Option<&str> {
        self.source_record_id.as_deref()
    }

    #[must_use]
    pub const fn cascade(&self) -> &RegionCascadeResolver<S> {
        &self.cascade
    }

    pub fn set_registry_number(&mut self, value: impl Into<String>) {
        self.record.registry_number = value.into();
    }

    pub fn set_head_of_household_name(&mut self, value: impl Into<String>) {
        self.record.head_of_household_name = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.record.address = value.into();
    }

    pub fn set_domicile_status(&mut self, status: DomicileStatus) {
        self.record.domicile_status = status;
    }

    pub fn set_issue_date(&mut self, date: Option<NaiveDate>) {
        self.record.issue_date = date;
    }

    /// Load the province options
    pub async fn load_provinces(&mut self) -> usize {
        self.cascade.load_provinces().await
    }

    /// Select a region by id and load the next level
    ///
    /// Returns `true` when the ring zone changed.
    pub async fn select(&mut self, level: RegionLevel, id: &str) -> bool {
        self.cascade
            .select_level(level, id, &mut self.record.location)
            .await;
        self.refresh_zone()
    }

    pub async fn select_province(&mut self, id: &str) -> bool {
        self.select(RegionLevel::Province, id).await
    }

    pub async fn select_regency(&mut self, id: &str) -> bool {
        self.select(RegionLevel::Regency, id).await
    }

    pub async fn select_district(&mut self, id: &str) -> bool {
        self.select(RegionLevel::District, id).await
    }

    pub async fn select_village(&mut self, id: &str) -> bool {
        self.select(RegionLevel::Village, id).await
    }

    /// Recompute the ring zone from the current location
    ///
    /// Returns `false`, leaving the record untouched, when the zone is
    /// unchanged.
    pub fn refresh_zone(&mut self) -> bool {
        let changed = self
            .classifier
            .reclassify(&self.record.location, &mut self.record.ring_zone);
        if changed {
            log::debug!("Ring zone is now '{}'", self.record.ring_zone);
        }
        changed
    }

    #[must_use]
    pub fn members(&self) -> &[MemberRecord] {
        &self.record.members
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut MemberRecord> {
        self.record.members.get_mut(index)
    }

    /// Append a blank member row, returning its index
    pub fn add_member(&mut self) -> usize {
        self.record.members.push(MemberRecord::default());
        self.record.members.len() - 1
    }

    /// Remove a member row
    ///
    /// Removing the last row leaves a single blank row in its place.
    pub fn remove_member(&mut self, index: usize) -> Option<MemberRecord> {
        if index >= self.record.members.len() {
            return None;
        }
        let removed = self.record.members.remove(index);
        if self.record.members.is_empty() {
            self.record.members.push(MemberRecord::default());
        }
        Some(removed)
    }

    /// Set a member's marital status; the marriage date is dropped unless married
    pub fn set_member_marital_status(&mut self, index: usize, status: MaritalStatus) -> bool {
        match self.member_mut(index) {
            Some(member) => {
                member.set_marital_status(status);
                true
            }
            None => false,
        }
    }

    /// Run the submission checks against the draft
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_household(&self.record)
    }
}
