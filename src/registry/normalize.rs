//! Reconciliation of the two registry feeds into one entry shape
//!
//! Privileged callers read the administrative feed, which is passed through
//! with field renaming only. Standard callers read their own documents; only
//! household-card documents are kept, and aliased fields are resolved by
//! precedence. Both paths produce [`NormalizedListEntry`] values with members
//! defaulted to an empty list.

use serde_json::{Map, Value};

use super::field_mapping::{
    DOCUMENT_PAYLOAD_KEY, DOCUMENT_RECORD_ID_KEYS, DOCUMENT_TYPE_KEYS, ENTITY_ID_KEYS, EntryField,
    FieldMapping, MEMBERS_KEYS, create_document_mappings, create_household_card_mappings,
    first_text,
};
use crate::algorithm::zone::ZoneClassifier;
use crate::config::RegistryConfig;
use crate::models::{AccessRole, DomicileStatus, MemberRecord, NormalizedListEntry};
use crate::utils::date::parse_date_with;

/// Maps raw feed records to normalized list entries
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    household_card_mappings: Vec<FieldMapping>,
    document_mappings: Vec<FieldMapping>,
    config: RegistryConfig,
    classifier: ZoneClassifier,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

impl RecordNormalizer {
    /// Create a normalizer from configuration
    #[must_use]
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            household_card_mappings: create_household_card_mappings(),
            document_mappings: create_document_mappings(),
            config: config.clone(),
            classifier: ZoneClassifier::new(config.ring_definitions.clone()),
        }
    }

    /// Normalize the raw feed read for `role`
    #[must_use]
    pub fn normalize(&self, role: AccessRole, raw: &[Value]) -> Vec<NormalizedListEntry> {
        match role {
            AccessRole::Privileged => self.normalize_household_cards(raw),
            AccessRole::Standard => self.normalize_documents(raw),
        }
    }

    /// Rename fields of the administrative feed; nothing is filtered out
    #[must_use]
    pub fn normalize_household_cards(&self, raw: &[Value]) -> Vec<NormalizedListEntry> {
        raw.iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let Some(object) = value.as_object() else {
                    log::warn!("Skipping household card #{index}: not a JSON object");
                    return None;
                };
                let source_record_id = first_text(object, ENTITY_ID_KEYS).unwrap_or_default();
                Some(self.build_entry(
                    object,
                    &self.household_card_mappings,
                    index,
                    source_record_id.clone(),
                    source_record_id,
                ))
            })
            .collect()
    }

    /// Keep household-card documents and reconcile their aliased fields
    #[must_use]
    pub fn normalize_documents(&self, raw: &[Value]) -> Vec<NormalizedListEntry> {
        raw.iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let Some(document) = value.as_object() else {
                    log::warn!("Skipping document #{index}: not a JSON object");
                    return None;
                };

                let document_type = first_text(document, DOCUMENT_TYPE_KEYS).unwrap_or_default();
                if !self.config.is_household_document(&document_type) {
                    log::debug!("Dropping document #{index} of type '{document_type}'");
                    return None;
                }

                let payload = document
                    .get(DOCUMENT_PAYLOAD_KEY)
                    .and_then(Value::as_object)
                    .unwrap_or(document);

                let document_id = first_text(document, ENTITY_ID_KEYS).unwrap_or_default();
                let source_record_id = first_text(document, DOCUMENT_RECORD_ID_KEYS)
                    .or_else(|| first_text(payload, ENTITY_ID_KEYS))
                    .unwrap_or_else(|| document_id.clone());

                Some(self.build_entry(
                    payload,
                    &self.document_mappings,
                    index,
                    document_id,
                    source_record_id,
                ))
            })
            .collect()
    }

    fn build_entry(
        &self,
        object: &Map<String, Value>,
        mappings: &[FieldMapping],
        index: usize,
        id: String,
        source_record_id: String,
    ) -> NormalizedListEntry {
        let mut entry = NormalizedListEntry {
            source_record_id,
            ..NormalizedListEntry::default()
        };

        for mapping in mappings {
            if let Some(value) = mapping.resolve(object) {
                self.apply(&mut entry, mapping.field, value);
            }
        }

        entry.members = extract_members(object, index);

        if entry.ring_zone.is_empty() {
            entry.ring_zone = self.classifier.classify(&entry.location);
        }

        entry.id = if !id.is_empty() {
            id
        } else if !entry.registry_number.is_empty() {
            entry.registry_number.clone()
        } else {
            format!("row-{index}")
        };

        entry
    }

    fn apply(&self, entry: &mut NormalizedListEntry, field: EntryField, value: String) {
        match field {
            EntryField::RegistryNumber => entry.registry_number = value,
            EntryField::HeadOfHouseholdName => entry.head_of_household_name = value,
            EntryField::Address => entry.address = value,
            EntryField::Province => entry.location.province = value,
            EntryField::Regency => entry.location.regency = value,
            EntryField::District => entry.location.district = value,
            EntryField::Village => entry.location.village = value,
            EntryField::RingZone => entry.ring_zone = value,
            EntryField::DomicileStatus => {
                entry.domicile_status = DomicileStatus::parse(&value).unwrap_or_else(|| {
                    log::debug!("Unrecognised domicile status '{value}', using default");
                    DomicileStatus::default()
                });
            }
            EntryField::IssueDate => {
                entry.issue_date = parse_date_with(&value, &self.config.date_formats);
                if entry.issue_date.is_none() {
                    log::debug!("Unparseable issue date '{value}'");
                }
            }
        }
    }
}

/// Members of a raw record; absent or malformed lists become empty
fn extract_members(object: &Map<String, Value>, index: usize) -> Vec<MemberRecord> {
    let Some(raw_members) = MEMBERS_KEYS.iter().find_map(|key| object.get(*key)) else {
        return Vec::new();
    };

    let Some(items) = raw_members.as_array() else {
        if !raw_members.is_null() {
            log::warn!("Record #{index}: member list is not an array, ignoring it");
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            serde_json::from_value::<MemberRecord>(item.clone())
                .map_err(|e| log::warn!("Record #{index}: skipping member #{}: {e}", position + 1))
                .ok()
        })
        .collect()
}
