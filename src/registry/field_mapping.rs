//! Field mappings for the two registry feeds
//!
//! The administrative feed and the per-owner document feed name the same
//! header fields differently, and the document feed carries several aliases
//! for some of them. Each mapping lists its candidate source keys in
//! precedence order; the first candidate holding a non-empty value wins.

use serde_json::{Map, Value};
use smallvec::SmallVec;

/// Header field of a normalized entry that a mapping fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    RegistryNumber,
    HeadOfHouseholdName,
    Address,
    Province,
    Regency,
    District,
    Village,
    RingZone,
    DomicileStatus,
    IssueDate,
}

/// A header field and the source keys that may carry it
#[derive(Debug, Clone)]
pub struct FieldMapping {
    pub field: EntryField,
    pub candidates: SmallVec<[&'static str; 3]>,
    /// Strip surrounding whitespace from the resolved value
    pub trim: bool,
}

impl FieldMapping {
    /// Create a mapping with candidates in precedence order
    #[must_use]
    pub fn new(field: EntryField, candidates: &[&'static str]) -> Self {
        Self {
            field,
            candidates: SmallVec::from_slice(candidates),
            trim: true,
        }
    }

    /// Keep resolved values exactly as the source wrote them
    #[must_use]
    pub fn verbatim(mut self) -> Self {
        self.trim = false;
        self
    }

    /// First non-empty value among the candidates
    #[must_use]
    pub fn resolve(&self, object: &Map<String, Value>) -> Option<String> {
        let mut values = self.candidates.iter().filter_map(|key| object.get(*key));
        if self.trim {
            values.find_map(value_text)
        } else {
            values.find_map(raw_value_text)
        }
    }
}

/// Text of a scalar JSON value, trimmed; blanks and non-scalars are `None`
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text of a scalar JSON value as written; whitespace-only strings are `None`
#[must_use]
pub fn raw_value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => value_text(other),
    }
}

/// First non-empty text value among `keys`, in order
#[must_use]
pub fn first_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(value_text)
}

/// Key holding the backend entity id in both feeds
pub const ENTITY_ID_KEYS: &[&str] = &["_id", "id"];

/// Key holding the member list in both feeds
pub const MEMBERS_KEYS: &[&str] = &["anggota", "members"];

/// Document feed: document type
pub const DOCUMENT_TYPE_KEYS: &[&str] = &["documentType", "jenisDokumen"];

/// Document feed: household payload nested inside a document
pub const DOCUMENT_PAYLOAD_KEY: &str = "data";

/// Document feed: handle of the household aggregate a document refers to
pub const DOCUMENT_RECORD_ID_KEYS: &[&str] = &["recordId", "householdId"];

/// Create field mappings for the administrative household-card feed
///
/// This feed is passed through with renaming only, one key per field, and
/// values keep their whitespace.
#[must_use]
pub fn create_household_card_mappings() -> Vec<FieldMapping> {
    vec![
        FieldMapping::new(EntryField::RegistryNumber, &["noKK"]).verbatim(),
        FieldMapping::new(EntryField::HeadOfHouseholdName, &["namaKepalaKeluarga"]).verbatim(),
        FieldMapping::new(EntryField::Address, &["alamat"]).verbatim(),
        FieldMapping::new(EntryField::Province, &["provinsi"]).verbatim(),
        FieldMapping::new(EntryField::Regency, &["kabupaten"]).verbatim(),
        FieldMapping::new(EntryField::District, &["kecamatan"]).verbatim(),
        FieldMapping::new(EntryField::Village, &["desa"]).verbatim(),
        FieldMapping::new(EntryField::RingZone, &["ring"]).verbatim(),
        FieldMapping::new(EntryField::DomicileStatus, &["statusDomisili"]).verbatim(),
        FieldMapping::new(EntryField::IssueDate, &["tanggalTerbit"]).verbatim(),
    ]
}

/// Create field mappings for the per-owner document feed
#[must_use]
pub fn create_document_mappings() -> Vec<FieldMapping> {
    vec![
        FieldMapping::new(EntryField::RegistryNumber, &["noKK", "nomorKK"]),
        FieldMapping::new(EntryField::HeadOfHouseholdName, &["namaKepalaKeluarga", "nama"]),
        // Most specific first
        FieldMapping::new(EntryField::Address, &["alamatLengkap", "alamat", "address"]),
        FieldMapping::new(EntryField::Province, &["provinsi"]),
        FieldMapping::new(EntryField::Regency, &["kabupaten"]),
        FieldMapping::new(EntryField::District, &["kecamatan"]),
        FieldMapping::new(EntryField::Village, &["desa", "kelurahan"]),
        FieldMapping::new(EntryField::RingZone, &["ring"]),
        FieldMapping::new(EntryField::DomicileStatus, &["statusDomisili", "domisili"]),
        FieldMapping::new(EntryField::IssueDate, &["tanggalTerbit", "tanggalDibuat"]),
    ]
}
