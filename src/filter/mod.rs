//! Filtering of normalized list entries
//!
//! The list view offers one free-text box. A term matches an entry when it
//! occurs in the head-of-household name, the registry number or the village
//! name; fields are combined with OR only.

use std::fmt::Debug;

use crate::models::NormalizedListEntry;

/// A predicate over list entries
pub trait EntryFilter: Debug {
    /// Whether the entry is kept
    fn matches(&self, entry: &NormalizedListEntry) -> bool;

    /// Entries that pass, in their original order
    fn apply<'a>(&self, entries: &'a [NormalizedListEntry]) -> Vec<&'a NormalizedListEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Field a search term is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case-insensitive substring
    HeadOfHouseholdName,
    /// Exact or partial digits
    RegistryNumber,
    /// Case-insensitive substring
    Village,
}

impl SearchField {
    pub const ALL: [Self; 3] = [Self::HeadOfHouseholdName, Self::RegistryNumber, Self::Village];
}

/// Free-text search over the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    term_lower: String,
}

impl SearchFilter {
    /// Create a filter; surrounding whitespace is ignored
    #[must_use]
    pub fn new(term: &str) -> Self {
        let term = term.trim().to_string();
        let term_lower = term.to_lowercase();
        Self { term, term_lower }
    }

    /// An empty term matches everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the term matches one specific field
    #[must_use]
    pub fn matches_field(&self, entry: &NormalizedListEntry, field: SearchField) -> bool {
        match field {
            SearchField::HeadOfHouseholdName => entry
                .head_of_household_name
                .to_lowercase()
                .contains(&self.term_lower),
            SearchField::RegistryNumber => entry.registry_number.contains(&self.term),
            SearchField::Village => entry.location.village.to_lowercase().contains(&self.term_lower),
        }
    }
}

impl EntryFilter for SearchFilter {
    fn matches(&self, entry: &NormalizedListEntry) -> bool {
        self.is_empty()
            || SearchField::ALL
                .into_iter()
                .any(|field| self.matches_field(entry, field))
    }
}

/// Filter entries by a free-text term
#[must_use]
pub fn filter_entries<'a>(entries: &'a [NormalizedListEntry], term: &str) -> Vec<&'a NormalizedListEntry> {
    SearchFilter::new(term).apply(entries)
}
