//! In-memory registry backend
//!
//! Stores household aggregates and renders them in the two feed shapes the
//! real backend serves: administrative household cards with Indonesian field
//! names, and owner documents wrapping the household under `data`. Used by
//! the demo binary and by tests, which can inject failures per operation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::future::BoxFuture;
use rustc_hash::FxHashMap;
use serde_json::{Value, json};

use super::RegistryBackend;
use crate::error::{RegistryError, Result};
use crate::models::HouseholdRecord;

/// Document type the in-memory backend uses for household cards
pub const HOUSEHOLD_DOCUMENT_TYPE: &str = "household_card";

/// Backend operation, for call counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOp {
    AllHouseholdCards,
    MyDocuments,
    Create,
    Update,
    Delete,
}

/// Failure to report from an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectedFailure {
    Backend(String),
    AuthExpired,
}

impl InjectedFailure {
    fn to_error(&self) -> RegistryError {
        match self {
            Self::Backend(message) => RegistryError::backend(message.clone()),
            Self::AuthExpired => RegistryError::AuthExpired,
        }
    }
}

#[derive(Debug, Clone)]
struct StoredHousehold {
    id: String,
    record: HouseholdRecord,
}

#[derive(Debug, Default)]
struct BackendState {
    households: Vec<StoredHousehold>,
    other_documents: Vec<Value>,
    next_id: usize,
    calls: FxHashMap<BackendOp, usize>,
    failures: FxHashMap<BackendOp, InjectedFailure>,
}

impl BackendState {
    fn record_call(&mut self, op: BackendOp) -> Result<()> {
        *self.calls.entry(op).or_default() += 1;
        match self.failures.get(&op) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn insert(&mut self, record: HouseholdRecord) -> String {
        self.next_id += 1;
        let id = format!("kk-{}", self.next_id);
        self.households.push(StoredHousehold {
            id: id.clone(),
            record,
        });
        id
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.households
            .iter()
            .position(|stored| stored.id == id)
            .ok_or_else(|| RegistryError::backend(format!("Household card '{id}' not found")))
    }
}

/// Registry backend held in memory
#[derive(Debug, Default)]
pub struct InMemoryRegistryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryRegistryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a household; returns the backend for chaining
    #[must_use]
    pub fn with_household(self, record: HouseholdRecord) -> Self {
        self.lock().insert(record);
        self
    }

    /// Seed a non-household document into the owner feed
    #[must_use]
    pub fn with_document(self, document: Value) -> Self {
        self.lock().other_documents.push(document);
        self
    }

    /// Make every call to `op` fail until cleared
    pub fn fail(&self, op: BackendOp, failure: InjectedFailure) {
        self.lock().failures.insert(op, failure);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Number of calls made to `op`, including failed ones
    #[must_use]
    pub fn call_count(&self, op: BackendOp) -> usize {
        self.lock().calls.get(&op).copied().unwrap_or_default()
    }

    /// Backend handles of stored households, in insertion order
    #[must_use]
    pub fn household_ids(&self) -> Vec<String> {
        self.lock().households.iter().map(|stored| stored.id.clone()).collect()
    }

    /// Stored household by backend handle
    #[must_use]
    pub fn household(&self, id: &str) -> Option<HouseholdRecord> {
        self.lock()
            .households
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| stored.record.clone())
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run<T: Send + 'static>(
        &self,
        op: BackendOp,
        action: impl FnOnce(&mut BackendState) -> Result<T>,
    ) -> BoxFuture<'static, Result<T>> {
        let result = {
            let mut state = self.lock();
            state.record_call(op).and_then(|()| action(&mut state))
        };
        async move { result }.boxed()
    }
}

/// Header fields shared by both feed shapes
fn household_fields(record: &HouseholdRecord) -> serde_json::Map<String, Value> {
    let value = json!({
        "noKK": record.registry_number,
        "namaKepalaKeluarga": record.head_of_household_name,
        "provinsi": record.location.province,
        "kabupaten": record.location.regency,
        "kecamatan": record.location.district,
        "desa": record.location.village,
        "ring": record.ring_zone,
        "statusDomisili": record.domicile_status.as_str(),
        "tanggalTerbit": record.issue_date.map(|date| date.format("%Y-%m-%d").to_string()),
        "anggota": serde_json::to_value(&record.members).unwrap_or_else(|_| json!([])),
    });
    match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

/// Render a stored household as an administrative household card
fn household_card(stored: &StoredHousehold) -> Value {
    let mut fields = household_fields(&stored.record);
    fields.insert("_id".to_string(), json!(stored.id));
    fields.insert("alamat".to_string(), json!(stored.record.address));
    Value::Object(fields)
}

/// Render a stored household as an owner document
fn household_document(stored: &StoredHousehold) -> Value {
    let mut data = household_fields(&stored.record);
    data.insert("alamatLengkap".to_string(), json!(stored.record.address));
    json!({
        "_id": format!("doc-{}", stored.id),
        "documentType": HOUSEHOLD_DOCUMENT_TYPE,
        "recordId": stored.id,
        "data": data,
    })
}

impl RegistryBackend for InMemoryRegistryBackend {
    fn all_household_cards(&self) -> BoxFuture<'_, Result<Vec<Value>>> {
        self.run(BackendOp::AllHouseholdCards, |state| {
            Ok(state.households.iter().map(household_card).collect())
        })
    }

    fn my_documents(&self) -> BoxFuture<'_, Result<Vec<Value>>> {
        self.run(BackendOp::MyDocuments, |state| {
            Ok(state
                .households
                .iter()
                .map(household_document)
                .chain(state.other_documents.iter().cloned())
                .collect())
        })
    }

    fn create_household<'a>(&'a self, record: &'a HouseholdRecord) -> BoxFuture<'a, Result<()>> {
        let record = record.clone();
        self.run(BackendOp::Create, move |state| {
            if state
                .households
                .iter()
                .any(|stored| stored.record.registry_number == record.registry_number)
            {
                return Err(RegistryError::backend(format!(
                    "Registry number {} already exists",
                    record.registry_number
                )));
            }
            state.insert(record);
            Ok(())
        })
    }

    fn update_household<'a>(
        &'a self,
        source_record_id: &'a str,
        record: &'a HouseholdRecord,
    ) -> BoxFuture<'a, Result<()>> {
        let record = record.clone();
        self.run(BackendOp::Update, move |state| {
            let index = state.position(source_record_id)?;
            state.households[index].record = record;
            Ok(())
        })
    }

    fn delete_household<'a>(&'a self, source_record_id: &'a str) -> BoxFuture<'a, Result<()>> {
        self.run(BackendOp::Delete, move |state| {
            let index = state.position(source_record_id)?;
            state.households.remove(index);
            Ok(())
        })
    }
}
