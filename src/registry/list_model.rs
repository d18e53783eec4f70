//! Registry list model
//!
//! Owns the normalized household list and the submission state of the
//! create and edit forms. Every successful write is followed by a full
//! reload so the list always reflects the backend's own shape.

use std::time::Instant;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use super::normalize::RecordNormalizer;
use super::submission::SubmissionTracker;
use super::validation::validate_household;
use super::{RegistryBackend, source_name};
use crate::config::RegistryConfig;
use crate::error::util::BackendResultExt;
use crate::error::{MutationKind, RegistryError, Result};
use crate::filter::filter_entries;
use crate::models::{AccessRole, HouseholdRecord, NormalizedListEntry};
use crate::utils::logging::log::{log_operation_complete, log_operation_start};

/// Result of a submit call that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the write
    Submitted,
    /// Another submission was in flight; nothing was sent
    Ignored,
}

/// In-memory household list backed by a registry backend
#[derive(Debug)]
pub struct RegistryListModel<B> {
    backend: B,
    normalizer: RecordNormalizer,
    role: AccessRole,
    entries: Vec<NormalizedListEntry>,
    submission: SubmissionTracker,
}

impl<B: RegistryBackend> RegistryListModel<B> {
    /// Create an empty model with default configuration
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &RegistryConfig::default())
    }

    pub fn with_config(backend: B, config: &RegistryConfig) -> Self {
        Self {
            backend,
            normalizer: RecordNormalizer::new(config),
            role: AccessRole::Standard,
            entries: Vec::new(),
            submission: SubmissionTracker::new(config.success_reset_delay),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Role of the last load; reloads after a write use it
    #[must_use]
    pub const fn role(&self) -> AccessRole {
        self.role
    }

    #[must_use]
    pub fn entries(&self) -> &[NormalizedListEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn submission(&self) -> &SubmissionTracker {
        &self.submission
    }

    pub fn submission_mut(&mut self) -> &mut SubmissionTracker {
        &mut self.submission
    }

    /// Fetch the feed for `role` and replace the list wholesale
    ///
    /// A failed fetch is logged and leaves an empty list. Only an expired
    /// session is returned as an error, with the list left as it was.
    pub async fn load(&mut self, role: AccessRole) -> Result<usize> {
        let start = Instant::now();
        let subject = source_name(role);
        self.role = role;
        log_operation_start("Loading", subject);

        match self.backend.fetch_for(role).await.as_fetch(subject) {
            Ok(raw) => {
                self.entries = self.normalizer.normalize(role, &raw);
                log_operation_complete("loaded", subject, self.entries.len(), Some(start.elapsed()));
                Ok(self.entries.len())
            }
            Err(RegistryError::AuthExpired) => Err(RegistryError::AuthExpired),
            Err(e) => {
                log::error!("{e}");
                self.entries.clear();
                Ok(0)
            }
        }
    }

    /// Reload with the role of the last load
    pub async fn reload(&mut self) -> Result<usize> {
        self.load(self.role).await
    }

    /// Entries matching a free-text term, in list order
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<&NormalizedListEntry> {
        filter_entries(&self.entries, term)
    }

    /// Create a household card
    ///
    /// Validation failures are returned before anything is sent.
    pub async fn create(&mut self, record: &HouseholdRecord) -> Result<SubmitOutcome> {
        if self.submission.is_submitting() {
            log::debug!("Create ignored: a submission is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }
        self.check(record)?;

        if !self.submission.begin() {
            return Ok(SubmitOutcome::Ignored);
        }
        let result = self
            .backend
            .create_household(record)
            .await
            .as_mutation(MutationKind::Create);
        self.finish(MutationKind::Create, &record.registry_number, result)
            .await
    }

    /// Replace the household card behind `source_record_id`
    pub async fn update(
        &mut self,
        source_record_id: &str,
        record: &HouseholdRecord,
    ) -> Result<SubmitOutcome> {
        if self.submission.is_submitting() {
            log::debug!("Update ignored: a submission is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }
        self.check(record)?;

        if !self.submission.begin() {
            return Ok(SubmitOutcome::Ignored);
        }
        let result = self
            .backend
            .update_household(source_record_id, record)
            .await
            .as_mutation(MutationKind::Update);
        self.finish(MutationKind::Update, source_record_id, result).await
    }

    /// Delete the household card behind `source_record_id`
    pub async fn delete(&mut self, source_record_id: &str) -> Result<SubmitOutcome> {
        if !self.submission.begin() {
            return Ok(SubmitOutcome::Ignored);
        }
        let result = self
            .backend
            .delete_household(source_record_id)
            .await
            .as_mutation(MutationKind::Delete);
        self.finish(MutationKind::Delete, source_record_id, result).await
    }

    fn check(&mut self, record: &HouseholdRecord) -> Result<()> {
        validate_household(record).map_err(|e| {
            log::debug!("Submission refused: {e}");
            self.submission.reject(e.to_string());
            RegistryError::from(e)
        })
    }

    /// Settle the submission after the backend answered
    ///
    /// A write is only reported as a success once the reload after it went
    /// through; a reload failure moves the tracker back to `Idle`.
    async fn finish(
        &mut self,
        action: MutationKind,
        subject: &str,
        result: Result<()>,
    ) -> Result<SubmitOutcome> {
        match result {
            Ok(()) => {
                log::info!("Household card {subject}: {action} succeeded");
                if let Err(e) = self.reload().await {
                    log::warn!("Reload after {action} failed: {e}");
                    self.submission.fail(e.user_message());
                    return Err(e);
                }
                self.submission.succeed();
                Ok(SubmitOutcome::Submitted)
            }
            Err(e) => {
                log::warn!("{e}");
                self.submission.fail(e.user_message());
                Err(e)
            }
        }
    }

    /// Household counts per ring zone, largest first, ties by label
    #[must_use]
    pub fn ring_summary(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for entry in &self.entries {
            *counts.entry(entry.ring_zone.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(zone, count)| (zone.to_string(), count))
            .collect()
    }
}
