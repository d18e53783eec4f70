use std::time::Duration;

use family_card::error::{MutationKind, RegistryError, ValidationError};
use family_card::models::{AccessRole, RegionLevel};
use family_card::registry::memory::{BackendOp, InMemoryRegistryBackend, InjectedFailure};
use family_card::registry::{
    RegistryBackend, RegistryListModel, SubmissionState, SubmitOutcome,
};
use family_card::RegistryConfig;
use serde_json::json;

use crate::utils::{household, init_logging, seeded_backend};

async fn loaded_model(role: AccessRole) -> RegistryListModel<InMemoryRegistryBackend> {
    init_logging();
    let mut model = RegistryListModel::new(seeded_backend());
    assert_eq!(model.load(role).await.unwrap(), 3);
    model
}

#[tokio::test]
async fn test_load_dispatches_on_role() {
    let model = loaded_model(AccessRole::Privileged).await;
    assert_eq!(model.backend().call_count(BackendOp::AllHouseholdCards), 1);
    assert_eq!(model.backend().call_count(BackendOp::MyDocuments), 0);

    let model = loaded_model(AccessRole::Standard).await;
    assert_eq!(model.backend().call_count(BackendOp::AllHouseholdCards), 0);
    assert_eq!(model.backend().call_count(BackendOp::MyDocuments), 1);
    assert_eq!(model.entries()[0].id, "doc-kk-1");
    assert_eq!(model.entries()[0].source_record_id, "kk-1");
}

#[tokio::test]
async fn test_standard_load_drops_other_documents() {
    init_logging();
    let backend = seeded_backend()
        .with_document(json!({ "_id": "x1", "documentType": "birth_certificate" }))
        .with_document(json!({ "_id": "x2", "documentType": "domicile_letter" }));
    let mut model = RegistryListModel::new(backend);

    assert_eq!(model.load(AccessRole::Standard).await.unwrap(), 3);
}

#[tokio::test]
async fn test_load_replaces_list_wholesale() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    model.backend().delete_household("kk-2").await.unwrap();

    assert_eq!(model.load(AccessRole::Privileged).await.unwrap(), 2);
    assert!(model.entries().iter().all(|entry| entry.source_record_id != "kk-2"));
}

#[tokio::test]
async fn test_filter_by_exact_registry_number() {
    let model = loaded_model(AccessRole::Privileged).await;

    let found = model.filter("1234567890123456");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].registry_number, "1234567890123456");
    // The underlying list is untouched
    assert_eq!(model.entries().len(), 3);
    assert_eq!(model.filter("").len(), 3);
    assert_eq!(model.filter("SITI").len(), 1);
}

#[tokio::test]
async fn test_fifteen_digit_registry_number_never_reaches_backend() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let record = household("740401010190000", "Rina");

    let result = model.create(&record).await;

    assert!(matches!(
        result,
        Err(RegistryError::Validation(ValidationError::RegistryNumberFormat))
    ));
    assert_eq!(model.backend().call_count(BackendOp::Create), 0);
    assert_eq!(model.submission().state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_padded_registry_number_never_reaches_backend() {
    let mut model = loaded_model(AccessRole::Privileged).await;

    let result = model.create(&household(" 1234567890123456", "Rina")).await;

    assert!(matches!(
        result,
        Err(RegistryError::Validation(ValidationError::RegistryNumberFormat))
    ));
    assert_eq!(model.backend().call_count(BackendOp::Create), 0);
    assert_eq!(model.entries().len(), 3);
    assert_eq!(model.filter("1234567890123456").len(), 1);
    assert_eq!(
        model.submission().last_error(),
        Some("Registry number must be exactly 16 digits")
    );
}

#[tokio::test]
async fn test_sixteen_digit_registry_number_is_submitted() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let record = household("7404010101900004", "Rina");

    let outcome = model.create(&record).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(model.backend().call_count(BackendOp::Create), 1);
    assert_eq!(model.submission().state(), SubmissionState::Success);
    // Reloaded from the backend
    assert_eq!(model.backend().call_count(BackendOp::AllHouseholdCards), 2);
    assert_eq!(model.entries().len(), 4);
    assert_eq!(model.filter("7404010101900004").len(), 1);
}

#[tokio::test]
async fn test_validation_stops_at_first_rule() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let mut record = household("7404010101900004", "Rina");
    record.location.district.clear();
    record.location.village.clear();
    record.members[0].national_id = "12".to_string();

    let err = model.create(&record).await.unwrap_err();

    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::RegionMissing(RegionLevel::District))
    ));
    assert_eq!(err.user_message(), "District must be selected");
    assert_eq!(model.backend().call_count(BackendOp::Create), 0);
}

#[tokio::test]
async fn test_member_rules_block_submission() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let mut record = household("7404010101900004", "Rina");
    record.members.push(family_card::MemberRecord::new("Ayu", "74040101019000"));

    let err = model.create(&record).await.unwrap_err();

    assert_eq!(
        err.user_message(),
        "Member #2: national id must be exactly 16 digits"
    );
    assert_eq!(model.backend().call_count(BackendOp::Create), 0);
}

#[tokio::test]
async fn test_update_targets_source_record_and_reloads() {
    let mut model = loaded_model(AccessRole::Standard).await;
    let entry = model.entries()[1].clone();
    let mut record = entry.to_record();
    record.head_of_household_name = "Siti Aminah Putri".to_string();

    let outcome = model.update(&entry.source_record_id, &record).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(
        model.backend().household("kk-2").unwrap().head_of_household_name,
        "Siti Aminah Putri"
    );
    assert_eq!(model.backend().call_count(BackendOp::MyDocuments), 2);
    assert_eq!(model.entries()[1].head_of_household_name, "Siti Aminah Putri");
}

#[tokio::test]
async fn test_delete_reloads() {
    let mut model = loaded_model(AccessRole::Privileged).await;

    let outcome = model.delete("kk-1").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(model.entries().len(), 2);
    assert!(model.filter("1234567890123456").is_empty());
}

#[tokio::test]
async fn test_failed_mutation_leaves_list_unchanged() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    model
        .backend()
        .fail(BackendOp::Delete, InjectedFailure::Backend("503 Service Unavailable".to_string()));
    let before = model.entries().to_vec();

    let err = model.delete("kk-1").await.unwrap_err();

    assert!(matches!(
        err,
        RegistryError::Mutation {
            action: MutationKind::Delete,
            ..
        }
    ));
    assert_eq!(model.entries(), before.as_slice());
    assert_eq!(model.submission().state(), SubmissionState::Idle);
    assert_eq!(
        model.submission().last_error(),
        Some("Backend error: 503 Service Unavailable")
    );
    // No reload after a failure
    assert_eq!(model.backend().call_count(BackendOp::AllHouseholdCards), 1);
}

#[tokio::test]
async fn test_duplicate_registry_number_is_surfaced() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let record = household("1234567890123456", "Budi Santoso");

    let err = model.create(&record).await.unwrap_err();

    assert!(err.user_message().contains("already exists"));
    assert_eq!(model.entries().len(), 3);
}

#[tokio::test]
async fn test_update_of_unknown_record_fails() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let record = household("7404010101900004", "Rina");

    let err = model.update("kk-404", &record).await.unwrap_err();

    assert!(matches!(
        err,
        RegistryError::Mutation {
            action: MutationKind::Update,
            ..
        }
    ));
}

#[tokio::test]
async fn test_fetch_failure_yields_empty_list() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    model.backend().fail(
        BackendOp::AllHouseholdCards,
        InjectedFailure::Backend("connection reset".to_string()),
    );

    assert_eq!(model.load(AccessRole::Privileged).await.unwrap(), 0);
    assert!(model.entries().is_empty());
}

#[tokio::test]
async fn test_auth_expired_is_propagated_from_load() {
    let mut model = loaded_model(AccessRole::Standard).await;
    model.backend().fail(BackendOp::MyDocuments, InjectedFailure::AuthExpired);

    let err = model.load(AccessRole::Standard).await.unwrap_err();

    assert!(err.is_auth_expired());
    assert_eq!(model.entries().len(), 3);
}

#[tokio::test]
async fn test_auth_expired_is_propagated_from_mutations() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    model.backend().fail(BackendOp::Create, InjectedFailure::AuthExpired);

    let err = model
        .create(&household("7404010101900004", "Rina"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::AuthExpired));
    assert_eq!(model.submission().state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_auth_expired_on_reload_after_write() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    model
        .backend()
        .fail(BackendOp::AllHouseholdCards, InjectedFailure::AuthExpired);

    let err = model
        .create(&household("7404010101900004", "Rina"))
        .await
        .unwrap_err();

    assert!(err.is_auth_expired());
    // The write went through; the list still shows the last good load
    assert_eq!(model.backend().call_count(BackendOp::Create), 1);
    assert_eq!(model.entries().len(), 3);
    assert_eq!(model.submission().state(), SubmissionState::Idle);
    assert_eq!(
        model.submission().last_error(),
        Some(err.user_message().as_str())
    );
}

#[tokio::test]
async fn test_update_validation_failure_is_recorded() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    let mut record = household("7404010101900002", "Siti Aminah");
    record.location.village.clear();

    let result = model.update("kk-2", &record).await;

    assert!(matches!(
        result,
        Err(RegistryError::Validation(ValidationError::RegionMissing(RegionLevel::Village)))
    ));
    assert_eq!(model.backend().call_count(BackendOp::Update), 0);
    assert_eq!(model.submission().state(), SubmissionState::Idle);
    assert_eq!(model.submission().last_error(), Some("Village must be selected"));
}

#[tokio::test]
async fn test_submit_while_submitting_is_ignored() {
    let mut model = loaded_model(AccessRole::Privileged).await;
    assert!(model.submission_mut().begin());

    let create = model.create(&household("7404010101900004", "Rina")).await.unwrap();
    let delete = model.delete("kk-1").await.unwrap();

    assert_eq!(create, SubmitOutcome::Ignored);
    assert_eq!(delete, SubmitOutcome::Ignored);
    assert_eq!(model.backend().call_count(BackendOp::Create), 0);
    assert_eq!(model.backend().call_count(BackendOp::Delete), 0);
    assert_eq!(model.submission().state(), SubmissionState::Submitting);
}

#[tokio::test]
async fn test_success_reverts_to_idle_after_delay() {
    init_logging();
    let config = RegistryConfig {
        success_reset_delay: Duration::ZERO,
        ..RegistryConfig::default()
    };
    let mut model = RegistryListModel::with_config(seeded_backend(), &config);

    model.create(&household("7404010101900004", "Rina")).await.unwrap();

    assert_eq!(model.submission().state(), SubmissionState::Idle);
    assert!(model.submission_mut().settle());
}

#[tokio::test]
async fn test_ring_summary_counts_zones() {
    let model = loaded_model(AccessRole::Privileged).await;

    let summary = model.ring_summary();

    // Every seeded household sits in Donggala
    assert_eq!(summary.len(), 1);
    assert!(summary[0].0.starts_with("Ring-II -"));
    assert_eq!(summary[0].1, 3);
}
