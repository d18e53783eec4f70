use chrono::NaiveDate;
use family_card::models::{AccessRole, DomicileStatus, Sex};
use family_card::utils::test::fixtures::{admin_card, household_document, other_document};
use family_card::{RecordNormalizer, RegistryConfig};
use serde_json::json;

use crate::utils::init_logging;

#[test]
fn test_standard_feed_keeps_household_cards_only() {
    init_logging();
    let raw = vec![
        household_document("doc-1", "kk-1", "7404010101900001", "Budi Santoso"),
        other_document("doc-2", "birth_certificate"),
        household_document("doc-3", "kk-3", "7404010101900003", "Siti Aminah"),
        other_document("doc-4", "domicile_letter"),
        household_document("doc-5", "kk-5", "7404010101900005", "Andi Wijaya"),
    ];

    let entries = RecordNormalizer::default().normalize(AccessRole::Standard, &raw);

    assert_eq!(entries.len(), 3);
    let ids: Vec<_> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, ["doc-1", "doc-3", "doc-5"]);
}

#[test]
fn test_document_fields_are_reconciled() {
    let raw = vec![household_document("doc-1", "kk-1", "7404010101900001", "Budi Santoso")];

    let entries = RecordNormalizer::default().normalize(AccessRole::Standard, &raw);
    let entry = &entries[0];

    assert_eq!(entry.id, "doc-1");
    assert_eq!(entry.source_record_id, "kk-1");
    assert_eq!(entry.registry_number, "7404010101900001");
    assert_eq!(entry.address, "Jl. Pelabuhan No. 3, Wolo");
    assert_eq!(entry.location.village, "Lana");
    assert_eq!(entry.domicile_status, DomicileStatus::Migrant);
    assert_eq!(entry.issue_date, NaiveDate::from_ymd_opt(2021, 4, 12));
    assert!(entry.ring_zone.starts_with("Ring-I -"));
    assert!(entry.members.is_empty());
}

#[test]
fn test_alias_precedence() {
    let raw = vec![
        json!({
            "_id": "doc-1",
            "documentType": "household_card",
            "data": {
                "noKK": "7404010101900001",
                "alamatLengkap": "",
                "alamat": "Jl. Singkat",
                "address": "Short St.",
                "domisili": "pendatang",
            },
        }),
        json!({
            "_id": "doc-2",
            "documentType": "household_card",
            "data": {
                "alamatLengkap": "Jl. Lengkap 1",
                "alamat": "Jl. Singkat",
                "statusDomisili": "native_resident",
                "domisili": "pendatang",
            },
        }),
        json!({
            "_id": "doc-3",
            "documentType": "household_card",
            "data": { "address": "Only St." },
        }),
    ];

    let entries = RecordNormalizer::default().normalize(AccessRole::Standard, &raw);

    assert_eq!(entries[0].address, "Jl. Singkat");
    assert_eq!(entries[0].domicile_status, DomicileStatus::Migrant);
    assert_eq!(entries[1].address, "Jl. Lengkap 1");
    assert_eq!(entries[1].domicile_status, DomicileStatus::NativeResident);
    assert_eq!(entries[2].address, "Only St.");
    assert_eq!(entries[2].domicile_status, DomicileStatus::NativeResident);
}

#[test]
fn test_document_type_matching_is_lenient() {
    let raw = vec![
        json!({ "_id": "a", "jenisDokumen": "Household_Card", "noKK": "7404010101900001" }),
        json!({ "_id": "b", "documentType": " HOUSEHOLD_CARD " }),
        json!({ "_id": "c" }),
    ];

    let entries = RecordNormalizer::default().normalize(AccessRole::Standard, &raw);

    assert_eq!(entries.len(), 2);
    // Without a payload the document itself is read
    assert_eq!(entries[0].registry_number, "7404010101900001");
    // Without a record id the document id is the mutation target
    assert_eq!(entries[0].source_record_id, "a");
}

#[test]
fn test_privileged_feed_is_passed_through() {
    let mut tagged = admin_card("kk-9", "7404010101900009", "Rina", "Ulu Rina");
    tagged["documentType"] = json!("birth_certificate");
    let raw = vec![
        admin_card("kk-1", "7404010101900001", "Budi Santoso", "Lana"),
        admin_card("kk-2", "7404010101900002", "Siti Aminah", "Donggala"),
        tagged,
    ];

    let entries = RecordNormalizer::default().normalize(AccessRole::Privileged, &raw);

    assert_eq!(entries.len(), 3);
    let entry = &entries[0];
    assert_eq!(entry.id, "kk-1");
    assert_eq!(entry.source_record_id, "kk-1");
    assert_eq!(entry.head_of_household_name, "Budi Santoso");
    assert_eq!(entry.address, "Jl. Trans Sulawesi");
    assert_eq!(entry.issue_date, NaiveDate::from_ymd_opt(2021, 4, 12));
    assert_eq!(entry.members.len(), 1);
    assert_eq!(entry.members[0].sex, Sex::Male);
}

#[test]
fn test_stored_ring_zone_is_kept() {
    let mut card = admin_card("kk-1", "7404010101900001", "Budi Santoso", "Lana");
    card["ring"] = json!("Ring-III - Kabupaten Kolaka");

    let entries = RecordNormalizer::default().normalize(AccessRole::Privileged, &[card]);

    assert_eq!(entries[0].ring_zone, "Ring-III - Kabupaten Kolaka");
}

#[test]
fn test_members_default_to_empty() {
    let mut without = admin_card("kk-1", "7404010101900001", "Budi", "Lana");
    without.as_object_mut().unwrap().remove("anggota");
    let mut null_members = admin_card("kk-2", "7404010101900002", "Siti", "Lana");
    null_members["anggota"] = json!(null);
    let mut not_a_list = admin_card("kk-3", "7404010101900003", "Andi", "Lana");
    not_a_list["anggota"] = json!("none");

    let entries = RecordNormalizer::default()
        .normalize(AccessRole::Privileged, &[without, null_members, not_a_list]);

    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.members.is_empty()));
}

#[test]
fn test_malformed_members_are_skipped() {
    let mut card = admin_card("kk-1", "7404010101900001", "Budi", "Lana");
    card["anggota"] = json!([
        { "fullName": "Budi", "nationalId": "7404010101900001", "maritalStatus": "Kawin", "marriageDate": "18-06-2005" },
        "not a member",
        { "fullName": "Siti", "birthDate": "garbage" },
    ]);

    let entries = RecordNormalizer::default().normalize(AccessRole::Privileged, &[card]);
    let members = &entries[0].members;

    assert_eq!(members.len(), 2);
    assert!(members[0].is_married());
    assert_eq!(members[0].marriage_date, NaiveDate::from_ymd_opt(2005, 6, 18));
    assert_eq!(members[1].birth_date, None);
}

#[test]
fn test_configured_date_formats_and_document_type() {
    let config = RegistryConfig {
        household_document_type: "kartu_keluarga".to_string(),
        date_formats: vec!["%d.%m.%Y".to_string()],
        ..RegistryConfig::default()
    };
    let raw = vec![
        json!({ "_id": "a", "documentType": "kartu_keluarga", "data": { "tanggalTerbit": "12.04.2021" } }),
        household_document("b", "kk-b", "7404010101900002", "Siti"),
    ];

    let entries = RecordNormalizer::new(&config).normalize(AccessRole::Standard, &raw);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].issue_date, NaiveDate::from_ymd_opt(2021, 4, 12));
}
