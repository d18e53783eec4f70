use family_card::algorithm::zone::{
    KOLAKA_ZONE, NATIONAL_ZONE, RingDefinition, SULAWESI_ZONE, ZoneClassifier,
};
use family_card::models::Location;
use family_card::{RegistryConfig, classify};

#[test]
fn test_wolo_village_is_always_ring_one() {
    let cases = [
        Location::new("", "", "", "Wolo"),
        Location::new("Sulawesi Tenggara", "Kolaka", "Samaturu", "Ulu Wolo"),
        Location::new("DKI Jakarta", "Jakarta Pusat", "Menteng", "WOLO INDAH"),
        Location::new("Sulawesi Tenggara", "Konawe", "Lana", "  wolo  "),
    ];
    for location in &cases {
        let zone = classify(location);
        assert!(zone.starts_with("Ring-I -"), "{location:?} -> {zone}");
    }
}

#[test]
fn test_no_keyword_and_no_province_is_indonesia() {
    let cases = [
        Location::default(),
        Location::new("", "Jakarta Pusat", "Menteng", "Gondangdia"),
        Location::new("   ", "", "", "Kampung Baru"),
    ];
    for location in &cases {
        assert_eq!(classify(location), NATIONAL_ZONE);
    }
}

#[test]
fn test_donggala_scenario() {
    assert_eq!(
        classify(&Location::new("", "", "", "Donggala")),
        "Ring-II - Donggala, Ulu Lapao-pao, Laggomali, Lalonggopi, Iwoimopuro, Lalonaha, Lana, Ulu Rina"
    );
}

#[test]
fn test_fallback_chain() {
    assert_eq!(
        classify(&Location::new("Sulawesi Tenggara", "Kolaka", "Kolaka", "Sabilambo")),
        KOLAKA_ZONE
    );
    assert_eq!(
        classify(&Location::new("Sulawesi Tenggara", "Konawe", "Unaaha", "Tumpas")),
        SULAWESI_ZONE
    );
    assert_eq!(
        classify(&Location::new("Sulawesi Selatan", "Gowa", "Somba Opu", "Sungguminasa")),
        SULAWESI_ZONE
    );
    assert_eq!(
        classify(&Location::new("DKI Jakarta", "Jakarta Pusat", "Menteng", "Gondangdia")),
        "Ring-V - DKI Jakarta"
    );
}

#[test]
fn test_keyword_outranks_kolaka_regency() {
    // A ring keyword anywhere below the province wins over the Kolaka fallback
    let location = Location::new("Sulawesi Tenggara", "Kolaka Utara", "Lasusua", "Lalonggopi");
    assert!(classify(&location).starts_with("Ring-II -"));

    let location = Location::new("Sulawesi Tenggara", "Kolaka", "Pomalaa", "Dawi-dawi");
    assert!(classify(&location).starts_with("Ring-III -"));
}

#[test]
fn test_province_is_never_a_keyword_haystack() {
    let location = Location::new("Wolo", "", "", "");
    assert_eq!(classify(&location), "Ring-V - Wolo");
}

#[test]
fn test_ring_order_is_innermost_first() {
    // Village hits Ring-III, district hits Ring-I
    let location = Location::new("", "", "Wolo", "Latambaga");
    assert!(classify(&location).starts_with("Ring-I -"));
}

#[test]
fn test_classification_is_repeatable() {
    let location = Location::new("Sulawesi Tenggara", "Kolaka", "Samaturu", "Donggala");
    let first = classify(&location);
    for _ in 0..10 {
        assert_eq!(classify(&location), first);
    }
    assert_eq!(ZoneClassifier::default().classify(&location), first);
}

#[test]
fn test_configured_ring_table() {
    let config = RegistryConfig {
        ring_definitions: vec![RingDefinition::new("Ring-A", "Site A", [" Benteng "])],
        ..RegistryConfig::default()
    };
    let classifier = ZoneClassifier::new(config.ring_definitions);

    assert_eq!(
        classifier.classify(&Location::new("Sulawesi Selatan", "Selayar", "Benteng", "")),
        "Ring-A - Site A"
    );
    // The standard keywords are gone with the standard table
    assert_eq!(
        classifier.classify(&Location::new("", "", "", "Wolo")),
        NATIONAL_ZONE
    );
}

#[test]
fn test_reclassify_reports_changes_only() {
    let classifier = ZoneClassifier::default();
    let location = Location::new("", "", "", "Donggala");
    let mut zone = String::new();

    assert!(classifier.reclassify(&location, &mut zone));
    let stored = zone.clone();
    assert!(!classifier.reclassify(&location, &mut zone));
    assert_eq!(zone, stored);
}
