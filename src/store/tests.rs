use super::*;
use crate::record::{Alert, CleanlinessReport, Record};
use std::fs;
use tempfile::TempDir;

fn clean_record(location: &str, issue: &str) -> Record {
    Record::Clean(CleanlinessReport {
        location: location.to_string(),
        issue: issue.to_string(),
        time: String::new(),
    })
}

fn sos_record() -> Record {
    Record::Alert(Alert {
        kind: "SOS".to_string(),
        from: "DemoUser".to_string(),
        location: "Sector X".to_string(),
        time: String::new(),
        message: "Demo SOS triggered".to_string(),
    })
}

#[test]
fn test_with_defaults_has_sample_records() {
    let store = SessionStore::with_defaults();

    assert_eq!(store.len(CollectionKind::CleanReports), 2);
    assert_eq!(store.len(CollectionKind::LostFound), 1);
    assert_eq!(store.len(CollectionKind::Alerts), 1);
    assert_eq!(store.len(CollectionKind::Broadcasts), 1);
    assert_eq!(store.heatmap_points().len(), 5);

    assert_eq!(store.clean_reports()[0].location, "Ghat A - Sector 1");
    assert_eq!(store.alerts()[0].kind, "SOS");
    assert!(!store.broadcasts()[0].time.is_empty());
}

#[test]
fn test_append_adds_to_end_and_stamps_time() {
    let mut store = SessionStore::with_defaults();
    let before = store.clean_reports().to_vec();

    let stored = store
        .append(clean_record("Ghat C", "Garbage pile"))
        .expect("append failed");

    let reports = store.clean_reports();
    assert_eq!(reports.len(), before.len() + 1);
    // Previous records untouched, new one at the end
    assert_eq!(&reports[..before.len()], before.as_slice());
    let last = reports.last().unwrap();
    assert_eq!(last.location, "Ghat C");
    assert_eq!(last.issue, "Garbage pile");
    assert!(!last.time.is_empty());

    match stored {
        Record::Clean(r) => assert_eq!(r, *last),
        other => panic!("unexpected record variant: {:?}", other),
    }
}

#[test]
fn test_append_identical_content_always_adds() {
    let mut store = SessionStore::with_defaults();
    store.append(clean_record("Ghat C", "Garbage pile")).unwrap();
    store.append(clean_record("Ghat C", "Garbage pile")).unwrap();

    assert_eq!(store.len(CollectionKind::CleanReports), 4);
}

#[test]
fn test_append_validation_failure_leaves_collection_unchanged() {
    let mut store = SessionStore::with_defaults();
    let before = store.clean_reports().to_vec();

    let result = store.append(clean_record("", "Garbage pile"));

    assert!(result.is_err());
    assert_eq!(store.clean_reports(), before.as_slice());
}

#[test]
fn test_remove_at_preserves_order_of_remaining_records() {
    let mut store = SessionStore::with_defaults();
    store.append(sos_record()).unwrap();
    store.append(sos_record()).unwrap();
    // alerts: [seed, sos, sos]
    let before = store.alerts().to_vec();

    let removed = store
        .remove_at(CollectionKind::Alerts, 1)
        .expect("remove failed");

    let alerts = store.alerts();
    assert_eq!(alerts.len(), before.len() - 1);
    assert_eq!(alerts[0], before[0]);
    assert_eq!(alerts[1], before[2]);
    match removed {
        Record::Alert(a) => assert_eq!(a, before[1]),
        other => panic!("unexpected record variant: {:?}", other),
    }
}

#[test]
fn test_remove_at_out_of_range_is_rejected_without_side_effects() {
    let mut store = SessionStore::with_defaults();
    let before = store.alerts().to_vec();
    let len = before.len();

    let result = store.remove_at(CollectionKind::Alerts, len);

    assert_eq!(
        result.unwrap_err(),
        StoreError::OutOfRange {
            kind: CollectionKind::Alerts,
            position: len,
            len,
        }
    );
    assert_eq!(store.alerts(), before.as_slice());
}

#[test]
fn test_remove_at_on_emptied_collection_fails() {
    let mut store = SessionStore::with_defaults();
    store.remove_at(CollectionKind::Alerts, 0).unwrap();
    assert_eq!(store.len(CollectionKind::Alerts), 0);

    let result = store.remove_at(CollectionKind::Alerts, 0);
    assert!(result.is_err());
}

#[test]
fn test_initialize_loads_seed_files() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(seed::CLEANLINESS_SEED_FILE),
        r#"[
            {"location": "Ghat D", "issue": "Broken tap", "time": "2026-01-05 09:30:00"},
            {"location": "Sector 7", "issue": "Litter", "time": "2026-01-05 09:45:00"},
            {"location": "Ghat E", "issue": "Blocked drain", "time": "2026-01-05 10:00:00"}
        ]"#,
    )
    .unwrap();

    let store = SessionStore::initialize(dir.path());

    let reports = store.clean_reports();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].location, "Ghat D");
    assert_eq!(reports[0].time, "2026-01-05 09:30:00");
    // Collections without a seed file fall back to defaults
    assert_eq!(store.len(CollectionKind::LostFound), 1);
    assert_eq!(store.len(CollectionKind::Alerts), 1);
}

#[test]
fn test_initialize_missing_directory_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-dir");

    let store = SessionStore::initialize(&missing);

    assert_eq!(store.len(CollectionKind::CleanReports), 2);
    assert_eq!(store.len(CollectionKind::LostFound), 1);
    assert_eq!(store.len(CollectionKind::Alerts), 1);
    assert_eq!(store.len(CollectionKind::Broadcasts), 1);
}

#[test]
fn test_initialize_malformed_seed_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(seed::ALERTS_SEED_FILE), "{not json").unwrap();

    let store = SessionStore::initialize(dir.path());

    assert_eq!(store.len(CollectionKind::Alerts), 1);
    assert_eq!(store.alerts()[0].from, "User_123");
}

#[test]
fn test_seed_load_reports_source() {
    let dir = TempDir::new().unwrap();

    let defaulted = seed::alerts(dir.path());
    assert_eq!(defaulted.source, SeedSource::Defaults);

    fs::write(dir.path().join(seed::ALERTS_SEED_FILE), "[]").unwrap();
    let loaded = seed::alerts(dir.path());
    assert_eq!(loaded.source, SeedSource::File);
    assert!(loaded.records.is_empty());
}

#[test]
fn test_collection_kind_names_match_export_document() {
    assert_eq!(CollectionKind::CleanReports.as_str(), "clean_reports");
    assert_eq!(CollectionKind::LostFound.as_str(), "lostfound");
    assert_eq!(CollectionKind::Alerts.as_str(), "alerts");
    assert_eq!(CollectionKind::Broadcasts.as_str(), "broadcasts");
}
