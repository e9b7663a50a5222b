//! `FileBackend` and `PersistenceStore` on a real directory.

use chrono::{TimeZone, Utc};
use luganda_lexicon::model::TestResult;
use luganda_lexicon::store::{
    FileBackend, PersistenceStore, StoreBackend, StoreError, FAVORITES_KEY, HISTORY_KEY,
    SCHEMA_VERSION,
};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn result(id: &str, score: u32) -> TestResult {
    TestResult {
        id: id.to_string(),
        date: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap().into(),
        score,
        total: 5,
        test_type: "Grammar Mastery".to_string(),
    }
}

#[test]
fn missing_record_reads_none() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();
    assert!(backend.read(HISTORY_KEY).unwrap().is_none());
}

#[test]
fn history_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let store = PersistenceStore::new(FileBackend::open(dir.path()).unwrap());

    let history = vec![result("b", 4), result("a", 2)];
    store.save_history(&history).unwrap();

    let path = dir.path().join(format!("{}.json", HISTORY_KEY));
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(raw["version"], SCHEMA_VERSION);
    assert_eq!(raw["items"][0]["type"], "Grammar Mastery");

    assert_eq!(store.load_history(), history);
}

#[test]
fn write_replaces_whole_value() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.write(FAVORITES_KEY, "a much longer first value").unwrap();
    backend.write(FAVORITES_KEY, "short").unwrap();

    assert_eq!(backend.read(FAVORITES_KEY).unwrap().as_deref(), Some("short"));
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
}

#[test]
fn keys_cannot_escape_the_directory() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    for key in ["../outside", "a/b", ""] {
        assert!(
            matches!(backend.write(key, "x"), Err(StoreError::InvalidKey(_))),
            "key {:?} accepted",
            key
        );
    }
}

#[test]
fn legacy_file_is_upgraded_on_next_save() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", HISTORY_KEY)),
        r#"[{"id":"1","date":"2026-03-01T10:00:00Z","score":5,"total":5,"type":"Grammar Mastery"}]"#,
    )
    .unwrap();
    let store = PersistenceStore::new(FileBackend::open(dir.path()).unwrap());

    let mut history = store.load_history();
    assert_eq!(history.len(), 1);
    history.insert(0, result("2", 3));
    store.save_history(&history).unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", HISTORY_KEY))).unwrap();
    assert!(raw.starts_with("{\"version\":1"));
    assert_eq!(store.load_history().len(), 2);
}

#[test]
fn concurrent_writers_leave_one_complete_value() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FileBackend::open(dir.path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let backend = backend.clone();
            thread::spawn(move || {
                let store = PersistenceStore::new(backend);
                store.save_history(&[result(&i.to_string(), i)]).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = PersistenceStore::new(backend);
    let history = store.load_history();
    assert_eq!(history.len(), 1);
}
