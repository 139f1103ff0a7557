use rollbookd::error::StoreError;
use rollbookd::store::{self, AttendanceRecord, ClassRecord, Document, StudentRecord};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn sample_document() -> Document {
    let mut sam = StudentRecord {
        name: "Sam".to_string(),
        phone: "0500000000".to_string(),
        ..Default::default()
    };
    sam.days.insert(
        "2026-10-17".to_string(),
        AttendanceRecord {
            present: false,
            note: "مريض".to_string(),
        },
    );
    sam.days.insert(
        "2026-10-18".to_string(),
        AttendanceRecord {
            present: true,
            note: "late".to_string(),
        },
    );
    let mut math = ClassRecord {
        teacher: "Ms. A".to_string(),
        ..Default::default()
    };
    math.students.insert("1".to_string(), sam);
    math.students.insert(
        "2".to_string(),
        StudentRecord {
            name: "ليلى".to_string(),
            ..Default::default()
        },
    );

    let mut doc = Document::new();
    doc.insert("Math".to_string(), math);
    doc.insert(
        "علوم".to_string(),
        ClassRecord {
            teacher: "أ. خالد".to_string(),
            ..Default::default()
        },
    );
    doc
}

#[tokio::test]
async fn save_then_load_yields_equal_document() {
    let dir = temp_dir("rollbook-store-roundtrip");
    let path = dir.join("data.json");

    let doc = sample_document();
    store::save(&path, &doc).await.expect("save");
    let loaded = store::load(&path).await.expect("load");
    assert_eq!(loaded, doc);

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("ليلى"), "non-ASCII should be written verbatim");
    assert!(text.contains("\n  \"Math\": {"), "expected two-space indentation");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn absent_file_loads_empty() {
    let dir = temp_dir("rollbook-store-absent");
    let path = dir.join("missing.json");
    assert!(store::load(&path).await.expect("load").is_empty());
    assert!(store::load_or_empty(&path).await.is_empty());
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn corrupt_file_is_an_error_but_reads_empty_on_request_path() {
    let dir = temp_dir("rollbook-store-corrupt");
    let path = dir.join("data.json");
    std::fs::write(&path, "{ not json").expect("write corrupt");

    match store::load(&path).await {
        Err(StoreError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(store::load_or_empty(&path).await.is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn save_overwrites_and_creates_parent_dirs() {
    let dir = temp_dir("rollbook-store-overwrite");
    let path = dir.join("nested").join("data.json");

    store::save(&path, &sample_document()).await.expect("first save");
    store::save(&path, &Document::new()).await.expect("second save");
    assert!(store::load(&path).await.expect("load").is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn legacy_student_without_days_loads() {
    let dir = temp_dir("rollbook-store-legacy");
    let path = dir.join("data.json");
    std::fs::write(
        &path,
        r#"{"Math": {"teacher": "Ms. A", "students": {"1": {"name": "Sam", "phone": "1"}}}}"#,
    )
    .expect("write");

    let doc = store::load(&path).await.expect("load");
    assert!(doc["Math"].students["1"].days.is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn records_missing_optional_fields_load_with_defaults() {
    let dir = temp_dir("rollbook-store-partial");
    let path = dir.join("data.json");
    std::fs::write(
        &path,
        r#"{
          "Math": {"students": {"1": {"name": "Sam", "days": {"2026-10-17": {"note": "x"}}}}},
          "Art": {"teacher": "Mr. B", "students": {}}
        }"#,
    )
    .expect("write");

    let doc = store::load(&path).await.expect("partial records should still load");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["Math"].teacher, "");
    let rec = &doc["Math"].students["1"].days["2026-10-17"];
    assert!(!rec.present);
    assert_eq!(rec.note, "x");
    assert_eq!(store::load_or_empty(&path).await.len(), 2);

    let _ = std::fs::remove_dir_all(dir);
}
