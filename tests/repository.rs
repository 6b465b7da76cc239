use std::io::Write;

use tempfile::Builder;

use user_table::domain::record::Record;
use user_table::repository::errors::DatasetError;
use user_table::repository::{FileRecordRepository, RecordReader};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_json_dataset_in_source_order() {
    let file = write_temp(
        ".json",
        r#"[
            {"id": 3, "name": "Carl", "date": "2019-11-30", "address": "Pine", "phone": "3"},
            {"id": 1, "name": "Bob", "date": "2020-01-02", "address": "Elm", "phone": "1"}
        ]"#,
    );

    let repo = FileRecordRepository::load(file.path()).unwrap();

    let ids: Vec<i64> = repo.list_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn loads_csv_dataset_with_missing_column() {
    let file = write_temp(".CSV", "id,name,address,phone\n1,Bob,Elm,555\n2,amy,,\n");

    let repo = FileRecordRepository::load(file.path()).unwrap();

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.list_records()[1], Record::new(2, "amy", "", "", ""));
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".txt", "[]");

    let result = FileRecordRepository::load(file.path());

    assert!(matches!(result, Err(DatasetError::UnsupportedFormat(_))));
}

#[test]
fn malformed_json_is_reported() {
    let file = write_temp(".json", "[{\"name\": \"no id\"}]");

    let result = FileRecordRepository::load(file.path());

    assert!(matches!(result, Err(DatasetError::Json(_))));
}

#[test]
fn missing_file_is_reported() {
    let result = FileRecordRepository::load("does/not/exist.json");

    assert!(matches!(result, Err(DatasetError::Io(_))));
}

#[test]
fn duplicate_ids_are_reported() {
    let file = write_temp(".json", r#"[{"id": 5}, {"id": 5}]"#);

    let result = FileRecordRepository::load(file.path());

    assert!(matches!(result, Err(DatasetError::DuplicateId(5))));
}
