//! Dataset loaded once from a JSON or CSV file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::domain::record::Record;
use crate::repository::RecordReader;
use crate::repository::errors::{DatasetError, DatasetResult};

/// Immutable in-memory dataset. Cloning shares the records.
#[derive(Debug, Clone)]
pub struct FileRecordRepository {
    records: Arc<[Record]>,
}

impl FileRecordRepository {
    /// Loads records from `path`, choosing the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let reader = BufReader::new(File::open(path)?);
        let records = match extension.as_str() {
            "json" => Self::parse_json(reader)?,
            "csv" => Self::parse_csv(reader)?,
            _ => return Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        };

        let repo = Self::from_records(records)?;
        log::info!(
            "Loaded {} records from {}",
            repo.records.len(),
            path.display()
        );
        Ok(repo)
    }

    /// Wraps records already in memory, rejecting duplicate ids.
    pub fn from_records(records: Vec<Record>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(record) = records.iter().find(|record| !seen.insert(record.id)) {
            return Err(DatasetError::DuplicateId(record.id));
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn parse_json<R: Read>(reader: R) -> DatasetResult<Vec<Record>> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn parse_csv<R: Read>(reader: R) -> DatasetResult<Vec<Record>> {
        let mut rdr = csv::Reader::from_reader(reader);
        let records = rdr
            .deserialize::<Record>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordReader for FileRecordRepository {
    fn list_records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_parses() {
        let json = r#"[
            {"id": 1, "name": "Bob", "date": "2020-01-02", "address": "Elm", "phone": "1"},
            {"id": 2, "name": "amy"}
        ]"#;

        let records = FileRecordRepository::parse_json(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new(2, "amy", "", "", ""));
    }

    #[test]
    fn csv_with_header_parses() {
        let csv = "id,name,date,address,phone\n1,Bob,2020-01-02,\"Elm St, 4\",555\n";

        let records = FileRecordRepository::parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![Record::new(1, "Bob", "2020-01-02", "Elm St, 4", "555")]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = FileRecordRepository::from_records(vec![
            Record::new(1, "a", "", "", ""),
            Record::new(1, "b", "", "", ""),
        ]);

        assert!(matches!(result, Err(DatasetError::DuplicateId(1))));
    }
}
