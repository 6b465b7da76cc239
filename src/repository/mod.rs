use crate::domain::record::Record;

pub mod errors;
pub mod file;

pub use file::FileRecordRepository;

/// Read-only access to the dataset shown in the table.
pub trait RecordReader {
    /// All records in their source order.
    fn list_records(&self) -> &[Record];
}

impl RecordReader for Vec<Record> {
    fn list_records(&self) -> &[Record] {
        self
    }
}
