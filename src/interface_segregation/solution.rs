use std::fmt;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::error::{Result, SolidError};

lazy_static! {
    /// Records every seeded data source starts with.
    pub static ref SEED_RECORDS: Vec<Record> = vec![Record::new(1, "Jeff"), Record::new(2, "Luca")];
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    id: i32,
    name: String,
}

impl Record {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record{{Id={}, name='{}'}}", self.id, self.name)
    }
}

pub trait RecordReader {
    fn read_record(&self, id: i32) -> Result<Record>;
}

pub trait RecordWriter {
    fn write_record(&mut self, record: Record);
}

/// Backs both traits with one list. Duplicate ids are accepted; reads return
/// the first match.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    records: Vec<Record>,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn seeded() -> Self {
        Self::with_records(SEED_RECORDS.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordReader for InMemoryDataSource {
    fn read_record(&self, id: i32) -> Result<Record> {
        tracing::debug!(id, "reading record");
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(SolidError::RecordNotFound { id })
    }
}

impl RecordWriter for InMemoryDataSource {
    fn write_record(&mut self, record: Record) {
        tracing::debug!(id = record.id(), "writing record");
        self.records.push(record);
    }
}

pub struct DataSourceReader;

impl DataSourceReader {
    /// Stops at the first id that is not present.
    pub fn read_records(source: &dyn RecordReader, ids: &[i32]) -> Result<Vec<Record>> {
        ids.iter().map(|&id| source.read_record(id)).collect()
    }
}

pub struct DataSourceWriter;

impl DataSourceWriter {
    pub fn write_records(source: &mut dyn RecordWriter, records: Vec<Record>) {
        for record in records {
            source.write_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Reader that only answers for one id and counts calls.
    struct SingleRecordReader {
        record: Record,
        calls: RefCell<usize>,
    }

    impl RecordReader for SingleRecordReader {
        fn read_record(&self, id: i32) -> Result<Record> {
            *self.calls.borrow_mut() += 1;
            if id == self.record.id() {
                Ok(self.record.clone())
            } else {
                Err(SolidError::RecordNotFound { id })
            }
        }
    }

    #[test]
    fn test_seeded_source() {
        let source = InMemoryDataSource::seeded();
        assert_eq!(source.len(), 2);
        assert_eq!(source.read_record(1).unwrap(), Record::new(1, "Jeff"));
        assert_eq!(source.read_record(2).unwrap().name(), "Luca");
    }

    #[test]
    fn test_write_then_read_in_order() {
        let mut source = InMemoryDataSource::seeded();
        DataSourceWriter::write_records(&mut source, vec![Record::new(3, "Margot")]);

        let records = DataSourceReader::read_records(&source, &[1, 2, 3]).unwrap();
        let names: Vec<&str> = records.iter().map(Record::name).collect();
        assert_eq!(names, vec!["Jeff", "Luca", "Margot"]);
    }

    #[test]
    fn test_missing_id_fails_whole_read() {
        let source = InMemoryDataSource::seeded();
        let err = DataSourceReader::read_records(&source, &[1, 4, 2]).unwrap_err();
        assert!(matches!(err, SolidError::RecordNotFound { id: 4 }));
    }

    #[test]
    fn test_read_stops_at_first_miss() {
        let reader = SingleRecordReader {
            record: Record::new(1, "Jeff"),
            calls: RefCell::new(0),
        };
        assert!(DataSourceReader::read_records(&reader, &[1, 9, 1, 1]).is_err());
        assert_eq!(*reader.calls.borrow(), 2);
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut source = InMemoryDataSource::new();
        source.write_record(Record::new(7, "first"));
        source.write_record(Record::new(7, "second"));
        assert_eq!(source.read_record(7).unwrap().name(), "first");
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_empty_reads() {
        let source = InMemoryDataSource::new();
        assert!(source.is_empty());
        assert!(DataSourceReader::read_records(&source, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Record::new(3, "Margot").to_string(),
            "Record{Id=3, name='Margot'}"
        );
    }
}
