use std::fmt;

use crate::error::{Result, SolidError};

/// Mutable through setters, so a stored record can drift from its id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    id: i32,
    name: String,
}

impl Record {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record{{Id={}, name='{}'}}", self.id, self.name)
    }
}

/// One trait for both directions.
pub trait DataSource {
    fn read_record(&self, id: i32) -> Result<Record>;
    fn write_record(&mut self, record: Record);
}

#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    records: Vec<Record>,
}

impl DataSource for InMemoryDataSource {
    fn read_record(&self, id: i32) -> Result<Record> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(SolidError::RecordNotFound { id })
    }

    fn write_record(&mut self, record: Record) {
        self.records.push(record);
    }
}

pub struct DataSourceReader;

impl DataSourceReader {
    /// Only reads, yet receives a source it could write to.
    pub fn read_records(source: &mut dyn DataSource, ids: &[i32]) -> Result<Vec<Record>> {
        ids.iter().map(|&id| source.read_record(id)).collect()
    }
}

pub struct DataSourceWriter;

impl DataSourceWriter {
    pub fn write_records(source: &mut dyn DataSource, records: Vec<Record>) {
        for record in records {
            source.write_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, name: &str) -> Record {
        let mut record = Record::default();
        record.set_id(id);
        record.set_name(name);
        record
    }

    #[test]
    fn test_write_then_read() {
        let mut source = InMemoryDataSource::default();
        DataSourceWriter::write_records(&mut source, vec![record(1, "Jeff"), record(2, "Luca")]);

        let records = DataSourceReader::read_records(&mut source, &[2, 1]).unwrap();
        assert_eq!(records, vec![record(2, "Luca"), record(1, "Jeff")]);
    }

    #[test]
    fn test_reader_can_write() {
        let mut source = InMemoryDataSource::default();
        let reader_view: &mut dyn DataSource = &mut source;
        reader_view.write_record(record(5, "Oops"));
        assert_eq!(source.read_record(5).unwrap().name(), "Oops");
    }

    #[test]
    fn test_missing_id() {
        let mut source = InMemoryDataSource::default();
        let err = DataSourceReader::read_records(&mut source, &[1]).unwrap_err();
        assert!(matches!(err, SolidError::RecordNotFound { id: 1 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(record(3, "Margot").to_string(), "Record{Id=3, name='Margot'}");
    }
}
