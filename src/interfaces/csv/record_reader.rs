use crate::domain::record::BillingRecord;
use crate::error::{FragmentError, Result};
use std::io::Read;

/// Reads billing records from a CSV source with a header row.
///
/// Columns are matched by header name, so any subset of the record's fields may
/// be present, in any order. Empty cells count as absent.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<BillingRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FragmentError::from))
    }
}
