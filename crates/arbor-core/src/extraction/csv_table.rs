use crate::error::ArborError;
use crate::extraction::{RawTable, TableSource};

/// Delimited text reader backed by the `csv` crate.
///
/// Rows may be shorter or longer than the header; missing cells read as
/// empty.
pub struct CsvSource {
    delimiter: u8,
}

impl CsvSource {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        Self::with_delimiter(b',')
    }
}

impl TableSource for CsvSource {
    fn read_table(&self, bytes: &[u8]) -> Result<RawTable, ArborError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ArborError::TableRead(format!("invalid CSV header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record
                .map_err(|e| ArborError::TableRead(format!("CSV record {}: {e}", i + 1)))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawTable { headers, rows })
    }

    fn backend_name(&self) -> &str {
        "csv"
    }
}
