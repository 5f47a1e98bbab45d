pub mod columns;
pub mod csv_table;
pub mod xlsx;

use crate::error::ArborError;
use columns::{load_dataset, ColumnMap, LoadedDataset};
use csv_table::CsvSource;
use std::path::Path;
use xlsx::XlsxSource;

/// A header row plus data rows, every cell as text.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Trait for tabular file readers.
pub trait TableSource: Send + Sync {
    /// Read file bytes into a header row and data rows.
    fn read_table(&self, bytes: &[u8]) -> Result<RawTable, ArborError>;

    /// Name of this reader (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// How a dataset file is read: column names and, for workbooks, the sheet.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub columns: ColumnMap,
    /// Workbook sheet name; the first sheet when `None`.
    pub sheet: Option<String>,
}

/// Pick a reader from the file extension.
pub fn source_for_path(
    path: &Path,
    sheet: Option<&str>,
) -> Result<Box<dyn TableSource>, ArborError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let source: Box<dyn TableSource> = match ext.as_str() {
        "csv" => Box::new(CsvSource::default()),
        "tsv" => Box::new(CsvSource::with_delimiter(b'\t')),
        "xlsx" | "xlsm" => match sheet {
            Some(name) => Box::new(XlsxSource::with_sheet(name)),
            None => Box::new(XlsxSource::default()),
        },
        _ => return Err(ArborError::UnsupportedFormat(path.display().to_string())),
    };

    if sheet.is_some() && source.backend_name() == "csv" {
        tracing::warn!(path = %path.display(), "sheet name ignored for delimited text input");
    }
    Ok(source)
}

/// Read and map a dataset file using the default column names.
pub fn load_path(path: &Path) -> Result<LoadedDataset, ArborError> {
    load_path_with(path, &LoadOptions::default())
}

/// Read and map a dataset file with custom column names or sheet.
pub fn load_path_with(path: &Path, options: &LoadOptions) -> Result<LoadedDataset, ArborError> {
    let source = source_for_path(path, options.sheet.as_deref())?;
    let bytes = std::fs::read(path)?;
    let table = source.read_table(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        backend = source.backend_name(),
        rows = table.rows.len(),
        "read table"
    );
    load_dataset(&table, &options.columns)
}
