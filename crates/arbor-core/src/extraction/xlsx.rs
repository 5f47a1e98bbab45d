use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::ArborError;
use crate::extraction::{RawTable, TableSource};

/// Excel workbook reader backed by calamine.
///
/// Reads the named sheet, or the first sheet when none is given. Row 1 is
/// the header row.
#[derive(Default)]
pub struct XlsxSource {
    sheet: Option<String>,
}

impl XlsxSource {
    pub fn with_sheet(sheet: impl Into<String>) -> Self {
        Self {
            sheet: Some(sheet.into()),
        }
    }
}

impl TableSource for XlsxSource {
    fn read_table(&self, bytes: &[u8]) -> Result<RawTable, ArborError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| ArborError::TableRead(format!("failed to open xlsx: {e}")))?;

        let sheet_name = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ArborError::TableRead("workbook has no sheets".into()))?,
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ArborError::TableRead(format!("sheet '{sheet_name}' not readable: {e}")))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(cell_as_string).collect(),
            None => {
                return Err(ArborError::TableRead(format!(
                    "sheet '{sheet_name}' is empty"
                )))
            }
        };

        let data: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(cell_as_string).collect())
            .collect();

        Ok(RawTable {
            headers,
            rows: data,
        })
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_as_string() {
        assert_eq!(cell_as_string(&Data::String("  Rice ".into())), "Rice");
        assert_eq!(cell_as_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_as_string(&Data::Float(0.25)), "0.25");
        assert_eq!(cell_as_string(&Data::Int(7)), "7");
        assert_eq!(cell_as_string(&Data::Empty), "");
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = XlsxSource::default().read_table(b"not a workbook").unwrap_err();
        assert!(matches!(err, ArborError::TableRead(_)));
        let err = XlsxSource::with_sheet("Results")
            .read_table(b"not a workbook")
            .unwrap_err();
        assert!(matches!(err, ArborError::TableRead(_)));
    }
}
