use crate::error::ArborError;
use crate::extraction::RawTable;
use crate::model::{Dataset, SampleRow};
use serde::{Deserialize, Serialize};

/// Header names of the inspection dataset columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub commodity: String,
    pub variant: String,
    pub overall_compliance: String,
    pub overall_quality: String,
    pub overall_safety: String,
    pub overall_labelling: String,
    pub substandard_cases: String,
    pub unsafe_cases: String,
    pub test_type: String,
    pub parameter: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            commodity: "Commodity".into(),
            variant: "Variant 2".into(),
            overall_compliance: "Overall Compliance".into(),
            overall_quality: "Overall Quality Classification".into(),
            overall_safety: "Overall Safety Classification".into(),
            // Spelling matches the source sheets.
            overall_labelling: "Overall Labelling Complaince".into(),
            substandard_cases: "Sub-Standard Cases".into(),
            unsafe_cases: "Unsafe Cases".into(),
            test_type: "Test Type".into(),
            parameter: "Parameter".into(),
        }
    }
}

/// A data row that was not turned into a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line in the source, counting the header as line 1.
    pub row_number: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub skipped_rows: Vec<SkippedRow>,
}

/// Resolved column positions within one table.
struct ColumnIndex {
    commodity: usize,
    variant: usize,
    overall_compliance: usize,
    overall_quality: usize,
    overall_safety: usize,
    overall_labelling: usize,
    test_type: Option<usize>,
    substandard_cases: Option<usize>,
    unsafe_cases: Option<usize>,
    parameter: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &[String], columns: &ColumnMap) -> Result<Self, ArborError> {
        let find = |name: &str| find_header(headers, name);
        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let idx = find(name);
            if idx.is_none() {
                missing.push(name.to_string());
            }
            idx.unwrap_or_default()
        };

        let commodity = require(&columns.commodity);
        let variant = require(&columns.variant);
        let overall_compliance = require(&columns.overall_compliance);
        let overall_quality = require(&columns.overall_quality);
        let overall_safety = require(&columns.overall_safety);
        let overall_labelling = require(&columns.overall_labelling);

        let substandard_cases = find(&columns.substandard_cases);
        let unsafe_cases = find(&columns.unsafe_cases);
        let parameter = find(&columns.parameter);
        if substandard_cases.is_none() && unsafe_cases.is_none() && parameter.is_none() {
            missing.push(format!(
                "{} / {} / {}",
                columns.substandard_cases, columns.unsafe_cases, columns.parameter
            ));
        }

        if !missing.is_empty() {
            return Err(ArborError::MissingColumns(missing));
        }

        let test_type = find(&columns.test_type);
        if test_type.is_none() {
            tracing::warn!(
                column = %columns.test_type,
                "test type column absent, all parameters grouped under \"Other\""
            );
        }

        Ok(Self {
            commodity,
            variant,
            overall_compliance,
            overall_quality,
            overall_safety,
            overall_labelling,
            test_type,
            substandard_cases,
            unsafe_cases,
            parameter,
        })
    }
}

/// Header position by name, ignoring surrounding whitespace, a byte order
/// mark and letter case.
fn find_header(headers: &[String], name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase() == wanted)
}

/// Map a raw table onto sample rows.
///
/// Fails when required columns are missing. Rows with a blank commodity are
/// skipped and reported.
pub fn load_dataset(table: &RawTable, columns: &ColumnMap) -> Result<LoadedDataset, ArborError> {
    let index = ColumnIndex::resolve(&table.headers, columns)?;

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut skipped_rows = Vec::new();

    for (i, cells) in table.rows.iter().enumerate() {
        let row_number = i + 2;

        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let commodity = text(cells, index.commodity);
        if commodity.is_empty() {
            tracing::warn!(row = row_number, "skipping row without commodity");
            skipped_rows.push(SkippedRow {
                row_number,
                reason: "blank commodity".into(),
            });
            continue;
        }

        rows.push(SampleRow {
            commodity,
            variant: optional(cells, Some(index.variant)),
            overall_compliance: text(cells, index.overall_compliance),
            overall_quality: text(cells, index.overall_quality),
            overall_safety: text(cells, index.overall_safety),
            overall_labelling: text(cells, index.overall_labelling),
            test_type: optional(cells, index.test_type),
            substandard_cases: optional(cells, index.substandard_cases),
            unsafe_cases: optional(cells, index.unsafe_cases),
            parameter: optional(cells, index.parameter),
        });
    }

    Ok(LoadedDataset {
        dataset: Dataset::new(rows),
        skipped_rows,
    })
}

fn text(cells: &[String], idx: usize) -> String {
    cells.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Cell text with surrounding whitespace removed; `None` when blank.
/// Interior line breaks are kept for the parameter tokenizer.
fn optional(cells: &[String], idx: Option<usize>) -> Option<String> {
    let cell = cells.get(idx?)?.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}
