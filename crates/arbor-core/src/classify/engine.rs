use crate::classify::outcome::{Classification, ClassificationCounts};
use crate::error::ArborError;
use crate::model::{Dataset, SampleRow, Selector};
use crate::parsing::{is_compliant, is_mis_labelled, is_substandard, is_unsafe};

/// Rows of the dataset matching the selector.
///
/// An empty result is an error: no tree can be built from it.
pub fn filter_subset<'a>(
    dataset: &'a Dataset,
    selector: &Selector,
) -> Result<Vec<&'a SampleRow>, ArborError> {
    let rows = dataset.filter(selector);
    if rows.is_empty() {
        return Err(empty_subset(selector));
    }
    Ok(rows)
}

/// Classify a filtered subset into compliance buckets.
pub fn classify<'a>(
    selector: &Selector,
    rows: &[&'a SampleRow],
) -> Result<Classification<'a>, ArborError> {
    if rows.is_empty() {
        return Err(empty_subset(selector));
    }

    let mut counts = ClassificationCounts {
        total: rows.len(),
        ..Default::default()
    };
    let mut quality_rows = Vec::new();
    let mut safety_rows = Vec::new();

    for &row in rows {
        if is_compliant(&row.overall_compliance) {
            counts.compliant += 1;
        }
        if is_substandard(&row.overall_quality) {
            counts.quality_substandard += 1;
            quality_rows.push(row);
        }
        if is_unsafe(&row.overall_safety) {
            counts.safety_unsafe += 1;
            safety_rows.push(row);
        }
        if is_mis_labelled(&row.overall_labelling) {
            counts.labelling_mis += 1;
        }
    }
    counts.non_compliant = counts.total - counts.compliant;

    tracing::debug!(
        selector = %selector,
        total = counts.total,
        compliant = counts.compliant,
        quality = counts.quality_substandard,
        safety = counts.safety_unsafe,
        labelling = counts.labelling_mis,
        "classified subset"
    );

    Ok(Classification {
        counts,
        quality_rows,
        safety_rows,
    })
}

fn empty_subset(selector: &Selector) -> ArborError {
    ArborError::EmptySubset {
        commodity: selector.commodity.clone(),
        variant: selector.variant.clone(),
    }
}
