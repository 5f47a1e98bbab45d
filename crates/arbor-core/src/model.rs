use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant value used when the variant cell is absent or blank.
pub const MISSING_VARIANT: &str = "(missing)";

/// Test type used when the test type cell is absent or blank.
pub const OTHER_TEST_TYPE: &str = "Other";

/// Variant preferred as the default when a commodity has it.
pub const PREFERRED_VARIANT: &str = "Packed Samples";

/// One tested sample as read from the inspection dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleRow {
    pub commodity: String,
    pub variant: Option<String>,
    pub overall_compliance: String,
    pub overall_quality: String,
    pub overall_safety: String,
    pub overall_labelling: String,
    pub test_type: Option<String>,
    /// Evidence text for quality failures ("Sub-Standard Cases").
    pub substandard_cases: Option<String>,
    /// Evidence text for safety failures ("Unsafe Cases").
    pub unsafe_cases: Option<String>,
    /// Generic parameter text, used when the branch-specific cell is blank.
    pub parameter: Option<String>,
}

impl SampleRow {
    /// Variant with the missing sentinel applied.
    pub fn variant_or_missing(&self) -> &str {
        non_blank(self.variant.as_deref()).unwrap_or(MISSING_VARIANT)
    }

    /// Test type with the "Other" sentinel applied.
    pub fn test_type_or_other(&self) -> &str {
        non_blank(self.test_type.as_deref()).unwrap_or(OTHER_TEST_TYPE)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// A (commodity, variant) pair selecting one tree's worth of rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    pub commodity: String,
    pub variant: String,
}

impl Selector {
    pub fn new(commodity: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            commodity: commodity.into(),
            variant: variant.into(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.commodity, self.variant)
    }
}

/// The full set of sample rows loaded from one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub rows: Vec<SampleRow>,
}

impl Dataset {
    pub fn new(rows: Vec<SampleRow>) -> Self {
        Self { rows }
    }

    /// Distinct non-blank commodities, sorted.
    pub fn commodities(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.commodity.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Variants of a commodity with their sample counts, in first-seen order.
    /// Commodity names match ignoring surrounding whitespace.
    pub fn variant_counts(&self, commodity: &str) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in self.rows.iter().filter(|r| r.commodity.trim() == commodity.trim()) {
            let variant = row.variant_or_missing();
            match counts.iter_mut().find(|(v, _)| v == variant) {
                Some((_, n)) => *n += 1,
                None => counts.push((variant.to_string(), 1)),
            }
        }
        counts
    }

    /// Variants of a commodity, in first-seen order.
    pub fn variants(&self, commodity: &str) -> Vec<String> {
        self.variant_counts(commodity)
            .into_iter()
            .map(|(v, _)| v)
            .collect()
    }

    /// "Packed Samples" when present, otherwise the most frequent variant.
    /// Ties go to the variant seen first.
    pub fn default_variant(&self, commodity: &str) -> Option<String> {
        let counts = self.variant_counts(commodity);
        if counts.iter().any(|(v, _)| v == PREFERRED_VARIANT) {
            return Some(PREFERRED_VARIANT.to_string());
        }
        let mut best: Option<&(String, usize)> = None;
        for entry in &counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(v, _)| v.clone())
    }

    /// Rows matching the selector's commodity and variant.
    pub fn filter(&self, selector: &Selector) -> Vec<&SampleRow> {
        self.rows
            .iter()
            .filter(|r| {
                r.commodity.trim() == selector.commodity.trim()
                    && r.variant_or_missing() == selector.variant
            })
            .collect()
    }
}
