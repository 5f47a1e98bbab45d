use crate::model::SampleRow;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Compliance counts for one filtered subset.
///
/// `compliant + non_compliant == total`. The three sub-categories are
/// independent: one sample can be both sub-standard and unsafe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub total: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub quality_substandard: usize,
    pub safety_unsafe: usize,
    pub labelling_mis: usize,
}

impl ClassificationCounts {
    /// Percentage of `n` relative to this subset's total.
    pub fn pct(&self, n: usize) -> Decimal {
        percentage(n, self.total)
    }
}

/// Classification of a subset together with the rows each branch needs.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub counts: ClassificationCounts,
    /// Rows whose quality verdict is sub-standard.
    pub quality_rows: Vec<&'a SampleRow>,
    /// Rows whose safety verdict is unsafe.
    pub safety_rows: Vec<&'a SampleRow>,
}

/// `n / total * 100` rounded to one decimal place, 0.0 when total is 0.
///
/// Midpoints round to even on the exact decimal value. Binary float
/// formatting can land on the other side of a midpoint, so e.g. 23/80
/// gives 28.8 here where `format!("{:.1}", 23.0 / 80.0 * 100.0)` gives 28.7.
pub fn percentage(n: usize, total: usize) -> Decimal {
    if total == 0 {
        let mut zero = Decimal::ZERO;
        zero.rescale(1);
        return zero;
    }
    let raw = Decimal::from(n as u64) * Decimal::ONE_HUNDRED / Decimal::from(total as u64);
    let mut rounded = raw.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(1);
    rounded
}
