pub mod assemble;
pub mod dot;
pub mod graph;

pub use assemble::assemble;
pub use dot::render_dot;
pub use graph::{Edge, Graph, Node};

use crate::aggregate::ParameterGroups;
use crate::classify::ClassificationCounts;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of the total for each count, to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentages {
    pub compliant: Decimal,
    pub non_compliant: Decimal,
    pub quality_substandard: Decimal,
    pub safety_unsafe: Decimal,
    pub labelling_mis: Decimal,
}

impl Percentages {
    pub fn from_counts(counts: &ClassificationCounts) -> Self {
        Self {
            compliant: counts.pct(counts.compliant),
            non_compliant: counts.pct(counts.non_compliant),
            quality_substandard: counts.pct(counts.quality_substandard),
            safety_unsafe: counts.pct(counts.safety_unsafe),
            labelling_mis: counts.pct(counts.labelling_mis),
        }
    }
}

/// Flat summary of one tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub commodity: String,
    pub variant: String,
    #[serde(flatten)]
    pub counts: ClassificationCounts,
    pub percentages: Percentages,
    pub quality_parameters: ParameterGroups,
    pub safety_parameters: ParameterGroups,
}

/// Everything produced for one (commodity, variant) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeOutput {
    /// Graphviz DOT source.
    pub dot: String,
    pub graph: Graph,
    pub stats: Statistics,
}
