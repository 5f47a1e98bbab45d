use crate::model::SampleRow;
use crate::parsing::{is_substandard, is_unsafe, split_parameters};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Non-compliance branch whose failing parameters are broken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Quality,
    Safety,
}

impl Branch {
    /// Whether the row's verdict puts it in this branch.
    pub fn matches(self, row: &SampleRow) -> bool {
        match self {
            Branch::Quality => is_substandard(&row.overall_quality),
            Branch::Safety => is_unsafe(&row.overall_safety),
        }
    }

    /// Evidence text for this branch, falling back to the generic
    /// parameter column when the branch-specific cell is blank.
    pub fn parameter_cell(self, row: &SampleRow) -> Option<&str> {
        let specific = match self {
            Branch::Quality => row.substandard_cases.as_deref(),
            Branch::Safety => row.unsafe_cases.as_deref(),
        };
        specific
            .filter(|s| !s.trim().is_empty())
            .or(row.parameter.as_deref())
    }
}

/// Occurrence count of one parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterCount {
    pub name: String,
    pub count: usize,
}

/// Parameters mentioned under one test type, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTypeGroup {
    pub test_type: String,
    pub parameters: Vec<ParameterCount>,
}

impl TestTypeGroup {
    fn new(test_type: &str) -> Self {
        Self {
            test_type: test_type.to_string(),
            parameters: Vec::new(),
        }
    }

    fn add(&mut self, name: String) {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(p) => p.count += 1,
            None => self.parameters.push(ParameterCount { name, count: 1 }),
        }
    }

    /// Total parameter mentions under this test type.
    pub fn mentions(&self) -> usize {
        self.parameters.iter().map(|p| p.count).sum()
    }

    /// Parameters by descending count, then ascending name.
    pub fn sorted_parameters(&self) -> Vec<&ParameterCount> {
        let mut sorted: Vec<&ParameterCount> = self.parameters.iter().collect();
        sorted.sort_by(|a, b| {
            (Reverse(a.count), a.name.as_str()).cmp(&(Reverse(b.count), b.name.as_str()))
        });
        sorted
    }
}

/// Failing parameters grouped by test type, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterGroups {
    pub groups: Vec<TestTypeGroup>,
}

impl ParameterGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestTypeGroup> {
        self.groups.iter()
    }

    pub fn get(&self, test_type: &str) -> Option<&TestTypeGroup> {
        self.groups.iter().find(|g| g.test_type == test_type)
    }

    fn add(&mut self, test_type: &str, name: String) {
        let idx = match self.groups.iter().position(|g| g.test_type == test_type) {
            Some(idx) => idx,
            None => {
                self.groups.push(TestTypeGroup::new(test_type));
                self.groups.len() - 1
            }
        };
        self.groups[idx].add(name);
    }
}

impl<'a> IntoIterator for &'a ParameterGroups {
    type Item = &'a TestTypeGroup;
    type IntoIter = std::slice::Iter<'a, TestTypeGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group the failing parameters of one branch by test type.
///
/// Rows outside the branch are ignored. Rows whose parameter cell yields
/// no tokens contribute nothing.
pub fn aggregate(rows: &[&SampleRow], branch: Branch) -> ParameterGroups {
    let mut groups = ParameterGroups::default();

    for row in rows.iter().filter(|r| branch.matches(r)) {
        let test_type = row.test_type_or_other();
        for param in split_parameters(branch.parameter_cell(row)) {
            let param = param.trim();
            if !param.is_empty() {
                groups.add(test_type, param.to_string());
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality_row(test_type: Option<&str>, cases: &str) -> SampleRow {
        SampleRow {
            commodity: "Rice".into(),
            overall_quality: "Sub-Standard".into(),
            test_type: test_type.map(Into::into),
            substandard_cases: Some(cases.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_by_test_type_in_first_seen_order() {
        let rows = [
            quality_row(Some("Chemical"), "Moisture; Ash"),
            quality_row(Some("Microbiological"), "Yeast"),
            quality_row(Some("Chemical"), "Ash"),
        ];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        let groups = aggregate(&refs, Branch::Quality);

        let types: Vec<&str> = groups.iter().map(|g| g.test_type.as_str()).collect();
        assert_eq!(types, vec!["Chemical", "Microbiological"]);

        let chem = groups.get("Chemical").unwrap();
        assert_eq!(chem.mentions(), 3);
        assert_eq!(
            chem.parameters,
            vec![
                ParameterCount { name: "Moisture".into(), count: 1 },
                ParameterCount { name: "Ash".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_missing_test_type_is_other() {
        let rows = [quality_row(None, "Moisture")];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        let groups = aggregate(&refs, Branch::Quality);
        assert!(groups.get("Other").is_some());
    }

    #[test]
    fn test_rows_outside_branch_ignored() {
        let mut safe = quality_row(Some("Chemical"), "Moisture");
        safe.overall_quality = "Standard".into();
        let rows = [safe];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        assert!(aggregate(&refs, Branch::Quality).is_empty());
        assert!(aggregate(&refs, Branch::Safety).is_empty());
    }

    #[test]
    fn test_safety_uses_unsafe_cases_then_parameter() {
        let rows = [
            SampleRow {
                overall_safety: "Unsafe".into(),
                test_type: Some("Contaminants".into()),
                unsafe_cases: Some("Lead".into()),
                parameter: Some("Ignored".into()),
                ..Default::default()
            },
            SampleRow {
                overall_safety: "unsafe".into(),
                test_type: Some("Contaminants".into()),
                unsafe_cases: Some("  ".into()),
                parameter: Some("Lead; Tin".into()),
                ..Default::default()
            },
        ];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        let groups = aggregate(&refs, Branch::Safety);
        let g = groups.get("Contaminants").unwrap();
        assert_eq!(g.mentions(), 3);
        assert!(g.parameters.iter().all(|p| p.name != "Ignored"));
    }

    #[test]
    fn test_blank_cells_contribute_nothing() {
        let rows = [
            quality_row(Some("Chemical"), "  "),
            quality_row(Some("Chemical"), " | "),
            quality_row(Some("Chemical"), " ;|, ;"),
        ];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        assert!(aggregate(&refs, Branch::Quality).is_empty());
    }

    #[test]
    fn test_sorted_parameters_count_then_name() {
        let rows = [
            quality_row(Some("Chemical"), "Zinc; Ash; Moisture; Moisture"),
        ];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        let groups = aggregate(&refs, Branch::Quality);
        let names: Vec<&str> = groups.groups[0]
            .sorted_parameters()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Moisture", "Ash", "Zinc"]);
    }
}
