use crate::aggregate::ParameterGroups;
use crate::classify::ClassificationCounts;
use crate::model::Selector;
use crate::style::schema::StyleConfig;
use crate::tree::dot::render_dot;
use crate::tree::graph::{count_label, share_label, Graph};
use crate::tree::{Percentages, Statistics, TreeOutput};
use rust_decimal::Decimal;

const ROOT_ID: &str = "root";
const COMPLIANT_ID: &str = "comp";
const NON_COMPLIANT_ID: &str = "noncomp";
const QUALITY_ID: &str = "qual";
const SAFETY_ID: &str = "saf";
const LABELLING_ID: &str = "lab";

/// Id prefixes of one parameter branch: test type nodes are `{type_prefix}{i}`,
/// parameter leaves are `{param_prefix}{i}_{j}`.
struct BranchIds {
    parent: &'static str,
    type_prefix: &'static str,
    param_prefix: &'static str,
}

const QUALITY_IDS: BranchIds = BranchIds {
    parent: QUALITY_ID,
    type_prefix: "qt",
    param_prefix: "q",
};

const SAFETY_IDS: BranchIds = BranchIds {
    parent: SAFETY_ID,
    type_prefix: "st",
    param_prefix: "s",
};

/// Build the compliance tree for one classified subset.
///
/// Shape: root -> {Compliant, Non-Compliant}; Non-Compliant -> {Quality,
/// Safety, Labelling}; Quality and Safety -> test type -> parameter.
/// Every percentage is relative to the subset total.
pub fn assemble(
    selector: &Selector,
    counts: &ClassificationCounts,
    quality: &ParameterGroups,
    safety: &ParameterGroups,
    style: &StyleConfig,
) -> TreeOutput {
    let mut graph = Graph::new(style.clone());
    let percentages = Percentages::from_counts(counts);

    graph.add_node(
        ROOT_ID,
        share_label(&selector.to_string(), counts.total, Decimal::ONE_HUNDRED),
        None,
    );
    graph.add_node(
        COMPLIANT_ID,
        share_label("Compliant", counts.compliant, percentages.compliant),
        Some(&style.compliant_color),
    );
    graph.add_node(
        NON_COMPLIANT_ID,
        share_label("Non-Compliant", counts.non_compliant, percentages.non_compliant),
        Some(&style.noncompliant_color),
    );
    graph.add_node(
        QUALITY_ID,
        share_label(
            "Quality Parameters",
            counts.quality_substandard,
            percentages.quality_substandard,
        ),
        None,
    );
    graph.add_node(
        SAFETY_ID,
        share_label("Safety Parameters", counts.safety_unsafe, percentages.safety_unsafe),
        None,
    );
    graph.add_node(
        LABELLING_ID,
        share_label("Labelling Issues", counts.labelling_mis, percentages.labelling_mis),
        None,
    );

    graph.add_edge(ROOT_ID, COMPLIANT_ID);
    graph.add_edge(ROOT_ID, NON_COMPLIANT_ID);
    graph.add_edge(NON_COMPLIANT_ID, QUALITY_ID);
    graph.add_edge(NON_COMPLIANT_ID, SAFETY_ID);
    graph.add_edge(NON_COMPLIANT_ID, LABELLING_ID);

    add_parameter_branch(&mut graph, quality, &QUALITY_IDS);
    add_parameter_branch(&mut graph, safety, &SAFETY_IDS);

    let dot = render_dot(&graph);
    let stats = Statistics {
        commodity: selector.commodity.clone(),
        variant: selector.variant.clone(),
        counts: *counts,
        percentages,
        quality_parameters: quality.clone(),
        safety_parameters: safety.clone(),
    };

    TreeOutput { dot, graph, stats }
}

fn add_parameter_branch(graph: &mut Graph, groups: &ParameterGroups, ids: &BranchIds) {
    for (i, group) in groups.iter().enumerate() {
        let type_id = format!("{}{i}", ids.type_prefix);
        graph.add_node(
            type_id.clone(),
            count_label(&group.test_type, group.mentions()),
            None,
        );
        graph.add_edge(ids.parent, type_id.clone());

        for (j, param) in group.sorted_parameters().into_iter().enumerate() {
            let param_id = format!("{}{i}_{j}", ids.param_prefix);
            graph.add_node(param_id.clone(), count_label(&param.name, param.count), None);
            graph.add_edge(type_id.clone(), param_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, Branch};
    use crate::model::SampleRow;
    use std::collections::HashSet;

    fn counts(total: usize, compliant: usize) -> ClassificationCounts {
        ClassificationCounts {
            total,
            compliant,
            non_compliant: total - compliant,
            quality_substandard: 2,
            safety_unsafe: 1,
            labelling_mis: 1,
        }
    }

    fn groups() -> (ParameterGroups, ParameterGroups) {
        let rows = [
            SampleRow {
                overall_quality: "Sub-Standard".into(),
                overall_safety: "Unsafe".into(),
                test_type: Some("Chemical".into()),
                substandard_cases: Some("Moisture; Ash".into()),
                unsafe_cases: Some("Lead, ppm Compliance".into()),
                ..Default::default()
            },
            SampleRow {
                overall_quality: "Sub-Standard".into(),
                test_type: Some("Chemical".into()),
                substandard_cases: Some("Ash".into()),
                ..Default::default()
            },
        ];
        let refs: Vec<&SampleRow> = rows.iter().collect();
        (
            aggregate(&refs, Branch::Quality),
            aggregate(&refs, Branch::Safety),
        )
    }

    #[test]
    fn test_fixed_structure() {
        let (q, s) = groups();
        let out = assemble(
            &Selector::new("Rice", "Packed"),
            &counts(10, 6),
            &q,
            &s,
            &StyleConfig::default(),
        );
        let g = &out.graph;
        assert_eq!(g.children("root"), vec!["comp", "noncomp"]);
        assert_eq!(g.children("noncomp"), vec!["qual", "saf", "lab"]);
        assert!(g.children("lab").is_empty());
        assert_eq!(
            g.node("root").unwrap().label,
            "Rice - Packed\n[10 Samples; 100.0%]"
        );
        assert_eq!(g.node("comp").unwrap().label, "Compliant\n[6 Samples; 60.0%]");
        assert_eq!(
            g.node("noncomp").unwrap().label,
            "Non-Compliant\n[4 Samples; 40.0%]"
        );
        assert_eq!(
            g.node("qual").unwrap().label,
            "Quality Parameters\n[2 Samples; 20.0%]"
        );
    }

    #[test]
    fn test_colors_only_on_compliance_nodes() {
        let (q, s) = groups();
        let style = StyleConfig {
            compliant_color: "#00ff00".into(),
            noncompliant_color: "#ff0000".into(),
            ..Default::default()
        };
        let out = assemble(&Selector::new("Rice", "Packed"), &counts(4, 2), &q, &s, &style);
        let colored: Vec<&str> = out
            .graph
            .nodes
            .iter()
            .filter(|n| n.fill_color.is_some())
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(colored, vec!["comp", "noncomp"]);
        assert_eq!(
            out.graph.node("comp").unwrap().fill_color.as_deref(),
            Some("#00ff00")
        );
    }

    #[test]
    fn test_parameter_levels() {
        let (q, s) = groups();
        let out = assemble(
            &Selector::new("Rice", "Packed"),
            &counts(4, 2),
            &q,
            &s,
            &StyleConfig::default(),
        );
        let g = &out.graph;
        assert_eq!(g.children("qual"), vec!["qt0"]);
        assert_eq!(g.node("qt0").unwrap().label, "Chemical\n[3 Samples]");
        assert_eq!(g.children("qt0"), vec!["q0_0", "q0_1"]);
        assert_eq!(g.node("q0_0").unwrap().label, "Ash\n[2 Samples]");
        assert_eq!(g.node("q0_1").unwrap().label, "Moisture\n[1 Sample]");
        assert_eq!(g.children("saf"), vec!["st0"]);
        assert_eq!(g.node("s0_0").unwrap().label, "Lead, ppm\n[1 Sample]");
    }

    #[test]
    fn test_ids_unique_and_edges_resolve() {
        let (q, s) = groups();
        let out = assemble(
            &Selector::new("Rice", "Packed"),
            &counts(4, 2),
            &q,
            &s,
            &StyleConfig::default(),
        );
        let ids: HashSet<&str> = out.graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), out.graph.nodes.len());
        for e in &out.graph.edges {
            assert!(ids.contains(e.from.as_str()));
            assert!(ids.contains(e.to.as_str()));
        }
    }

    #[test]
    fn test_deterministic_output() {
        let (q, s) = groups();
        let sel = Selector::new("Rice", "Packed");
        let a = assemble(&sel, &counts(4, 2), &q, &s, &StyleConfig::default());
        let b = assemble(&sel, &counts(4, 2), &q, &s, &StyleConfig::default());
        assert_eq!(a.dot, b.dot);
    }

    #[test]
    fn test_statistics_record() {
        let (q, s) = groups();
        let out = assemble(
            &Selector::new("Rice", "Packed"),
            &counts(3, 1),
            &q,
            &s,
            &StyleConfig::default(),
        );
        assert_eq!(out.stats.counts.total, 3);
        assert_eq!(out.stats.percentages.compliant.to_string(), "33.3");
        assert_eq!(out.stats.quality_parameters, q);
        assert_eq!(out.stats.safety_parameters.len(), 1);
    }
}
