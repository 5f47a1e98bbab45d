use arbor_core::aggregate::ParameterGroups;
use arbor_core::tree::{Statistics, TreeOutput};
use std::fmt::Write;

pub fn print<'a>(trees: impl IntoIterator<Item = &'a TreeOutput>) {
    let blocks: Vec<String> = trees
        .into_iter()
        .map(|tree| format_stats(&tree.stats))
        .collect();
    print!("{}", blocks.join("\n"));
}

/// Plain-text summary of one tree: counts, shares and the parameter
/// breakdown of both branches.
pub fn format_stats(stats: &Statistics) -> String {
    let mut out = String::new();
    let counts = &stats.counts;
    let pct = &stats.percentages;

    let _ = writeln!(out, "=== {} - {} ===\n", stats.commodity, stats.variant);
    let _ = writeln!(out, "  Samples:          {:>5}", counts.total);
    let _ = writeln!(out, "  Compliant:        {:>5}  ({:.1}%)", counts.compliant, pct.compliant);
    let _ = writeln!(
        out,
        "  Non-Compliant:    {:>5}  ({:.1}%)",
        counts.non_compliant, pct.non_compliant
    );
    let _ = writeln!(
        out,
        "    Quality:        {:>5}  ({:.1}%)",
        counts.quality_substandard, pct.quality_substandard
    );
    let _ = writeln!(
        out,
        "    Safety:         {:>5}  ({:.1}%)",
        counts.safety_unsafe, pct.safety_unsafe
    );
    let _ = writeln!(
        out,
        "    Labelling:      {:>5}  ({:.1}%)",
        counts.labelling_mis, pct.labelling_mis
    );
    out.push('\n');

    write_groups(&mut out, "Quality parameters", &stats.quality_parameters);
    write_groups(&mut out, "Safety parameters", &stats.safety_parameters);

    out
}

fn write_groups(out: &mut String, heading: &str, groups: &ParameterGroups) {
    if groups.is_empty() {
        return;
    }

    let _ = writeln!(out, "  {heading}:");
    for group in groups {
        let _ = writeln!(out, "    {} ({})", group.test_type, group.mentions());
        let params = group.sorted_parameters();
        let width = params.iter().map(|p| p.name.len()).max().unwrap_or(10);
        for p in params {
            let _ = writeln!(out, "      {:<width$}  {}", p.name, p.count, width = width);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::build_tree;
    use arbor_core::model::{Dataset, SampleRow, Selector};
    use arbor_core::style::schema::StyleConfig;

    #[test]
    fn test_format_stats() {
        let rows = vec![
            SampleRow {
                commodity: "Rice".into(),
                overall_compliance: "Compliant as per FSSR".into(),
                ..Default::default()
            },
            SampleRow {
                commodity: "Rice".into(),
                overall_compliance: "Non-Compliant".into(),
                overall_quality: "Sub-Standard".into(),
                test_type: Some("Chemical".into()),
                substandard_cases: Some("Moisture; Ash".into()),
                ..Default::default()
            },
            SampleRow {
                commodity: "Rice".into(),
                overall_compliance: "Non-Compliant".into(),
                ..Default::default()
            },
        ];
        let out = build_tree(
            &Dataset::new(rows),
            &Selector::new("Rice", "(missing)"),
            &StyleConfig::default(),
        )
        .unwrap();

        let text = format_stats(&out.stats);
        assert!(text.starts_with("=== Rice - (missing) ===\n"));
        assert!(text.contains("Compliant:            1  (33.3%)"));
        assert!(text.contains("Non-Compliant:        2  (66.7%)"));
        assert!(text.contains("  Quality parameters:\n    Chemical (2)\n"));
        assert!(text.contains("      Ash       1\n"));
        assert!(!text.contains("Safety parameters"));
    }
}
