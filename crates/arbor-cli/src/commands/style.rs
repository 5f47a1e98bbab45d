use arbor_core::error::ArborError;
use arbor_core::style::builtin;
use std::path::Path;

pub fn list() -> Result<(), ArborError> {
    println!("Available predefined styles:\n");
    for name in builtin::PRESETS {
        let style = builtin::load_preset(name)?;
        println!(
            "  {:<10} rankdir={} font={} {}pt shape={}",
            name, style.rankdir, style.font_name, style.font_size, style.node_shape
        );
        if let Some(ref desc) = style.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), ArborError> {
    let style = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ArborError> {
    let style = arbor_core::style::load_style(file)?;

    println!("Style '{}' is valid.", file.display());
    println!("  Layout: rankdir={}, nodesep={}, ranksep={}", style.rankdir, style.node_sep, style.rank_sep);
    println!(
        "  Nodes: shape={}, font={} {}pt",
        style.node_shape, style.font_name, style.font_size
    );
    println!(
        "  Colors: default={}, compliant={}, non-compliant={}",
        style.default_color, style.compliant_color, style.noncompliant_color
    );

    // Not errors: colors are passed through to Graphviz untouched.
    let warnings: Vec<String> = [
        ("default_color", &style.default_color),
        ("compliant_color", &style.compliant_color),
        ("noncompliant_color", &style.noncompliant_color),
    ]
    .iter()
    .filter(|(_, value)| !value.starts_with('#'))
    .map(|(name, value)| format!("{name} '{value}' is not a hex color; Graphviz must know it by name"))
    .collect();

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
