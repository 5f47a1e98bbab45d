pub mod builtin;
pub mod schema;

use crate::error::ArborError;
use schema::StyleConfig;
use std::path::Path;

/// Load a style from a JSON file.
pub fn load_style(path: &Path) -> Result<StyleConfig, ArborError> {
    let content = std::fs::read_to_string(path).map_err(|e| ArborError::StyleLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_style(&content, path)
}

/// Parse a style from a JSON string.
pub fn parse_style(json: &str, source: &Path) -> Result<StyleConfig, ArborError> {
    let style: StyleConfig = serde_json::from_str(json).map_err(|e| ArborError::StyleLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_style(&style)?;
    Ok(style)
}

/// Parse a style from a JSON string (no file path context).
pub fn parse_style_str(json: &str) -> Result<StyleConfig, ArborError> {
    let style: StyleConfig = serde_json::from_str(json).map_err(ArborError::Json)?;
    validate_style(&style)?;
    Ok(style)
}

/// Validate that a style is usable in a graph description.
pub fn validate_style(style: &StyleConfig) -> Result<(), ArborError> {
    if style.font_name.trim().is_empty() {
        return Err(ArborError::StyleInvalid("font_name must not be empty".into()));
    }

    if !(1..=72).contains(&style.font_size) {
        return Err(ArborError::StyleInvalid(format!(
            "font_size {} out of range (expected 1-72)",
            style.font_size
        )));
    }

    if style.node_shape.trim().is_empty() {
        return Err(ArborError::StyleInvalid("node_shape must not be empty".into()));
    }

    for (name, value) in [("node_sep", style.node_sep), ("rank_sep", style.rank_sep)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ArborError::StyleInvalid(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }

    for (name, value) in [
        ("default_color", &style.default_color),
        ("compliant_color", &style.compliant_color),
        ("noncompliant_color", &style.noncompliant_color),
    ] {
        if value.trim().is_empty() {
            return Err(ArborError::StyleInvalid(format!("{name} must not be empty")));
        }
    }

    Ok(())
}
