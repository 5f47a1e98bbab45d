use crate::error::ArborError;
use crate::style::parse_style_str;
use crate::style::schema::StyleConfig;

const DEFAULT_JSON: &str = include_str!("../../presets/default.json");
const LANDSCAPE_JSON: &str = include_str!("../../presets/landscape.json");
const PRINT_JSON: &str = include_str!("../../presets/print.json");

/// Available predefined styles.
pub const PRESETS: &[&str] = &["default", "landscape", "print"];

/// Load a predefined style by name.
pub fn load_preset(name: &str) -> Result<StyleConfig, ArborError> {
    let json = match name {
        "default" => DEFAULT_JSON,
        "landscape" => LANDSCAPE_JSON,
        "print" => PRINT_JSON,
        _ => {
            return Err(ArborError::UnknownPreset {
                name: name.to_string(),
                available: PRESETS.join(", "),
            })
        }
    };
    parse_style_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::schema::RankDir;

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            assert!(load_preset(name).is_ok(), "preset {name} failed to load");
        }
    }

    #[test]
    fn test_default_preset_matches_default_style() {
        let mut preset = load_preset("default").unwrap();
        preset.description = None;
        assert_eq!(preset, StyleConfig::default());
    }

    #[test]
    fn test_landscape_is_left_to_right() {
        assert_eq!(load_preset("landscape").unwrap().rankdir, RankDir::LeftToRight);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("neon").is_err());
    }
}
