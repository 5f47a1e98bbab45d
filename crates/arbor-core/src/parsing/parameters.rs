use regex::Regex;
use std::sync::LazyLock;

/// Suffix repeated after each parameter's unit in some source sheets, e.g.
/// "Aflatoxin, ppm Compliance Lead, ppm Compliance".
static END_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcompliance\b").expect("valid end marker pattern"));

static COMMA_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s{2,}|,").expect("valid comma pattern"));

const LINE_DELIMITERS: &[char] = &['\n', '\r', ';', '|'];

/// Split a free-text parameter cell into individual parameter names.
///
/// The rules form a strict cascade:
/// 1. If the whole-word marker "compliance" occurs (any case), split on it.
/// 2. Otherwise split on newline, carriage return, `;` and `|`.
/// 3. If that yields nothing, split on commas.
///
/// Fragments are trimmed of whitespace, commas and semicolons; empty
/// fragments are dropped. A blank or absent cell yields no parameters.
pub fn split_parameters(cell: Option<&str>) -> Vec<String> {
    let text = match cell {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Vec::new(),
    };

    if END_MARKER.is_match(text) {
        return collect_fragments(END_MARKER.split(text));
    }

    let parts = collect_fragments(text.split(LINE_DELIMITERS));
    if !parts.is_empty() {
        return parts;
    }

    // Only reached when the cell holds nothing but delimiters and
    // whitespace, so line delimiters are stripped here too.
    COMMA_SPLIT
        .split(text)
        .map(|p| p.trim_matches(|c: char| is_trim_char(c) || LINE_DELIMITERS.contains(&c)))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn collect_fragments<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    pieces
        .map(trim_fragment)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn trim_fragment(s: &str) -> &str {
    s.trim_matches(is_trim_char)
}

fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_marker_split() {
        assert_eq!(
            split_parameters(Some("Aflatoxin, ppm Compliance Lead, ppm Compliance")),
            vec!["Aflatoxin, ppm", "Lead, ppm"]
        );
    }

    #[test]
    fn test_end_marker_case_insensitive() {
        assert_eq!(
            split_parameters(Some("Moisture, % COMPLIANCE; Ash, % compliance")),
            vec!["Moisture, %", "Ash, %"]
        );
    }

    #[test]
    fn test_end_marker_must_be_whole_word() {
        // "noncompliance" is not the marker, so rule 2 applies.
        assert_eq!(
            split_parameters(Some("Lead noncompliance; Tin")),
            vec!["Lead noncompliance", "Tin"]
        );
    }

    #[test]
    fn test_semicolon_split() {
        assert_eq!(
            split_parameters(Some("Lead; Cadmium; Arsenic")),
            vec!["Lead", "Cadmium", "Arsenic"]
        );
    }

    #[test]
    fn test_newline_and_pipe_split() {
        assert_eq!(
            split_parameters(Some("Lead\r\nCadmium | Arsenic\n")),
            vec!["Lead", "Cadmium", "Arsenic"]
        );
    }

    #[test]
    fn test_commas_kept_without_line_delimiters() {
        // Rule 2 yields one non-empty fragment, so rule 3 never runs.
        assert_eq!(
            split_parameters(Some("Aflatoxin, ppm")),
            vec!["Aflatoxin, ppm"]
        );
    }

    #[test]
    fn test_only_delimiters_yields_nothing() {
        assert!(split_parameters(Some(" ;|, ;")).is_empty());
        assert!(split_parameters(Some(" | ")).is_empty());
        assert!(split_parameters(Some("|")).is_empty());
        assert!(split_parameters(Some("\n|\n")).is_empty());
        assert!(split_parameters(Some(",, |;")).is_empty());
    }

    #[test]
    fn test_empty_and_absent() {
        assert!(split_parameters(None).is_empty());
        assert!(split_parameters(Some("")).is_empty());
        assert!(split_parameters(Some("   ")).is_empty());
    }

    #[test]
    fn test_fragments_are_stable_when_resplit() {
        let inputs = [
            "Aflatoxin, ppm Compliance Lead, ppm Compliance",
            "Lead; Cadmium; Arsenic",
            "Total Ash\nAcid insoluble ash, %",
            "Uric acid | Sucrose, g/100g",
        ];
        for input in inputs {
            for fragment in split_parameters(Some(input)) {
                assert_eq!(split_parameters(Some(&fragment)), vec![fragment.clone()]);
            }
        }
    }
}
