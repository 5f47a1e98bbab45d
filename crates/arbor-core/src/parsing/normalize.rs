/// Normalised overall-compliance verdict of a compliant sample.
pub const COMPLIANT_TOKEN: &str = "compliant as per fssr";

/// Normalised quality verdict of a sub-standard sample.
pub const SUBSTANDARD_TOKEN: &str = "sub-standard";

/// Normalised safety verdict of an unsafe sample.
pub const UNSAFE_TOKEN: &str = "unsafe";

/// Spellings that mark a labelling verdict as mis-labelled. Matched as
/// substrings of the normalised verdict, which may carry extra free text.
pub const MIS_LABELLED_TOKENS: &[&str] = &[
    "mis-labelled",
    "mis-labeled",
    "misbranded",
    "mis-branded",
    "mis branded",
    "mis labelled",
    "mis labeled",
];

/// Normalize a verdict cell for comparison: trim, then lowercase.
pub fn normalize_verdict(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_compliant(verdict: &str) -> bool {
    normalize_verdict(verdict) == COMPLIANT_TOKEN
}

pub fn is_substandard(verdict: &str) -> bool {
    normalize_verdict(verdict) == SUBSTANDARD_TOKEN
}

pub fn is_unsafe(verdict: &str) -> bool {
    normalize_verdict(verdict) == UNSAFE_TOKEN
}

pub fn is_mis_labelled(verdict: &str) -> bool {
    let normalized = normalize_verdict(verdict);
    MIS_LABELLED_TOKENS
        .iter()
        .any(|token| normalized.contains(token))
}
