use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which tree ranks are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::TopToBottom => write!(f, "TB"),
            RankDir::LeftToRight => write!(f, "LR"),
        }
    }
}

impl RankDir {
    pub fn from_str_loose(s: &str) -> Option<RankDir> {
        match s.trim().to_lowercase().as_str() {
            "tb" | "top-to-bottom" | "top" | "vertical" => Some(RankDir::TopToBottom),
            "lr" | "left-to-right" | "left" | "horizontal" => Some(RankDir::LeftToRight),
            _ => None,
        }
    }
}

/// Display settings applied to a generated tree.
///
/// Values are passed through to the graph description as-is; only their
/// types and basic ranges are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rankdir: RankDir,
    pub font_name: String,
    pub font_size: u32,
    /// Graphviz node shape, e.g. "box", "ellipse".
    pub node_shape: String,
    /// Horizontal spacing between sibling nodes, in inches.
    pub node_sep: f64,
    /// Vertical spacing between ranks, in inches.
    pub rank_sep: f64,
    pub default_color: String,
    pub compliant_color: String,
    pub noncompliant_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            description: None,
            rankdir: RankDir::TopToBottom,
            font_name: "Helvetica".into(),
            font_size: 12,
            node_shape: "box".into(),
            node_sep: 0.5,
            rank_sep: 0.6,
            default_color: "#ffffff".into(),
            compliant_color: "#d4edda".into(),
            noncompliant_color: "#f8d7da".into(),
        }
    }
}

impl StyleConfig {
    /// Font size used for edge labels.
    pub fn edge_font_size(&self) -> u32 {
        self.font_size.saturating_sub(2).max(8)
    }
}
