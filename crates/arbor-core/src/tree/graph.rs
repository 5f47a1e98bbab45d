use crate::style::schema::StyleConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Title and count suffix separated by a line break.
    pub label: String,
    /// Overrides the style's default fill when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// A directed tree of labelled nodes plus the style it is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub style: StyleConfig,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, id: impl Into<String>, label: String, fill_color: Option<&str>) {
        self.nodes.push(Node {
            id: id.into(),
            label,
            fill_color: fill_color.map(str::to_string),
        });
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
        });
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Ids of the direct children of `id`, in insertion order.
    pub fn children(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .map(|e| e.to.as_str())
            .collect()
    }
}

/// Label with a sample count and its share of the total:
/// `"{title}\n[{count} Samples; {pct}%]"`.
pub fn share_label(title: &str, count: usize, pct: Decimal) -> String {
    format!("{title}\n[{count} Samples; {pct:.1}%]")
}

/// Label with an absolute count only: `"{title}\n[1 Sample]"` or
/// `"{title}\n[N Samples]"`.
pub fn count_label(title: &str, count: usize) -> String {
    let unit = if count == 1 { "Sample" } else { "Samples" };
    format!("{title}\n[{count} {unit}]")
}
