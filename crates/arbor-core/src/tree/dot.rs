use crate::tree::graph::Graph;
use std::fmt::Write;

/// Outline color of every node.
const NODE_BORDER_COLOR: &str = "#d0d0d0";

/// Render a graph as a Graphviz DOT document.
///
/// Graph-level attributes come from the style; nodes only override
/// `fillcolor`. Nodes are written before edges, each in insertion order,
/// so identical graphs render to identical bytes.
pub fn render_dot(graph: &Graph) -> String {
    let style = &graph.style;
    let mut out = String::new();

    let _ = writeln!(out, "digraph G {{");
    let _ = writeln!(out, "  rankdir={};", style.rankdir);
    let _ = writeln!(
        out,
        "  graph [splines=ortho, nodesep={}, ranksep={}];",
        style.node_sep, style.rank_sep
    );
    let _ = writeln!(
        out,
        "  node [shape=\"{}\", style=\"rounded,filled\", color=\"{}\", fillcolor=\"{}\", fontname=\"{}\", fontsize={}];",
        dot_escape(&style.node_shape),
        NODE_BORDER_COLOR,
        dot_escape(&style.default_color),
        dot_escape(&style.font_name),
        style.font_size
    );
    let _ = writeln!(
        out,
        "  edge [fontname=\"{}\", fontsize={}, arrowhead=normal];",
        dot_escape(&style.font_name),
        style.edge_font_size()
    );

    for node in &graph.nodes {
        match &node.fill_color {
            Some(color) => {
                let _ = writeln!(
                    out,
                    "  {} [label=\"{}\", fillcolor=\"{}\"];",
                    node.id,
                    dot_escape(&node.label),
                    dot_escape(color)
                );
            }
            None => {
                let _ = writeln!(out, "  {} [label=\"{}\"];", node.id, dot_escape(&node.label));
            }
        }
    }

    for edge in &graph.edges {
        let _ = writeln!(out, "  {} -> {};", edge.from, edge.to);
    }

    out.push('}');
    out
}

/// Escape text for a double-quoted DOT string. Line breaks become the
/// DOT `\n` escape.
fn dot_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::schema::{RankDir, StyleConfig};

    #[test]
    fn test_escape() {
        assert_eq!(dot_escape("a\nb"), "a\\nb");
        assert_eq!(dot_escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(dot_escape("C:\\path"), "C:\\\\path");
        assert_eq!(dot_escape("line\r\nnext"), "line\\nnext");
    }

    #[test]
    fn test_render_header_uses_style() {
        let style = StyleConfig {
            rankdir: RankDir::LeftToRight,
            font_name: "Courier".into(),
            font_size: 16,
            node_sep: 1.5,
            ..Default::default()
        };
        let dot = render_dot(&Graph::new(style));
        assert!(dot.starts_with("digraph G {\n"));
        assert!(dot.contains("  rankdir=LR;\n"));
        assert!(dot.contains("nodesep=1.5, ranksep=0.6"));
        assert!(dot.contains("fontname=\"Courier\", fontsize=16]"));
        assert!(dot.contains("edge [fontname=\"Courier\", fontsize=14, arrowhead=normal]"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn test_render_nodes_and_edges() {
        let mut g = Graph::new(StyleConfig::default());
        g.add_node("root", "Rice\n[2 Samples; 100.0%]".into(), None);
        g.add_node("comp", "Compliant\n[1 Samples; 50.0%]".into(), Some("#d4edda"));
        g.add_edge("root", "comp");
        let dot = render_dot(&g);
        assert!(dot.contains("  root [label=\"Rice\\n[2 Samples; 100.0%]\"];\n"));
        assert!(dot.contains(
            "  comp [label=\"Compliant\\n[1 Samples; 50.0%]\", fillcolor=\"#d4edda\"];\n"
        ));
        assert!(dot.contains("  root -> comp;\n"));
    }
}
