//! Operation: describe the package graph as a Graphviz DOT document.
//!
//! Three views share one renderer: the global view (no focus), a group view
//! (global view restricted to one group's names), and a focus view centred
//! on a single package. Only the document text is produced.

use std::fmt::Write as _;

use monograph_core::relation::RelationKind;
use monograph_graph::{FocusConfig, FocusPolicy, NodeId, PackageGraph};
use monograph_util::errors::{MonographError, MonographResult};

/// Name of the per-package document linked from every node.
pub const DOCUMENT_STEM: &str = "dependency-graph";

/// Options for one DOT document.
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Package the view is centred on.
    pub focus: Option<String>,
    /// Output format of the linked documents (`pdf`, `svg`, ...).
    pub format: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            focus: None,
            format: "pdf".to_string(),
        }
    }
}

/// Render the view selected by `opts`.
///
/// Fails with `UnknownFocusPackage` before producing any output when the
/// focus is not part of the graph.
pub fn render(graph: &PackageGraph, policy: &FocusPolicy, opts: &DotOptions) -> MonographResult<String> {
    let focus = graph.resolve_focus(opts.focus.as_deref())?;
    Ok(render_view(graph, policy, focus, &opts.format))
}

/// Render the global view of the packages whose names match `group`.
///
/// Fails with `UnknownGroup` when grouping is disabled or no package was
/// assigned to `group`.
pub fn render_group(
    graph: &PackageGraph,
    config: &FocusConfig,
    group: &str,
    format: &str,
) -> MonographResult<String> {
    if graph.groups().and_then(|groups| groups.get(group)).is_none() {
        return Err(MonographError::UnknownGroup {
            label: group.to_string(),
        }
        .into());
    }
    let policy = FocusPolicy::new(&FocusConfig {
        include: Some(regex::escape(group)),
        ..config.clone()
    })?;
    Ok(render_view(graph, &policy, None, format))
}

fn render_view(
    graph: &PackageGraph,
    policy: &FocusPolicy,
    focus: Option<NodeId>,
    format: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph G {{");
    let _ = writeln!(out, "  rankdir=\"RL\";");

    // Nothing is related through a disabled relation, so no relation means
    // an empty picture.
    let any_relation = policy.enabled_relations().next().is_some();
    let mut visible: Vec<(&str, NodeId)> = graph
        .nodes()
        .filter(|&(id, _)| any_relation && policy.is_in_focus(graph, focus, id))
        .map(|(id, node)| (node.name(), id))
        .collect();
    visible.sort();

    for &(name, id) in &visible {
        let node = graph.node(id);
        let location = node.package().location.display();
        let mut attrs = vec![
            ("label", name.to_string()),
            ("URL", format!("file://{location}/{DOCUMENT_STEM}.{format}")),
        ];
        if focus == Some(id) {
            attrs.push(("color", "red".to_string()));
            attrs.push(("style", "bold".to_string()));
        } else if !node.package().is_private() {
            attrs.push(("style", "dashed".to_string()));
        }
        let _ = writeln!(out, "  {}{};", quote(name), attr_list(&attrs));
    }

    for &(name, id) in &visible {
        let node = graph.node(id);
        for kind in policy.enabled_relations() {
            let mut parents: Vec<(&str, NodeId)> = node
                .parents(kind)
                .iter()
                .filter(|&&parent| policy.is_in_focus(graph, focus, parent))
                .map(|&parent| (graph.node(parent).name(), parent))
                .collect();
            parents.sort();
            for (parent_name, parent) in parents {
                let attrs = edge_attrs(kind, focus, id, parent);
                let _ = writeln!(
                    out,
                    "  {} -> {}{};",
                    quote(name),
                    quote(parent_name),
                    attr_list(&attrs)
                );
            }
        }
    }

    out.push_str("}\n");
    tracing::debug!("Rendered {} packages", visible.len());
    out
}

fn edge_attrs(
    kind: RelationKind,
    focus: Option<NodeId>,
    from: NodeId,
    to: NodeId,
) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::new();
    match kind {
        RelationKind::Normal => {}
        RelationKind::Peer => attrs.push(("style", "dotted".to_string())),
        RelationKind::Dev => attrs.push(("style", "dashed".to_string())),
    }
    if let Some(focus) = focus {
        if focus == from || focus == to {
            attrs.push(("color", "red".to_string()));
            if kind == RelationKind::Normal {
                attrs.push(("style", "bold".to_string()));
            }
        } else {
            attrs.push(("color", "gray".to_string()));
        }
    }
    attrs
}

fn attr_list(attrs: &[(&str, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{key}={}", quote(value)))
        .collect();
    format!(" [{}]", parts.join(", "))
}

/// Quote a DOT identifier.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
