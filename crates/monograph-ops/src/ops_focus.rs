//! Operation: list the packages inside a focus window.

use monograph_core::relation::RelationKind;
use monograph_graph::{FocusPolicy, NodeId, PackageGraph};
use monograph_util::errors::MonographResult;

/// Which side of the focus a related package sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The focus depends on the package.
    Dependency,
    /// The package depends on the focus.
    Dependent,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Dependency => "dependency",
            Direction::Dependent => "dependent",
        }
    }
}

/// One enabled relation through which a package is reached from the focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reach {
    pub relation: RelationKind,
    pub direction: Direction,
    pub distance: u32,
}

/// A package inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEntry {
    pub name: String,
    pub is_focus: bool,
    /// Empty for the focus itself and when no focus is set.
    pub reaches: Vec<Reach>,
}

/// Packages in scope around `focus`: the focus first, then the rest by name.
pub fn window(
    graph: &PackageGraph,
    policy: &FocusPolicy,
    focus: Option<&str>,
) -> MonographResult<Vec<FocusEntry>> {
    let focus = graph.resolve_focus(focus)?;
    let mut entries: Vec<FocusEntry> = graph
        .node_ids()
        .filter(|&id| policy.is_in_focus(graph, focus, id))
        .map(|id| entry(graph, policy, focus, id))
        .collect();
    entries.sort_by(|a, b| b.is_focus.cmp(&a.is_focus).then_with(|| a.name.cmp(&b.name)));
    tracing::debug!("Focus window holds {} packages", entries.len());
    Ok(entries)
}

fn entry(graph: &PackageGraph, policy: &FocusPolicy, focus: Option<NodeId>, id: NodeId) -> FocusEntry {
    let node = graph.node(id);
    let is_focus = focus == Some(id);
    let mut reaches = Vec::new();
    if let (Some(focus), false) = (focus, is_focus) {
        let focus_node = graph.node(focus);
        for relation in policy.enabled_relations() {
            let Some(distance) = policy.within_depth(graph, focus, id, relation) else {
                continue;
            };
            let direction = if focus_node.ancestors(relation).contains(&id) {
                Direction::Dependency
            } else {
                Direction::Dependent
            };
            reaches.push(Reach {
                relation,
                direction,
                distance,
            });
        }
    }
    FocusEntry {
        name: node.name().to_string(),
        is_focus,
        reaches,
    }
}

/// Plain-text listing, one package per line.
pub fn format_window(entries: &[FocusEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        if entry.is_focus {
            out.push_str(&format!("{} (focus)\n", entry.name));
            continue;
        }
        if entry.reaches.is_empty() {
            out.push_str(&format!("{}\n", entry.name));
            continue;
        }
        let reaches: Vec<String> = entry
            .reaches
            .iter()
            .map(|r| format!("{} {} at {}", r.relation, r.direction.as_str(), r.distance))
            .collect();
        out.push_str(&format!("{}: {}\n", entry.name, reaches.join(", ")));
    }
    out
}
