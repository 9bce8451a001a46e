//! Operation: list package groups.

use monograph_graph::PackageGraph;
use monograph_util::fs::sanitize_file_name;

/// One group and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub label: String,
    /// Path component a per-group document would be stored under.
    pub dir_name: String,
    pub members: Vec<String>,
}

/// Groups of the graph in label order, or `None` when grouping is disabled.
pub fn list(graph: &PackageGraph) -> Option<Vec<GroupSummary>> {
    let groups = graph.groups()?;
    Some(
        groups
            .iter()
            .map(|(label, members)| GroupSummary {
                label: label.to_string(),
                dir_name: sanitize_file_name(label, "_"),
                members: members.to_vec(),
            })
            .collect(),
    )
}

/// Plain-text listing, one header line per group followed by its members.
pub fn format_list(groups: &[GroupSummary]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "{} ({} packages, {})\n",
            group.label,
            group.members.len(),
            group.dir_name
        ));
        for member in &group.members {
            out.push_str(&format!("  {member}\n"));
        }
    }
    out
}
