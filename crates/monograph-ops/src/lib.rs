pub mod ops_dot;
pub mod ops_focus;
pub mod ops_groups;

use std::path::Path;

use monograph_core::config::GraphSettings;
use monograph_core::workspace::Workspace;
use monograph_graph::PackageGraph;
use monograph_util::errors::MonographResult;
use monograph_util::progress::{status, status_warn};

/// Discover the workspace below `root_dir` and build its closed graph.
pub fn load_graph(root_dir: &Path, settings: &GraphSettings) -> MonographResult<PackageGraph> {
    let workspace = Workspace::discover(root_dir)?;
    if workspace.members.is_empty() {
        status_warn(
            "Warning",
            &format!("no packages found in {}", root_dir.display()),
        );
    }
    let graph = monograph_graph::build_graph(workspace.members, settings.group_pattern())?;
    tracing::debug!("Graph converged after {} rounds", graph.rounds());
    status(
        "Analyzed",
        &format!("{} packages in {}", graph.len(), root_dir.display()),
    );
    Ok(graph)
}
