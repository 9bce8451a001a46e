//! Command dispatch and handler modules.

mod dot;
mod focus;
mod groups;

use std::path::{Path, PathBuf};

use miette::Result;
use monograph_core::config::{GraphSettings, MonographConfig};
use monograph_core::package::MANIFEST_FILE;
use monograph_core::workspace::{self, LERNA_FILE};
use monograph_util::errors::MonographError;

use crate::cli::{Cli, Command, GraphArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let root = workspace_root(cli.root.as_deref())?;
    match cli.command {
        Command::Dot { graph, group_view } => {
            let settings = load_settings(&root, &graph)?;
            dot::exec(&root, &settings, graph.focus.as_deref(), group_view.as_deref())
        }
        Command::Groups { graph } => {
            let settings = load_settings(&root, &graph)?;
            groups::exec(&root, &settings)
        }
        Command::Focus { graph } => {
            let settings = load_settings(&root, &graph)?;
            focus::exec(&root, &settings, graph.focus.as_deref())
        }
    }
}

/// The explicit `--root`, or the workspace enclosing the current directory.
fn workspace_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        if !root.is_dir() {
            return Err(MonographError::Manifest {
                message: format!("Workspace root {} is not a directory", root.display()),
            }
            .into());
        }
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(MonographError::Io)?;
    let root = workspace::find_root(&cwd).ok_or_else(|| MonographError::Manifest {
        message: format!(
            "Could not find {LERNA_FILE} or {MANIFEST_FILE} in this directory or any parent"
        ),
    })?;
    tracing::debug!("Workspace root: {}", root.display());
    Ok(root)
}

/// `monograph.toml` settings with the command-line flags layered on top.
fn load_settings(root: &Path, args: &GraphArgs) -> Result<GraphSettings> {
    let mut settings = MonographConfig::load(root)?.graph;
    args.apply(&mut settings);
    tracing::debug!("Effective settings: {settings:?}");
    Ok(settings)
}
