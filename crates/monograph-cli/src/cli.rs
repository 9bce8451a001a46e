//! CLI argument definitions for monograph.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use monograph_core::config::GraphSettings;

#[derive(Parser, Debug)]
#[command(
    name = "monograph",
    version,
    about = "Dependency graph views for multi-package JavaScript repositories",
    long_about = "monograph reads the packages of a lerna or npm/yarn workspace, closes their \
                  normal, dev and peer dependency graphs, and prints Graphviz documents, \
                  package groups, or the neighbourhood of a focus package."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root (default: nearest directory with lerna.json or package.json)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency graph as a Graphviz DOT document
    Dot {
        #[command(flatten)]
        graph: GraphArgs,
        /// Render only the packages of this group
        #[arg(long, conflicts_with = "focus")]
        group_view: Option<String>,
    },

    /// List package groups and their members
    Groups {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List the packages around a focus package
    Focus {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

/// Flags shared by every command. Unset flags fall back to `monograph.toml`.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Follow `dependencies`
    #[arg(long, overrides_with = "no_deps")]
    pub deps: bool,
    /// Ignore `dependencies`
    #[arg(long, overrides_with = "deps")]
    pub no_deps: bool,
    /// Follow `devDependencies`
    #[arg(long, overrides_with = "no_dev_deps")]
    pub dev_deps: bool,
    /// Ignore `devDependencies`
    #[arg(long, overrides_with = "dev_deps")]
    pub no_dev_deps: bool,
    /// Follow `peerDependencies`
    #[arg(long, overrides_with = "no_peer_deps")]
    pub peer_deps: bool,
    /// Ignore `peerDependencies`
    #[arg(long, overrides_with = "peer_deps")]
    pub no_peer_deps: bool,
    /// Show private packages
    #[arg(long, overrides_with = "no_private")]
    pub private: bool,
    /// Hide private packages
    #[arg(long, overrides_with = "private")]
    pub no_private: bool,
    /// Show public packages
    #[arg(long, overrides_with = "no_public")]
    pub public: bool,
    /// Hide public packages
    #[arg(long, overrides_with = "public")]
    pub no_public: bool,
    /// Keep only packages whose name matches this regex or contains this text
    #[arg(long)]
    pub include: Option<String>,
    /// Drop packages whose name matches this regex or contains this text
    #[arg(long)]
    pub exclude: Option<String>,
    /// Centre the view on this package
    #[arg(long)]
    pub focus: Option<String>,
    /// Maximum distance from the focus package
    #[arg(long)]
    pub focus_depth: Option<u32>,
    /// Group pattern with exactly one capture group ("" disables grouping)
    #[arg(long)]
    pub group: Option<String>,
    /// Format of the linked per-package documents
    #[arg(long)]
    pub format: Option<String>,
}

impl GraphArgs {
    /// Layer the flags that were given over `settings`.
    pub fn apply(&self, settings: &mut GraphSettings) {
        toggle(&mut settings.deps, self.deps, self.no_deps);
        toggle(&mut settings.dev_deps, self.dev_deps, self.no_dev_deps);
        toggle(&mut settings.peer_deps, self.peer_deps, self.no_peer_deps);
        toggle(&mut settings.private, self.private, self.no_private);
        toggle(&mut settings.public, self.public, self.no_public);
        if let Some(include) = &self.include {
            settings.include = Some(include.clone());
        }
        if let Some(exclude) = &self.exclude {
            settings.exclude = Some(exclude.clone());
        }
        if let Some(depth) = self.focus_depth {
            settings.focus_depth = depth;
        }
        if let Some(group) = &self.group {
            settings.group = group.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.clone();
        }
    }
}

/// Apply a `--x`/`--no-x` pair. clap keeps at most one of the two set.
fn toggle(setting: &mut bool, on: bool, off: bool) {
    if on {
        *setting = true;
    }
    if off {
        *setting = false;
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
