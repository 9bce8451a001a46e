use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use monograph_util::errors::MonographError;

/// Name of the optional configuration file at the workspace root.
pub const CONFIG_FILE: &str = "monograph.toml";

/// Group pattern used when none is configured: `@scope/prefix-name` groups
/// as `@scope/prefix`.
pub const DEFAULT_GROUP_PATTERN: &str = "(@[^/]*/[^-]*)-";

/// Workspace configuration loaded from `monograph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonographConfig {
    #[serde(default)]
    pub graph: GraphSettings,
}

/// Graph settings from `[graph]`: defaults for every CLI flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    #[serde(default = "default_true")]
    pub deps: bool,
    #[serde(default, rename = "dev-deps")]
    pub dev_deps: bool,
    #[serde(default, rename = "peer-deps")]
    pub peer_deps: bool,
    #[serde(default = "default_true")]
    pub private: bool,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default)]
    pub include: Option<String>,
    #[serde(default)]
    pub exclude: Option<String>,
    #[serde(default = "default_focus_depth", rename = "focus-depth")]
    pub focus_depth: u32,
    /// Group pattern; an empty string disables grouping.
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            deps: true,
            dev_deps: false,
            peer_deps: false,
            private: true,
            public: true,
            include: None,
            exclude: None,
            focus_depth: default_focus_depth(),
            group: default_group(),
            format: default_format(),
        }
    }
}

impl GraphSettings {
    /// The group pattern, or `None` when grouping is disabled.
    pub fn group_pattern(&self) -> Option<&str> {
        if self.group.is_empty() {
            None
        } else {
            Some(&self.group)
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_focus_depth() -> u32 {
    1
}

fn default_group() -> String {
    DEFAULT_GROUP_PATTERN.to_string()
}

fn default_format() -> String {
    "pdf".to_string()
}

impl MonographConfig {
    /// Load `monograph.toml` from `root_dir`, or return defaults if the file doesn't exist.
    pub fn load(root_dir: &Path) -> miette::Result<Self> {
        let path = Self::path_in(root_dir);
        if !path.is_file() {
            tracing::debug!("No {CONFIG_FILE} in {}, using defaults", root_dir.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| MonographError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Ok(Self::from_str(&content)?)
    }

    /// Parse a `monograph.toml` from a string.
    pub fn from_str(content: &str) -> Result<Self, MonographError> {
        toml::from_str(content).map_err(|e| MonographError::Config {
            message: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })
    }

    /// Returns the config file path for a workspace root.
    pub fn path_in(root_dir: &Path) -> PathBuf {
        root_dir.join(CONFIG_FILE)
    }
}
