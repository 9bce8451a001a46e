use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use monograph_util::errors::MonographError;
use serde::{Deserialize, Serialize};

use crate::relation::RelationKind;

/// Name of the manifest file of every package.
pub const MANIFEST_FILE: &str = "package.json";

/// The fields of a `package.json` the dependency graph cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Load and parse a `package.json` file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MonographError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        serde_json::from_str(&content).map_err(|e| {
            MonographError::Manifest {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse a `package.json` from a string.
    pub fn from_str(content: &str) -> Result<Self, MonographError> {
        serde_json::from_str(content).map_err(|e| MonographError::Manifest {
            message: format!("Failed to parse package.json: {e}"),
        })
    }

    /// Declared dependencies for one relation, name to version range.
    pub fn dependencies_of(&self, kind: RelationKind) -> &BTreeMap<String, String> {
        match kind {
            RelationKind::Normal => &self.dependencies,
            RelationKind::Dev => &self.dev_dependencies,
            RelationKind::Peer => &self.peer_dependencies,
        }
    }
}

/// A workspace package: its manifest plus where it lives.
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    pub manifest: PackageManifest,
    /// Directory containing the package's `package.json`.
    pub location: PathBuf,
    /// Root directory of the workspace the package belongs to.
    pub root_path: PathBuf,
}

impl Package {
    /// Wrap a manifest. Fails if the manifest has no `name`.
    pub fn new(
        manifest: PackageManifest,
        location: impl Into<PathBuf>,
        root_path: impl Into<PathBuf>,
    ) -> Result<Self, MonographError> {
        let location = location.into();
        let name = match manifest.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(MonographError::Manifest {
                    message: format!("Package at {} has no name", location.display()),
                })
            }
        };
        Ok(Self {
            name,
            manifest,
            location,
            root_path: root_path.into(),
        })
    }

    /// Read the package whose `package.json` lives in `dir`.
    pub fn from_dir(dir: &Path, root_path: &Path) -> miette::Result<Self> {
        let manifest = PackageManifest::from_path(&dir.join(MANIFEST_FILE))?;
        Ok(Self::new(manifest, dir, root_path)?)
    }

    /// Returns the package name from the manifest.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the package version, if declared.
    pub fn version(&self) -> Option<&str> {
        self.manifest.version.as_deref()
    }

    pub fn is_private(&self) -> bool {
        self.manifest.private
    }

    /// Names of the packages declared under `kind`.
    pub fn dependency_names(&self, kind: RelationKind) -> impl Iterator<Item = &str> {
        self.manifest.dependencies_of(kind).keys().map(String::as_str)
    }
}
