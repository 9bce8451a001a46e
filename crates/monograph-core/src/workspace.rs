use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use monograph_util::errors::MonographError;
use monograph_util::fs::find_ancestor_with;
use serde::Deserialize;

use crate::package::{Package, MANIFEST_FILE};

/// Lerna's configuration file, checked before `package.json` workspaces.
pub const LERNA_FILE: &str = "lerna.json";

/// Member globs used when the workspace declares none.
pub const DEFAULT_MEMBER_PATTERNS: &[&str] = &["packages/*"];

/// Directories never searched for members.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// A multi-package workspace: a root directory with member packages.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root_dir: PathBuf,
    pub members: Vec<Package>,
}

#[derive(Debug, Default, Deserialize)]
struct LernaConfig {
    #[serde(default)]
    packages: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RootManifest {
    #[serde(default)]
    workspaces: Option<WorkspacesField>,
}

/// `workspaces` is either a list of globs or `{ "packages": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkspacesField {
    List(Vec<String>),
    Detailed {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl Workspace {
    /// Discover every member package below `root_dir`, sorted by name.
    pub fn discover(root_dir: &Path) -> miette::Result<Self> {
        let patterns = member_patterns(root_dir)?;
        tracing::debug!("Workspace member patterns: {}", patterns.join(", "));
        let (include, exclude) = compile_patterns(&patterns)?;

        let dirs = monograph_util::fs::list_dirs(root_dir, SKIPPED_DIRS)
            .map_err(MonographError::Io)?;
        let mut members = Vec::new();
        for rel in dirs {
            if !include.is_match(&rel) || exclude.is_match(&rel) {
                continue;
            }
            let dir = root_dir.join(&rel);
            if !dir.join(MANIFEST_FILE).is_file() {
                continue;
            }
            members.push(Package::from_dir(&dir, root_dir)?);
        }
        members.sort_by(|a, b| a.name().cmp(b.name()));
        tracing::debug!("Found {} workspace packages", members.len());

        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            members,
        })
    }

    /// Look up a member by package name.
    pub fn member(&self, name: &str) -> Option<&Package> {
        self.members.iter().find(|p| p.name() == name)
    }
}

/// Find the workspace root for `start`.
///
/// The nearest directory with `lerna.json` wins. Otherwise the nearest
/// `package.json` declaring `workspaces` is used, falling back to the nearest
/// `package.json` of any kind.
pub fn find_root(start: &Path) -> Option<PathBuf> {
    if let Some(root) = find_ancestor_with(start, LERNA_FILE) {
        return Some(root);
    }
    let nearest = find_ancestor_with(start, MANIFEST_FILE)?;
    let mut current = nearest.clone();
    loop {
        if declares_workspaces(&current.join(MANIFEST_FILE)) {
            return Some(current);
        }
        match current
            .parent()
            .and_then(|parent| find_ancestor_with(parent, MANIFEST_FILE))
        {
            Some(next) => current = next,
            None => return Some(nearest),
        }
    }
}

fn declares_workspaces(manifest_path: &Path) -> bool {
    read_json::<RootManifest>(manifest_path)
        .map(|root| root.workspaces.is_some())
        .unwrap_or(false)
}

/// Member globs declared by the workspace at `root_dir`.
///
/// `lerna.json` `packages` wins over `package.json` `workspaces`; with
/// neither, [`DEFAULT_MEMBER_PATTERNS`] apply.
pub fn member_patterns(root_dir: &Path) -> miette::Result<Vec<String>> {
    let lerna_path = root_dir.join(LERNA_FILE);
    if lerna_path.is_file() {
        let lerna: LernaConfig = read_json(&lerna_path)?;
        if let Some(packages) = lerna.packages {
            return Ok(packages);
        }
    }

    let manifest_path = root_dir.join(MANIFEST_FILE);
    if manifest_path.is_file() {
        let root: RootManifest = read_json(&manifest_path)?;
        match root.workspaces {
            Some(WorkspacesField::List(packages)) => return Ok(packages),
            Some(WorkspacesField::Detailed { packages }) => return Ok(packages),
            None => {}
        }
    }

    Ok(DEFAULT_MEMBER_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> miette::Result<T> {
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

/// Split globs into an include set and an exclude set (`!`-prefixed).
fn compile_patterns(patterns: &[String]) -> miette::Result<(GlobSet, GlobSet)> {
    let mut include = GlobSetBuilder::new();
    let mut exclude = GlobSetBuilder::new();
    for raw in patterns {
        let (builder, pattern) = match raw.strip_prefix('!') {
            Some(negated) => (&mut exclude, negated),
            None => (&mut include, raw.as_str()),
        };
        let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| MonographError::InvalidPattern {
                pattern: raw.clone(),
                message: e.to_string(),
            })?;
        builder.add(glob);
    }
    let build = |builder: GlobSetBuilder| {
        builder.build().map_err(|e| MonographError::InvalidPattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })
    };
    Ok((build(include)?, build(exclude)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn star_does_not_cross_directories() {
        let (include, _) = compile_patterns(&strings(&["packages/*"])).unwrap();
        assert!(include.is_match("packages/app"));
        assert!(!include.is_match("packages/app/nested"));
    }

    #[test]
    fn double_star_crosses_directories() {
        let (include, _) = compile_patterns(&strings(&["libs/**"])).unwrap();
        assert!(include.is_match("libs/a/b"));
    }

    #[test]
    fn negated_patterns_go_to_exclude() {
        let (include, exclude) =
            compile_patterns(&strings(&["./packages/*/", "!packages/legacy"])).unwrap();
        assert!(include.is_match("packages/legacy"));
        assert!(exclude.is_match("packages/legacy"));
        assert!(!exclude.is_match("packages/app"));
    }
}
