//! Focus predicate: which packages are in scope for one rendering pass.

use monograph_core::config::GraphSettings;
use monograph_core::package::Package;
use monograph_core::relation::{RelationKind, Relations};
use monograph_util::errors::MonographError;
use regex::Regex;

use crate::graph::PackageGraph;
use crate::node::NodeId;

/// Plain-data policy snapshot, usually filled from CLI flags or config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusConfig {
    /// Which relations count when deciding reachability from the focus.
    pub relations: Relations<bool>,
    /// Show private packages.
    pub private: bool,
    /// Show public packages.
    pub public: bool,
    /// Keep only names matching this regex or containing this text.
    pub include: Option<String>,
    /// Drop names matching this regex or containing this text.
    pub exclude: Option<String>,
    /// Maximum hop distance from the focus.
    pub max_depth: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            relations: Relations::new(true, false, false),
            private: true,
            public: true,
            include: None,
            exclude: None,
            max_depth: 1,
        }
    }
}

impl From<&GraphSettings> for FocusConfig {
    fn from(settings: &GraphSettings) -> Self {
        Self {
            relations: Relations::new(settings.deps, settings.dev_deps, settings.peer_deps),
            private: settings.private,
            public: settings.public,
            include: settings.include.clone(),
            exclude: settings.exclude.clone(),
            max_depth: settings.focus_depth,
        }
    }
}

/// A name filter that matches either as a regex or as plain text.
#[derive(Debug, Clone)]
struct NamePattern {
    raw: String,
    regex: Regex,
}

impl NamePattern {
    fn new(raw: &str) -> Result<Self, MonographError> {
        let regex = Regex::new(raw).map_err(|e| MonographError::InvalidPattern {
            pattern: raw.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name) || name.contains(&self.raw)
    }
}

/// Compiled focus policy, fixed for one invocation.
#[derive(Debug, Clone)]
pub struct FocusPolicy {
    relations: Relations<bool>,
    private: bool,
    public: bool,
    include: Option<NamePattern>,
    exclude: Option<NamePattern>,
    max_depth: u32,
}

impl FocusPolicy {
    pub fn new(config: &FocusConfig) -> Result<Self, MonographError> {
        Ok(Self {
            relations: config.relations.clone(),
            private: config.private,
            public: config.public,
            include: config.include.as_deref().map(NamePattern::new).transpose()?,
            exclude: config.exclude.as_deref().map(NamePattern::new).transpose()?,
            max_depth: config.max_depth,
        })
    }

    /// Enabled relations in [`RelationKind::ALL`] order.
    pub fn enabled_relations(&self) -> impl Iterator<Item = RelationKind> + '_ {
        self.relations
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(kind, _)| kind)
    }

    /// Visibility and name filters, independent of any focus.
    pub fn accepts(&self, package: &Package) -> bool {
        let visible = if package.is_private() {
            self.private
        } else {
            self.public
        };
        if !visible {
            return false;
        }
        if let Some(include) = &self.include {
            if !include.matches(package.name()) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.matches(package.name()) {
                return false;
            }
        }
        true
    }

    /// Distance from `focus` to `node` under `kind` when the two are related
    /// under that relation and no further apart than the maximum depth.
    pub fn within_depth(
        &self,
        graph: &PackageGraph,
        focus: NodeId,
        node: NodeId,
        kind: RelationKind,
    ) -> Option<u32> {
        if !graph.node(focus).is_related(node, kind) {
            return None;
        }
        graph
            .distances(kind)
            .get(focus, node)
            .filter(|&distance| distance <= self.max_depth)
    }

    /// Whether `node` is in scope when the view is centred on `focus`.
    ///
    /// The focus itself always is. Otherwise the node must pass the
    /// visibility and name filters and, when a focus is set, be an ancestor
    /// or descendant of it within the maximum depth under at least one
    /// enabled relation.
    pub fn is_in_focus(&self, graph: &PackageGraph, focus: Option<NodeId>, node: NodeId) -> bool {
        if focus == Some(node) {
            return true;
        }
        if !self.accepts(graph.node(node).package()) {
            return false;
        }
        let Some(focus) = focus else {
            return true;
        };
        self.enabled_relations()
            .any(|kind| self.within_depth(graph, focus, node, kind).is_some())
    }
}
