//! Graph nodes and their per-relation sets.

use std::collections::BTreeSet;

use monograph_core::package::Package;
use monograph_core::relation::{RelationKind, Relations};
use petgraph::graph::NodeIndex;

/// Index of a node in the package graph arena.
pub type NodeId = NodeIndex;

/// Direct and transitive neighbours of a node under one relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSets {
    /// Packages this node declares a dependency on.
    pub parents: BTreeSet<NodeId>,
    /// Packages declaring a dependency on this node.
    pub children: BTreeSet<NodeId>,
    /// Transitive closure of `parents`.
    pub ancestors: BTreeSet<NodeId>,
    /// Transitive closure of `children`.
    pub descendants: BTreeSet<NodeId>,
}

/// One workspace package inside the graph.
#[derive(Debug, Clone)]
pub struct Node {
    package: Package,
    group: Option<String>,
    pub(crate) relations: Relations<RelationSets>,
}

impl Node {
    pub(crate) fn new(package: Package, group: Option<String>) -> Self {
        Self {
            package,
            group,
            relations: Relations::default(),
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    /// Group label assigned at construction, if grouping was requested.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn parents(&self, kind: RelationKind) -> &BTreeSet<NodeId> {
        &self.relations[kind].parents
    }

    pub fn children(&self, kind: RelationKind) -> &BTreeSet<NodeId> {
        &self.relations[kind].children
    }

    pub fn ancestors(&self, kind: RelationKind) -> &BTreeSet<NodeId> {
        &self.relations[kind].ancestors
    }

    pub fn descendants(&self, kind: RelationKind) -> &BTreeSet<NodeId> {
        &self.relations[kind].descendants
    }

    /// Whether `other` is an ancestor or a descendant of this node under `kind`.
    pub fn is_related(&self, other: NodeId, kind: RelationKind) -> bool {
        let sets = &self.relations[kind];
        sets.ancestors.contains(&other) || sets.descendants.contains(&other)
    }
}
