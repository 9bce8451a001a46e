//! The converged package graph and its builder.

use std::collections::{BTreeMap, HashMap};

use monograph_core::package::Package;
use monograph_core::relation::{RelationKind, Relations};
use monograph_util::errors::MonographError;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use crate::distance::DistanceMap;
use crate::group::{GroupAssigner, Groups};
use crate::node::{Node, NodeId};
use crate::registry::Registry;
use crate::{closure, edges, MAX_CLOSURE_ROUNDS};

/// Configures and runs a graph build.
pub struct GraphBuilder {
    packages: Vec<Package>,
    group_pattern: Option<String>,
    max_rounds: usize,
}

impl GraphBuilder {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages,
            group_pattern: None,
            max_rounds: MAX_CLOSURE_ROUNDS,
        }
    }

    /// Group packages by the first capture group of `pattern`.
    pub fn group_pattern(mut self, pattern: Option<&str>) -> Self {
        self.group_pattern = pattern.map(str::to_string);
        self
    }

    /// Override the closure round cap.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Register nodes, link edges, and run the closure to convergence.
    pub fn build(self) -> Result<PackageGraph, MonographError> {
        let grouper = self
            .group_pattern
            .as_deref()
            .map(GroupAssigner::new)
            .transpose()?;

        let mut registry = Registry::new(self.packages, grouper.as_ref())?;
        edges::link_parents(&mut registry);
        edges::link_children(&mut registry);
        let rounds = closure::close(&mut registry, self.max_rounds)?;

        tracing::debug!(
            "Built graph of {} packages and {} direct edges",
            registry.graph.node_count(),
            registry.graph.edge_count()
        );

        Ok(PackageGraph {
            graph: registry.graph,
            index: registry.index,
            distances: registry.distances,
            groups: registry.groups,
            rounds,
        })
    }
}

/// A fully closed dependency graph. Read-only once built.
#[derive(Debug, Clone)]
pub struct PackageGraph {
    graph: DiGraph<Node, RelationKind>,
    index: HashMap<String, NodeId>,
    distances: Relations<DistanceMap>,
    groups: Option<Groups>,
    rounds: usize,
}

impl PackageGraph {
    /// Number of packages.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the node for an id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.graph[id]
    }

    /// Look up a node id by package name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Look up a node by package name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.find(name).map(|id| &self.graph[id])
    }

    /// All node ids, in package registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// All nodes with their ids, in package registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.graph
            .node_indices()
            .map(move |id| (id, &self.graph[id]))
    }

    /// Nodes keyed by package name.
    pub fn nodes_by_name(&self) -> BTreeMap<&str, &Node> {
        self.graph
            .node_weights()
            .map(|node| (node.name(), node))
            .collect()
    }

    /// Direct dependency edges as `(dependent, dependency, relation)`.
    pub fn direct_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, RelationKind)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    /// Distance table of one relation.
    pub fn distances(&self, kind: RelationKind) -> &DistanceMap {
        &self.distances[kind]
    }

    /// Hop distance between two packages under `kind`, looked up by name.
    pub fn distance(&self, kind: RelationKind, from: &str, to: &str) -> Option<u32> {
        self.distances[kind].get(self.find(from)?, self.find(to)?)
    }

    /// Groups, if a group pattern was supplied.
    pub fn groups(&self) -> Option<&Groups> {
        self.groups.as_ref()
    }

    /// Closure rounds the build needed to converge.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Resolve an optional focus package name to its node.
    pub fn resolve_focus(&self, name: Option<&str>) -> Result<Option<NodeId>, MonographError> {
        match name {
            None => Ok(None),
            Some(name) => self
                .find(name)
                .map(Some)
                .ok_or_else(|| MonographError::UnknownFocusPackage {
                    name: name.to_string(),
                }),
        }
    }
}
