//! Node registry: one node per accepted package.

use std::collections::HashMap;

use monograph_core::package::Package;
use monograph_core::relation::{RelationKind, Relations};
use monograph_util::errors::MonographError;
use petgraph::graph::DiGraph;

use crate::distance::DistanceMap;
use crate::group::{GroupAssigner, Groups};
use crate::node::{Node, NodeId};

/// Working state shared by the construction phases.
///
/// Direct dependency edges are stored in `graph`, pointing from the
/// dependent to the dependency and weighted by their relation.
pub struct Registry {
    pub graph: DiGraph<Node, RelationKind>,
    pub index: HashMap<String, NodeId>,
    pub distances: Relations<DistanceMap>,
    pub groups: Option<Groups>,
}

impl Registry {
    /// Create one node per package with empty relation sets and a zero
    /// self-distance in every relation.
    ///
    /// Packages are not filtered here; duplicate names are rejected.
    pub fn new(
        packages: Vec<Package>,
        grouper: Option<&GroupAssigner>,
    ) -> Result<Self, MonographError> {
        let mut graph = DiGraph::with_capacity(packages.len(), 0);
        let mut index = HashMap::with_capacity(packages.len());
        let mut distances: Relations<DistanceMap> = Relations::default();
        let mut groups = grouper.map(|_| Groups::new());

        for package in packages {
            if index.contains_key(package.name()) {
                return Err(MonographError::Manifest {
                    message: format!("Package {} is declared more than once", package.name()),
                });
            }

            let group = grouper.map(|g| g.assign(package.name()));
            if let (Some(groups), Some(label)) = (groups.as_mut(), group.as_deref()) {
                groups.add(label, package.name());
            }

            let name = package.name().to_string();
            let id = graph.add_node(Node::new(package, group));
            for kind in RelationKind::ALL {
                distances[kind].set(id, id, 0);
            }
            index.insert(name, id);
        }

        Ok(Self {
            graph,
            index,
            distances,
            groups,
        })
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.graph.node_indices().collect()
    }
}
