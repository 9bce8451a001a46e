//! Edge builder: direct parent links and their child back-links.

use monograph_core::relation::RelationKind;

use crate::node::NodeId;
use crate::registry::Registry;

/// Link every node to the workspace packages it declares under each relation.
///
/// A direct dependency seeds the ancestor set and a distance of 1 in both
/// directions. Declared names outside the registry are not graph members
/// and are skipped.
pub fn link_parents(registry: &mut Registry) {
    for id in registry.node_ids() {
        for kind in RelationKind::ALL {
            let node = &registry.graph[id];
            let mut parents: Vec<NodeId> = Vec::new();
            for name in node.package().dependency_names(kind) {
                match registry.index.get(name) {
                    Some(&parent) => parents.push(parent),
                    None => tracing::trace!(
                        "{}: {kind} dependency {name} is outside the workspace",
                        node.name()
                    ),
                }
            }

            for parent in parents {
                registry.graph.add_edge(id, parent, kind);
                let sets = &mut registry.graph[id].relations[kind];
                sets.parents.insert(parent);
                sets.ancestors.insert(parent);
                registry.distances[kind].set(id, parent, 1);
            }
        }
    }
}

/// Derive child back-links by inverting the parent sets.
pub fn link_children(registry: &mut Registry) {
    for id in registry.node_ids() {
        for kind in RelationKind::ALL {
            let parents: Vec<NodeId> = registry.graph[id].parents(kind).iter().copied().collect();
            for parent in parents {
                registry.graph[parent].relations[kind].children.insert(id);
            }
        }
    }
}
