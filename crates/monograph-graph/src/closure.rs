//! Transitive closure engine.
//!
//! Each round visits every node and every relation. For a node `N`, each
//! known ancestor `A` and each ancestor `A'` of `A`, `A'` joins the ancestors
//! of `N` and the distance `N <-> A'` is relaxed to `d(N, A) + d(A, A')`.
//! Rounds repeat until one makes no change. At that fixed point every recorded
//! distance is the length of the shortest dependency path between the pair.

use std::collections::BTreeSet;

use monograph_core::relation::{RelationKind, Relations};
use monograph_util::errors::MonographError;

use crate::distance::DistanceMap;
use crate::node::NodeId;
use crate::registry::Registry;

/// Saturate every ancestor set and distance table, then fill in descendants.
///
/// Returns the number of rounds it took to converge. Fails with
/// [`MonographError::CycleDetected`] when a node reaches itself and with
/// [`MonographError::GraphTooLarge`] after `max_rounds` rounds without
/// convergence. The working sets are taken out of the registry up front, so
/// on failure the registry is left without ancestors or distances and must be
/// discarded.
pub fn close(registry: &mut Registry, max_rounds: usize) -> Result<usize, MonographError> {
    let ids = registry.node_ids();

    let mut ancestors: Relations<Vec<BTreeSet<NodeId>>> = Relations::from_fn(|kind| {
        ids.iter()
            .map(|&id| std::mem::take(&mut registry.graph[id].relations[kind].ancestors))
            .collect()
    });
    let mut distances = std::mem::take(&mut registry.distances);

    let mut rounds = 0;
    loop {
        if rounds >= max_rounds {
            return Err(MonographError::GraphTooLarge { rounds });
        }
        let mut changed = false;
        for &id in &ids {
            for kind in RelationKind::ALL {
                match saturate(id, &mut ancestors[kind], &mut distances[kind]) {
                    Ok(progress) => changed |= progress,
                    Err(looping) => {
                        return Err(MonographError::CycleDetected {
                            relation: kind.to_string(),
                            package: registry.graph[looping].name().to_string(),
                        })
                    }
                }
            }
        }
        rounds += 1;
        if !changed {
            break;
        }
    }
    tracing::debug!("Transitive closure converged after {rounds} rounds");

    for kind in RelationKind::ALL {
        let sets = std::mem::take(&mut ancestors[kind]);
        for (&id, set) in ids.iter().zip(sets) {
            registry.graph[id].relations[kind].ancestors = set;
        }
        tracing::trace!(
            "{kind} relation: {} ordered pairs at known distance",
            distances[kind].len()
        );
    }
    registry.distances = distances;

    link_descendants(registry, &ids);
    Ok(rounds)
}

/// One relaxation pass for `node` under a single relation.
///
/// Returns whether anything changed, or the node itself when it turns out to
/// be its own ancestor.
fn saturate(
    node: NodeId,
    ancestors: &mut [BTreeSet<NodeId>],
    distances: &mut DistanceMap,
) -> Result<bool, NodeId> {
    let mut changed = false;
    let known: Vec<NodeId> = ancestors[node.index()].iter().copied().collect();
    for ancestor in known {
        if ancestor == node {
            return Err(node);
        }
        let Some(to_ancestor) = distances.get(node, ancestor) else {
            continue;
        };
        let beyond: Vec<(NodeId, u32)> = ancestors[ancestor.index()]
            .iter()
            .filter_map(|&next| distances.get(ancestor, next).map(|d| (next, d)))
            .collect();
        for (next, hops) in beyond {
            if next == node {
                return Err(node);
            }
            if ancestors[node.index()].insert(next) {
                changed = true;
            }
            if distances.relax(node, next, to_ancestor + hops) {
                changed = true;
            }
        }
    }
    Ok(changed)
}

/// Descendants are the transpose of the converged ancestor sets.
fn link_descendants(registry: &mut Registry, ids: &[NodeId]) {
    for &id in ids {
        for kind in RelationKind::ALL {
            let ancestors: Vec<NodeId> =
                registry.graph[id].ancestors(kind).iter().copied().collect();
            for ancestor in ancestors {
                registry.graph[ancestor].relations[kind]
                    .descendants
                    .insert(id);
            }
        }
    }
}
