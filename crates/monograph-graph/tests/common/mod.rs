#![allow(dead_code)]

use std::collections::BTreeMap;

use monograph_core::package::{Package, PackageManifest};
use monograph_core::relation::RelationKind;
use monograph_graph::PackageGraph;

fn ranges(names: &[&str]) -> BTreeMap<String, String> {
    names
        .iter()
        .map(|name| (name.to_string(), "^1.0.0".to_string()))
        .collect()
}

/// A public package with normal dependencies only.
pub fn package(name: &str, deps: &[&str]) -> Package {
    package_with(name, deps, &[], &[], false)
}

pub fn package_with(
    name: &str,
    normal: &[&str],
    dev: &[&str],
    peer: &[&str],
    private: bool,
) -> Package {
    let manifest = PackageManifest {
        name: Some(name.to_string()),
        version: Some("1.0.0".to_string()),
        private,
        dependencies: ranges(normal),
        dev_dependencies: ranges(dev),
        peer_dependencies: ranges(peer),
    };
    Package::new(manifest, format!("/ws/packages/{name}"), "/ws").unwrap()
}

/// Names of `name`'s ancestors under `kind`.
pub fn ancestor_names(graph: &PackageGraph, name: &str, kind: RelationKind) -> Vec<String> {
    let node = graph.get(name).unwrap();
    node.ancestors(kind)
        .iter()
        .map(|&id| graph.node(id).name().to_string())
        .collect()
}

/// Names of `name`'s descendants under `kind`.
pub fn descendant_names(graph: &PackageGraph, name: &str, kind: RelationKind) -> Vec<String> {
    let node = graph.get(name).unwrap();
    node.descendants(kind)
        .iter()
        .map(|&id| graph.node(id).name().to_string())
        .collect()
}

/// Check every structural invariant of a converged graph.
pub fn assert_graph_invariants(graph: &PackageGraph) {
    for kind in RelationKind::ALL {
        let distances = graph.distances(kind);

        for (a, b, d) in distances.iter() {
            assert_eq!(distances.get(b, a), Some(d), "{kind}: asymmetric distance");
        }

        let mut related_pairs = 0;
        for (id, node) in graph.nodes() {
            assert_eq!(distances.get(id, id), Some(0), "{kind}: self distance");
            assert!(!node.ancestors(kind).contains(&id), "{kind}: self ancestor");
            assert!(!node.descendants(kind).contains(&id), "{kind}: self descendant");
            assert!(node.parents(kind).is_subset(node.ancestors(kind)));
            assert!(node.children(kind).is_subset(node.descendants(kind)));

            for &parent in node.parents(kind) {
                assert_eq!(distances.get(id, parent), Some(1), "{kind}: direct edge");
                assert!(graph.node(parent).children(kind).contains(&id));
            }

            for &ancestor in node.ancestors(kind) {
                related_pairs += 1;
                assert!(
                    graph.node(ancestor).descendants(kind).contains(&id),
                    "{kind}: transpose"
                );
                assert!(distances.get(id, ancestor).is_some_and(|d| d >= 1));
                for next in graph.node(ancestor).ancestors(kind) {
                    assert!(node.ancestors(kind).contains(next), "{kind}: saturation");
                }
            }
            for &descendant in node.descendants(kind) {
                assert!(graph.node(descendant).ancestors(kind).contains(&id));
            }
        }

        // Only self pairs and ancestor pairs (both directions) carry a distance.
        assert_eq!(distances.len(), graph.len() + 2 * related_pairs, "{kind}");
    }
}
