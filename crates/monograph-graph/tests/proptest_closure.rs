mod common;

use common::{assert_graph_invariants, package_with};
use monograph_core::package::Package;
use monograph_core::relation::{RelationKind, Relations};
use monograph_graph::{build_graph, FocusConfig, FocusPolicy};
use proptest::prelude::*;

/// A random DAG: node `i` may only depend on nodes with a smaller index.
fn arb_dag() -> impl Strategy<Value = (usize, Vec<(usize, usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 0usize..3), 0..n * 3);
        (Just(n), edges)
    })
}

fn packages(n: usize, edges: &[(usize, usize, usize)]) -> Vec<Package> {
    (0..n)
        .map(|i| {
            let mut by_kind: [Vec<String>; 3] = Default::default();
            for &(a, b, k) in edges {
                let (from, to) = (a.max(b), a.min(b));
                if from == i && from != to {
                    by_kind[k].push(format!("p{to}"));
                }
            }
            let [normal, dev, peer] = by_kind.each_ref().map(|names| as_refs(names));
            package_with(&format!("p{i}"), &normal, &dev, &peer, i % 3 == 0)
        })
        .collect()
}

fn as_refs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn closure_invariants_hold((n, edges) in arb_dag()) {
        let graph = build_graph(packages(n, &edges), None).unwrap();
        assert_graph_invariants(&graph);
    }

    #[test]
    fn focus_window_only_grows_with_depth((n, edges) in arb_dag(), focus in 0usize..12) {
        let graph = build_graph(packages(n, &edges), None).unwrap();
        let focus = graph.find(&format!("p{}", focus % n));
        let config = FocusConfig {
            relations: Relations::new(true, true, true),
            ..FocusConfig::default()
        };
        let mut previous = 0;
        for depth in 0..4 {
            let policy = FocusPolicy::new(&FocusConfig { max_depth: depth, ..config.clone() }).unwrap();
            let count = graph.node_ids().filter(|&id| policy.is_in_focus(&graph, focus, id)).count();
            prop_assert!(count >= previous);
            prop_assert!(count >= 1);
            previous = count;
        }
    }

    #[test]
    fn focus_window_is_symmetric_in_distance((n, edges) in arb_dag()) {
        let graph = build_graph(packages(n, &edges), None).unwrap();
        let policy = FocusPolicy::new(&FocusConfig {
            max_depth: 2,
            ..FocusConfig::default()
        })
        .unwrap();
        for a in graph.node_ids() {
            for b in graph.node_ids() {
                let ab = policy.within_depth(&graph, a, b, RelationKind::Normal);
                let ba = policy.within_depth(&graph, b, a, RelationKind::Normal);
                prop_assert_eq!(ab, ba);
            }
        }
    }
}
