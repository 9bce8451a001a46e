mod common;

use common::{package, package_with};
use monograph_core::relation::{RelationKind, Relations};
use monograph_graph::{build_graph, FocusConfig, FocusPolicy, PackageGraph};
use monograph_ops::ops_focus::{format_window, window, Direction, Reach};

fn graph() -> PackageGraph {
    build_graph(
        vec![
            package_with("app", &["lib"], &["tester"], &[], false),
            package("lib", &["core"]),
            package("core", &[]),
            package("tester", &["core"]),
            package("utils", &[]),
        ],
        None,
    )
    .unwrap()
}

fn names(entries: &[monograph_ops::ops_focus::FocusEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_window_puts_focus_first() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig::default()).unwrap();
    let entries = window(&graph, &policy, Some("lib")).unwrap();
    assert_eq!(names(&entries), vec!["lib", "app", "core"]);
    assert!(entries[0].is_focus);
    assert!(entries[0].reaches.is_empty());
}

#[test]
fn test_window_reports_direction_and_distance() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig::default()).unwrap();
    let entries = window(&graph, &policy, Some("lib")).unwrap();

    let app = entries.iter().find(|e| e.name == "app").unwrap();
    assert_eq!(
        app.reaches,
        vec![Reach {
            relation: RelationKind::Normal,
            direction: Direction::Dependent,
            distance: 1,
        }]
    );
    let core = entries.iter().find(|e| e.name == "core").unwrap();
    assert_eq!(core.reaches[0].direction, Direction::Dependency);
}

#[test]
fn test_window_lists_every_justifying_relation() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig {
        relations: Relations::new(true, true, false),
        max_depth: 2,
        ..FocusConfig::default()
    })
    .unwrap();
    let entries = window(&graph, &policy, Some("app")).unwrap();
    assert_eq!(names(&entries), vec!["app", "core", "lib", "tester"]);

    let tester = entries.iter().find(|e| e.name == "tester").unwrap();
    assert_eq!(tester.reaches.len(), 1);
    assert_eq!(tester.reaches[0].relation, RelationKind::Dev);

    let core = entries.iter().find(|e| e.name == "core").unwrap();
    assert_eq!(core.reaches.len(), 1);
    assert_eq!(core.reaches[0].distance, 2);
}

#[test]
fn test_window_without_focus_lists_everything() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig::default()).unwrap();
    let entries = window(&graph, &policy, None).unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| !e.is_focus && e.reaches.is_empty()));
}

#[test]
fn test_window_unknown_focus() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig::default()).unwrap();
    assert!(window(&graph, &policy, Some("nope")).is_err());
}

#[test]
fn test_format_window() {
    let graph = graph();
    let policy = FocusPolicy::new(&FocusConfig::default()).unwrap();
    let entries = window(&graph, &policy, Some("lib")).unwrap();
    assert_eq!(
        format_window(&entries),
        "lib (focus)\napp: normal dependent at 1\ncore: normal dependency at 1\n"
    );
}
