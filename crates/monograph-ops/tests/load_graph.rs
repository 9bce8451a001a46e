mod common;

use common::write_manifests;
use monograph_core::config::GraphSettings;
use monograph_core::relation::RelationKind;
use monograph_ops::load_graph;
use tempfile::TempDir;

#[test]
fn test_load_graph_from_workspace() {
    let tmp = TempDir::new().unwrap();
    write_manifests(
        tmp.path(),
        &[
            (".", r#"{ "name": "root", "private": true, "workspaces": ["packages/*"] }"#),
            (
                "packages/app",
                r#"{ "name": "@acme/app-web", "dependencies": { "@acme/lib-core": "^1.0.0", "left-pad": "1" } }"#,
            ),
            ("packages/lib", r#"{ "name": "@acme/lib-core", "version": "1.0.0" }"#),
            ("packages/node_modules/junk", r#"{ "name": "junk" }"#),
        ],
    );

    let graph = load_graph(tmp.path(), &GraphSettings::default()).unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(
        graph.distance(RelationKind::Normal, "@acme/app-web", "@acme/lib-core"),
        Some(1)
    );
    let groups = graph.groups().unwrap();
    assert_eq!(groups.get("@acme/app").unwrap(), ["@acme/app-web".to_string()]);
}

#[test]
fn test_load_graph_without_grouping() {
    let tmp = TempDir::new().unwrap();
    write_manifests(tmp.path(), &[("packages/a", r#"{ "name": "a" }"#)]);
    let settings = GraphSettings {
        group: String::new(),
        ..GraphSettings::default()
    };
    let graph = load_graph(tmp.path(), &settings).unwrap();
    assert!(graph.groups().is_none());
}

#[test]
fn test_load_graph_reports_cycles() {
    let tmp = TempDir::new().unwrap();
    write_manifests(
        tmp.path(),
        &[
            ("packages/x", r#"{ "name": "x", "dependencies": { "y": "*" } }"#),
            ("packages/y", r#"{ "name": "y", "dependencies": { "x": "*" } }"#),
        ],
    );
    let err = load_graph(tmp.path(), &GraphSettings::default()).unwrap_err();
    assert!(err.to_string().contains("has loops"));
}
