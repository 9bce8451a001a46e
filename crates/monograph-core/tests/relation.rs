use monograph_core::relation::{RelationKind, Relations};

#[test]
fn test_relation_display() {
    assert_eq!(RelationKind::Normal.to_string(), "normal");
    assert_eq!(RelationKind::Dev.to_string(), "dev");
    assert_eq!(RelationKind::Peer.to_string(), "peer");
}

#[test]
fn test_relation_manifest_fields() {
    assert_eq!(RelationKind::Normal.manifest_field(), "dependencies");
    assert_eq!(RelationKind::Dev.manifest_field(), "devDependencies");
    assert_eq!(RelationKind::Peer.manifest_field(), "peerDependencies");
}

#[test]
fn test_relations_index_by_kind() {
    let mut table = Relations::new(1, 2, 3);
    assert_eq!(table[RelationKind::Normal], 1);
    assert_eq!(table[RelationKind::Dev], 2);
    table[RelationKind::Peer] += 10;
    assert_eq!(table[RelationKind::Peer], 13);
}

#[test]
fn test_relations_from_fn_and_iter_order() {
    let table = Relations::from_fn(|kind| kind.as_str().len());
    let pairs: Vec<_> = table.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(
        pairs,
        vec![
            (RelationKind::Normal, 6),
            (RelationKind::Dev, 3),
            (RelationKind::Peer, 4)
        ]
    );
}

#[test]
fn test_relations_default() {
    let table: Relations<Vec<u8>> = Relations::default();
    assert!(table.iter().all(|(_, v)| v.is_empty()));
}
