#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use monograph_core::package::{Package, PackageManifest};

fn ranges(names: &[&str]) -> BTreeMap<String, String> {
    names
        .iter()
        .map(|name| (name.to_string(), "*".to_string()))
        .collect()
}

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
        version: Some("0.1.0".to_string()),
        private,
        dependencies: ranges(normal),
        dev_dependencies: ranges(dev),
        peer_dependencies: ranges(peer),
    };
    Package::new(manifest, format!("/ws/packages/{name}"), "/ws").unwrap()
}

/// Write `package.json` files under `root`, one per `(dir, json)` pair.
pub fn write_manifests(root: &Path, manifests: &[(&str, &str)]) {
    for (dir, json) in manifests {
        let dir = root.join(dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.json"), json).unwrap();
    }
}
