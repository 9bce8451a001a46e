//! Handler for `monograph groups`.

use std::path::Path;

use miette::Result;
use monograph_core::config::GraphSettings;
use monograph_ops::ops_groups;

pub fn exec(root: &Path, settings: &GraphSettings) -> Result<()> {
    let graph = monograph_ops::load_graph(root, settings)?;

    match ops_groups::list(&graph) {
        None => println!("Grouping is disabled."),
        Some(groups) if groups.is_empty() => println!("No packages."),
        Some(groups) => print!("{}", ops_groups::format_list(&groups)),
    }
    Ok(())
}
