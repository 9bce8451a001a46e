//! Handler for `monograph focus`.

use std::path::Path;

use miette::Result;
use monograph_core::config::GraphSettings;
use monograph_graph::{FocusConfig, FocusPolicy};
use monograph_ops::ops_focus;

pub fn exec(root: &Path, settings: &GraphSettings, focus: Option<&str>) -> Result<()> {
    let graph = monograph_ops::load_graph(root, settings)?;
    let policy = FocusPolicy::new(&FocusConfig::from(settings))?;

    let entries = ops_focus::window(&graph, &policy, focus)?;
    if entries.is_empty() {
        println!("No packages in focus.");
    } else {
        print!("{}", ops_focus::format_window(&entries));
    }
    Ok(())
}
