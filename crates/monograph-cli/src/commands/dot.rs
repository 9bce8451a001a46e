//! Handler for `monograph dot`.

use std::path::Path;

use miette::Result;
use monograph_core::config::GraphSettings;
use monograph_graph::{FocusConfig, FocusPolicy};
use monograph_ops::ops_dot::{self, DotOptions};

pub fn exec(
    root: &Path,
    settings: &GraphSettings,
    focus: Option<&str>,
    group_view: Option<&str>,
) -> Result<()> {
    let graph = monograph_ops::load_graph(root, settings)?;
    let config = FocusConfig::from(settings);

    let document = match group_view {
        Some(group) => ops_dot::render_group(&graph, &config, group, &settings.format)?,
        None => {
            let policy = FocusPolicy::new(&config)?;
            let opts = DotOptions {
                focus: focus.map(str::to_string),
                format: settings.format.clone(),
            };
            ops_dot::render(&graph, &policy, &opts)?
        }
    };

    print!("{document}");
    Ok(())
}
