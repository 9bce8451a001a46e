//! Package graph engine.
//!
//! Builds one node per workspace package, links the three dependency
//! relations (normal, dev, peer), saturates every node's ancestor sets to
//! their transitive closure while tracking hop distances, and answers focus
//! window queries on the converged graph.
//!
//! ```text
//! packages ─▶ registry ─▶ edges ─▶ closure ─▶ PackageGraph ─▶ FocusPolicy
//!                │
//!                └─▶ groups
//! ```

pub mod closure;
pub mod distance;
pub mod edges;
pub mod focus;
pub mod graph;
pub mod group;
pub mod node;
pub mod registry;

use monograph_core::package::Package;
use monograph_util::errors::MonographError;

pub use distance::DistanceMap;
pub use focus::{FocusConfig, FocusPolicy};
pub use graph::{GraphBuilder, PackageGraph};
pub use group::{GroupAssigner, Groups, FALLBACK_GROUP};
pub use node::{Node, NodeId, RelationSets};

/// Closure rounds allowed before the build gives up with
/// [`MonographError::GraphTooLarge`].
pub const MAX_CLOSURE_ROUNDS: usize = 1000;

/// Build and close the dependency graph of `packages`.
///
/// When `group_pattern` is given, every package is assigned the text its
/// first capture group matches, or [`FALLBACK_GROUP`].
pub fn build_graph(
    packages: Vec<Package>,
    group_pattern: Option<&str>,
) -> Result<PackageGraph, MonographError> {
    GraphBuilder::new(packages).group_pattern(group_pattern).build()
}
