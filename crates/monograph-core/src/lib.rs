//! Core data types for monograph.
//!
//! This crate defines the types the graph engine consumes: `package.json`
//! manifests, the three dependency relations, workspace member discovery, and
//! the optional `monograph.toml` configuration.
//!
//! This crate is intentionally free of graph algorithms.

pub mod config;
pub mod package;
pub mod relation;
pub mod workspace;
