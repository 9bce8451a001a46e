use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all monograph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MonographError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed package manifest (e.g. package.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the package.json files of your workspace"))]
    Manifest { message: String },

    /// A dependency relation loops back onto one of its own packages.
    #[error("The {relation} dependency graph has loops: {package} depends on itself")]
    #[diagnostic(help("Dependency declarations must form a directed acyclic graph"))]
    CycleDetected { relation: String, package: String },

    /// The transitive closure did not converge within the round cap.
    #[error("The dependency graph is too big: no convergence after {rounds} rounds")]
    GraphTooLarge { rounds: usize },

    /// The requested focus package is not part of the workspace.
    #[error("The package {name} does not exist")]
    #[diagnostic(help("Run `monograph groups` to list the packages of the workspace"))]
    UnknownFocusPackage { name: String },

    /// The requested group label is not produced by the group pattern.
    #[error("The group {label} does not exist")]
    #[diagnostic(help("Run `monograph groups` to list the groups of the workspace"))]
    UnknownGroup { label: String },

    /// A package name pattern could not be compiled or has the wrong shape.
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid or unreadable monograph.toml.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check monograph.toml at the workspace root"))]
    Config { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type MonographResult<T> = miette::Result<T>;
