//! The three dependency relations tracked for every package.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Kind of declared dependency between two workspace packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// `dependencies`
    Normal,
    /// `devDependencies`
    Dev,
    /// `peerDependencies`
    Peer,
}

impl RelationKind {
    /// Every relation kind, in the order the closure engine processes them.
    pub const ALL: [RelationKind; 3] = [Self::Normal, Self::Dev, Self::Peer];

    fn slot(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Dev => 1,
            Self::Peer => 2,
        }
    }

    /// Short lowercase name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dev => "dev",
            Self::Peer => "peer",
        }
    }

    /// The `package.json` field declaring this relation.
    pub fn manifest_field(self) -> &'static str {
        match self {
            Self::Normal => "dependencies",
            Self::Dev => "devDependencies",
            Self::Peer => "peerDependencies",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed table holding one `T` per relation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relations<T>([T; 3]);

impl<T> Relations<T> {
    pub fn new(normal: T, dev: T, peer: T) -> Self {
        Self([normal, dev, peer])
    }

    /// Build each entry from its relation kind.
    pub fn from_fn(mut f: impl FnMut(RelationKind) -> T) -> Self {
        Self(RelationKind::ALL.map(&mut f))
    }

    /// Iterate over `(kind, value)` pairs in [`RelationKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RelationKind, &T)> {
        RelationKind::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Default> Default for Relations<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<RelationKind> for Relations<T> {
    type Output = T;

    fn index(&self, kind: RelationKind) -> &T {
        &self.0[kind.slot()]
    }
}

impl<T> IndexMut<RelationKind> for Relations<T> {
    fn index_mut(&mut self, kind: RelationKind) -> &mut T {
        &mut self.0[kind.slot()]
    }
}
