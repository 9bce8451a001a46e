//! Symmetric hop-distance table for one relation.

use std::collections::HashMap;

use crate::node::NodeId;

/// Hop counts between pairs of nodes connected under one relation.
///
/// Every entry is stored in both directions, so `get(a, b) == get(b, a)`.
/// Recorded values only ever decrease.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap {
    entries: HashMap<(NodeId, NodeId), u32>,
}

impl DistanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded distance between `a` and `b`, if they are connected.
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.entries.get(&(a, b)).copied()
    }

    /// Overwrite the distance between `a` and `b` in both directions.
    pub(crate) fn set(&mut self, a: NodeId, b: NodeId, distance: u32) {
        self.entries.insert((a, b), distance);
        self.entries.insert((b, a), distance);
    }

    /// Record `candidate` if it beats the current distance, or if none is
    /// recorded yet. Returns whether the table changed.
    pub(crate) fn relax(&mut self, a: NodeId, b: NodeId, candidate: u32) -> bool {
        match self.get(a, b) {
            Some(current) if current <= candidate => false,
            _ => {
                self.set(a, b, candidate);
                true
            }
        }
    }

    /// Number of ordered pairs recorded, self-pairs included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(from, to, distance)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, u32)> + '_ {
        self.entries.iter().map(|(&(a, b), &d)| (a, b, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn set_writes_both_directions() {
        let mut map = DistanceMap::new();
        map.set(id(0), id(1), 4);
        assert_eq!(map.get(id(0), id(1)), Some(4));
        assert_eq!(map.get(id(1), id(0)), Some(4));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn relax_only_lowers() {
        let mut map = DistanceMap::new();
        assert!(map.relax(id(0), id(2), 3));
        assert!(!map.relax(id(0), id(2), 3));
        assert!(!map.relax(id(2), id(0), 5));
        assert!(map.relax(id(2), id(0), 2));
        assert_eq!(map.get(id(0), id(2)), Some(2));
    }

    #[test]
    fn self_pair_is_a_single_entry() {
        let mut map = DistanceMap::new();
        map.set(id(3), id(3), 0);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(id(3), id(3)), Some(0));
    }
}
