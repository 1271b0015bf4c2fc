// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Disjoint-set array with per-call height measurement and full path
//! compression.
//!
//! `parent[i] == -1` marks `i` as a set representative; otherwise the entry
//! points toward the representative. Union attaches the shallower tree under
//! the deeper one, with heights measured per call rather than cached
//! (height-based union, not rank-based).

/// Sentinel parent value marking a set representative.
const REPRESENTATIVE: i32 = -1;

/// Disjoint sets over node indices `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<i32>,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![REPRESENTATIVE; len],
        }
    }

    /// Resets every element back to a singleton representative.
    pub fn reset(&mut self, len: usize) {
        self.parent.clear();
        self.parent.resize(len, REPRESENTATIVE);
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// `true` when the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `index`.
    pub fn find(&mut self, index: u32) -> u32 {
        let mut height = 0;
        self.find_with_height(index, &mut height)
    }

    /// Representative of `index`'s set; `height` accumulates the number of
    /// parent links walked.
    ///
    /// When the walked chain is longer than one link, every visited element
    /// is re-pointed directly at the representative (full path compression,
    /// not halving).
    fn find_with_height(&mut self, index: u32, height: &mut u32) -> u32 {
        let mut visited = Vec::new();
        let mut current = index as usize;
        while self.parent[current] != REPRESENTATIVE {
            visited.push(current);
            current = self.parent[current] as usize;
            *height += 1;
        }
        if *height > 1 {
            for element in visited {
                self.parent[element] = current as i32;
            }
        }
        current as u32
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// The shallower tree is attached under the deeper one's representative;
    /// on equal heights the second set's representative goes under the
    /// first's.
    pub fn union(&mut self, a: u32, b: u32) {
        let (mut height_a, mut height_b) = (0, 0);
        let root_a = self.find_with_height(a, &mut height_a);
        let root_b = self.find_with_height(b, &mut height_b);
        if root_a == root_b {
            return;
        }
        if height_a < height_b {
            self.parent[root_a as usize] = root_b as i32;
        } else {
            self.parent[root_b as usize] = root_a as i32;
        }
    }

    /// `true` when `a` and `b` share a representative.
    pub fn connected(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representatives() {
        let mut dset = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(dset.find(i), i);
        }
        assert!(!dset.connected(0, 1));
    }

    #[test]
    fn union_connects_transitively() {
        let mut dset = DisjointSet::new(5);
        dset.union(0, 1);
        dset.union(1, 2);
        assert!(dset.connected(0, 2));
        assert!(!dset.connected(0, 3));
    }

    #[test]
    fn equal_height_union_keeps_first_root_on_top() {
        let mut dset = DisjointSet::new(4);
        dset.union(0, 1); // heights 0/0: root(1) goes under root(0)
        assert_eq!(dset.find(1), 0);
        dset.union(2, 3);
        assert_eq!(dset.find(3), 2);
        dset.union(0, 2); // heights 1/1: root(2) goes under root(0)
        assert_eq!(dset.find(3), 0);
    }

    #[test]
    fn find_compresses_chains_longer_than_one_link() {
        let mut dset = DisjointSet::new(4);
        // Hand-build the chain 3 -> 2 -> 1 -> 0.
        dset.parent = vec![REPRESENTATIVE, 0, 1, 2];
        assert_eq!(dset.find(3), 0);
        // Every element on the walked chain now points at the root.
        assert_eq!(dset.parent, vec![REPRESENTATIVE, 0, 0, 0]);
    }

    #[test]
    fn single_link_chains_stay_uncompressed() {
        let mut dset = DisjointSet::new(2);
        dset.parent = vec![REPRESENTATIVE, 0];
        assert_eq!(dset.find(1), 0);
        assert_eq!(dset.parent, vec![REPRESENTATIVE, 0]);
    }

    #[test]
    fn reset_restores_singletons() {
        let mut dset = DisjointSet::new(3);
        dset.union(0, 1);
        dset.reset(3);
        assert!(!dset.connected(0, 1));
        assert_eq!(dset.len(), 3);
    }
}
