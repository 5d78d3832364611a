//! Disjoint Set (Union-Find) over 1-based element ids.
//!
//! # Performance
//!
//! - Parent pointers are `Cell<usize>`, so `find` performs two-pass path
//!   compression through a shared reference with no runtime borrow checking.
//! - Union-by-rank keeps trees shallow; together with compression the
//!   amortized cost per operation is nearly constant.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over ids `1..=n`.
///
/// Slot 0 is unused so element ids match the 1-based vertex numbering used
/// throughout the crate.
#[derive(Debug)]
pub struct DisjointSet {
    /// Parent pointers. `Cell` allows path compression with a shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets with ids `1..=n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..=n).map(Cell::new).collect(),
            rank: vec![0; n + 1],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Returns true if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the representative of the set containing `x`, with path
    /// compression.
    ///
    /// Logically const: the internal mutation (compression) goes through
    /// `Cell` and never changes which set any element belongs to.
    ///
    /// # Panics
    /// Panics if `x` is not in `1..=n`.
    pub fn find(&self, x: usize) -> usize {
        assert!(
            (1..=self.len()).contains(&x),
            "element {x} out of range 1..={}",
            self.len()
        );

        // 1. Find the root.
        let mut root = x;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // 2. Compress the path.
        let mut current = x;
        while current != root {
            let parent = self.parent[current].get();
            self.parent[current].set(root);
            current = parent;
        }

        root
    }

    /// Unites the sets containing `x` and `y`.
    ///
    /// Returns true if they were in different sets, false otherwise.
    ///
    /// # Panics
    /// Panics if either id is not in `1..=n`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x].set(root_y),
            std::cmp::Ordering::Greater => self.parent[root_y].set(root_x),
            std::cmp::Ordering::Equal => {
                self.parent[root_y].set(root_x);
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representatives() {
        let sets = DisjointSet::new(3);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.find(1), 1);
        assert_eq!(sets.find(2), 2);
        assert_eq!(sets.find(3), 3);
    }

    #[test]
    fn union_merges_and_reports() {
        let mut sets = DisjointSet::new(3);

        assert!(sets.union(1, 2));
        assert_eq!(sets.find(1), sets.find(2));
        assert_ne!(sets.find(1), sets.find(3));

        assert!(sets.union(2, 3));
        assert_eq!(sets.find(1), sets.find(3));

        // Already united.
        assert!(!sets.union(1, 3));
    }

    #[test]
    fn path_compression_preserves_membership() {
        let mut sets = DisjointSet::new(6);
        for x in 1..6 {
            sets.union(x, x + 1);
        }
        let root = sets.find(1);
        for x in 1..=6 {
            assert_eq!(sets.find(x), root);
        }
    }

    #[test]
    fn empty_structure() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert_eq!(sets.len(), 0);
    }
}
