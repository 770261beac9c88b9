//! Priority frontier and parent-linked node arena shared by the best-first
//! searches.
//!
//! Entries are never updated in place. A state whose cost improves is pushed
//! again and the stale copy is skipped when popped, so callers keep a
//! best-cost table next to the frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use forage_core::{Action, Path};

struct Entry<T> {
    key: i64,
    /// Insertion counter; equal keys pop in FIFO order.
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other.key.cmp(&self.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with deterministic tie-breaking.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T, key: i64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { key, seq, item });
    }

    /// Pop the entry with the smallest key, returning `(item, key)`.
    pub(crate) fn pop(&mut self) -> Option<(T, i64)> {
        self.heap.pop().map(|e| (e.item, e.key))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// One expanded or generated state and how it was reached.
pub(crate) struct TreeNode<S> {
    pub(crate) state: S,
    pub(crate) g: i32,
    pub(crate) depth: usize,
    parent: Option<(usize, Action)>,
}

/// Index of the root node in every [`SearchTree`].
pub(crate) const ROOT: usize = 0;

/// Arena of search nodes linked to their parents. Paths are rebuilt on
/// demand instead of being copied into every node.
pub(crate) struct SearchTree<S> {
    nodes: Vec<TreeNode<S>>,
}

impl<S> SearchTree<S> {
    pub(crate) fn with_root(state: S) -> Self {
        Self {
            nodes: vec![TreeNode {
                state,
                g: 0,
                depth: 0,
                parent: None,
            }],
        }
    }

    /// Add a child of `parent` reached by `action`; returns its index.
    pub(crate) fn push(&mut self, parent: usize, action: Action, state: S, step_cost: i32) -> usize {
        let (g, depth) = {
            let p = &self.nodes[parent];
            (p.g + step_cost, p.depth + 1)
        };
        self.nodes.push(TreeNode {
            state,
            g,
            depth,
            parent: Some((parent, action)),
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &TreeNode<S> {
        &self.nodes[idx]
    }

    /// Actions from the root to `idx`.
    pub(crate) fn path(&self, idx: usize) -> Path {
        let mut path = Vec::with_capacity(self.nodes[idx].depth);
        let mut ci = idx;
        while let Some((parent, action)) = self.nodes[ci].parent {
            path.push(action);
            ci = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut f = Frontier::new();
        f.push("c", 3);
        f.push("a", -1);
        f.push("b", 2);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(("a", -1)));
        assert_eq!(f.pop(), Some(("b", 2)));
        assert_eq!(f.pop(), Some(("c", 3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_keys_pop_fifo() {
        let mut f = Frontier::new();
        for i in 0..10 {
            f.push(i, 5);
        }
        let order: Vec<i32> = std::iter::from_fn(|| f.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn tree_rebuilds_paths() {
        let mut t = SearchTree::with_root('r');
        let a = t.push(ROOT, Action::East, 'a', 1);
        let b = t.push(a, Action::South, 'b', 1);
        let c = t.push(ROOT, Action::West, 'c', 1);
        assert_eq!(t.path(b), vec![Action::East, Action::South]);
        assert_eq!(t.path(c), vec![Action::West]);
        assert!(t.path(ROOT).is_empty());
        assert_eq!(t.get(b).g, 2);
        assert_eq!(t.get(b).depth, 2);
        assert_eq!(t.get(b).state, 'b');
    }
}
