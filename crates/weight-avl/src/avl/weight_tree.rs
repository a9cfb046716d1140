use crate::error::AvlError;
use crate::types::{height, Link, Node};
use crate::util::{iter, weights, Iter};

use super::tree::AvlTree;
use super::types::{Entry, Insertion};
use super::util::{try_maximum, try_minimum};

/// Owns a root and threads it through an [`AvlTree`] engine.
///
/// Rust divergence: the engine itself never stores a root. This type is the
/// "caller" half of that contract for code that just wants a collection.
#[derive(Clone, Debug)]
pub struct WeightTree<P> {
    engine: AvlTree,
    root: Link<P>,
    len: usize,
}

impl<P> WeightTree<P> {
    pub fn new(engine: AvlTree) -> Self {
        Self {
            engine,
            root: None,
            len: 0,
        }
    }

    pub fn engine(&self) -> AvlTree {
        self.engine
    }

    /// Returns `false` when the weight was rejected as a duplicate.
    pub fn insert(&mut self, weight: i64, payload: Option<P>) -> bool {
        self.insert_entry(Entry {
            weight,
            id: None,
            payload,
        })
    }

    pub fn insert_with_id(&mut self, weight: i64, id: impl Into<String>, payload: Option<P>) -> bool {
        self.insert_entry(Entry {
            weight,
            id: Some(id.into()),
            payload,
        })
    }

    fn insert_entry(&mut self, entry: Entry<P>) -> bool {
        match self.engine.insert_entry(self.root.take(), entry) {
            Insertion::Inserted(root) => {
                self.root = Some(root);
                self.len += 1;
                true
            }
            Insertion::Rejected { root, .. } => {
                self.root = Some(root);
                false
            }
        }
    }

    /// Returns `true` when a node was removed.
    pub fn delete(&mut self, weight: i64) -> bool {
        let (root, removed) = self.engine.remove(self.root.take(), weight);
        self.root = root;
        self.settle(usize::from(removed))
    }

    /// Returns `true` when at least one node was removed.
    pub fn delete_with_id(&mut self, weight: i64, id: &str) -> bool {
        let (root, removed) = self.engine.remove_with_id(self.root.take(), weight, id);
        self.root = root;
        self.settle(removed)
    }

    fn settle(&mut self, removed: usize) -> bool {
        self.len -= removed;
        removed > 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&Node<P>> {
        self.root.as_deref()
    }

    pub fn into_root(self) -> Link<P> {
        self.root
    }

    pub fn height(&self) -> i32 {
        height(self.root())
    }

    pub fn min(&self) -> Result<&Node<P>, AvlError> {
        try_minimum(self.root())
    }

    pub fn max(&self) -> Result<&Node<P>, AvlError> {
        try_maximum(self.root())
    }

    pub fn iter(&self) -> Iter<'_, P> {
        iter(self.root())
    }

    pub fn weights(&self) -> Vec<i64> {
        weights(self.root())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.engine.assert_valid(self.root())?;
        let n = count(self.root());
        if n != self.len {
            return Err(format!("Size mismatch: counted {n}, tracked {}", self.len));
        }
        Ok(())
    }
}

impl<P> Default for WeightTree<P> {
    fn default() -> Self {
        Self::new(AvlTree::default())
    }
}

fn count<P>(root: Option<&Node<P>>) -> usize {
    iter(root).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_len_through_inserts_and_deletes() {
        let mut tree = WeightTree::<&str>::default();
        assert!(tree.is_empty());
        assert!(tree.insert(2, Some("two")));
        assert!(tree.insert(1, None));
        assert!(!tree.insert(2, None));
        assert_eq!(tree.len(), 2);

        assert!(!tree.delete(9));
        assert!(tree.delete(2));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.weights(), vec![1]);
        tree.assert_valid().unwrap();

        tree.clear();
        assert!(tree.is_empty());
        assert!(matches!(tree.min(), Err(AvlError::EmptyTree)));
    }

    #[test]
    fn len_follows_removals_without_recount() {
        let mut tree = WeightTree::<()>::new(AvlTree::with_duplicates(true));
        for w in [5, 3, 8, 3, 5, 5, 1] {
            assert!(tree.insert(w, None));
        }
        for (w, expect) in [(5, true), (5, true), (7, false), (3, true), (5, true), (5, false)] {
            assert_eq!(tree.delete(w), expect, "delete {w}");
            tree.assert_valid().unwrap();
        }
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.weights(), vec![1, 3, 8]);
    }

    #[test]
    fn delete_with_id_reports_removal() {
        let mut tree = WeightTree::<()>::new(AvlTree::with_duplicates(true));
        tree.insert_with_id(8, "a", None);
        tree.insert_with_id(8, "b", None);
        assert!(!tree.delete_with_id(8, "c"));
        assert_eq!(tree.len(), 2);
        assert!(tree.delete_with_id(8, "b"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().unwrap().id.as_deref(), Some("a"));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn len_drops_by_every_node_a_repeated_id_removes() {
        let mut tree = WeightTree::<()>::new(AvlTree::with_duplicates(true));
        for id in ["a", "b", "a"] {
            assert!(tree.insert_with_id(7, id, None));
        }
        assert!(tree.delete_with_id(7, "a"));
        assert_eq!(tree.len(), 1);
        tree.assert_valid().unwrap();
    }
}
