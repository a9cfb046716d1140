use crate::config::AvlConfig;
use crate::types::{Link, Node};

use super::types::{Entry, Insertion};
use super::util;

/// The AVL engine.
///
/// Holds only the duplicate policy. The root belongs to the caller: every
/// mutating call consumes the current root and returns the new one, which
/// the caller stores in place of the old.
///
/// ```
/// use weight_avl::avl::{AvlTree, Insertion};
///
/// let tree = AvlTree::new();
/// let mut root = None;
/// for w in [10, 20, 30] {
///     root = Some(tree.insert::<()>(root, w, None).into_root());
/// }
/// assert_eq!(root.as_ref().map(|n| n.weight), Some(20));
///
/// match tree.insert(root, 20, None) {
///     Insertion::Rejected { root, .. } => assert_eq!(root.height, 2),
///     Insertion::Inserted(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvlTree {
    accept_duplicates: bool,
}

impl AvlTree {
    /// Engine that rejects equal weights.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(accept_duplicates: bool) -> Self {
        Self { accept_duplicates }
    }

    pub fn from_config(config: &AvlConfig) -> Self {
        Self::with_duplicates(config.accept_duplicates)
    }

    pub fn accept_duplicates(&self) -> bool {
        self.accept_duplicates
    }

    pub fn set_accept_duplicates(&mut self, accept_duplicates: bool) {
        self.accept_duplicates = accept_duplicates;
    }

    pub fn insert<P>(&self, root: Link<P>, weight: i64, payload: Option<P>) -> Insertion<P> {
        let entry = Entry {
            weight,
            id: None,
            payload,
        };
        self.insert_entry(root, entry)
    }

    pub fn insert_with_id<P>(
        &self,
        root: Link<P>,
        weight: i64,
        id: impl Into<String>,
        payload: Option<P>,
    ) -> Insertion<P> {
        let entry = Entry {
            weight,
            id: Some(id.into()),
            payload,
        };
        self.insert_entry(root, entry)
    }

    pub fn insert_entry<P>(&self, root: Link<P>, entry: Entry<P>) -> Insertion<P> {
        util::insert(root, entry, self.accept_duplicates)
    }

    pub fn delete<P>(&self, root: Link<P>, weight: i64) -> Link<P> {
        util::delete(root, weight)
    }

    /// Removes the node matching both `weight` and `id`. The id only matters
    /// when duplicates are accepted.
    pub fn delete_with_id<P>(&self, root: Link<P>, weight: i64, id: &str) -> Link<P> {
        util::delete_with_id(root, weight, id, self.accept_duplicates)
    }

    /// [`AvlTree::delete`] that also reports whether a node was removed.
    pub fn remove<P>(&self, root: Link<P>, weight: i64) -> (Link<P>, bool) {
        util::remove(root, weight)
    }

    /// [`AvlTree::delete_with_id`] that also reports how many nodes were removed.
    pub fn remove_with_id<P>(&self, root: Link<P>, weight: i64, id: &str) -> (Link<P>, usize) {
        util::remove_with_id(root, weight, id, self.accept_duplicates)
    }

    pub fn assert_valid<P>(&self, root: Option<&Node<P>>) -> Result<(), String> {
        util::assert_avl_tree(root, self.accept_duplicates)
    }
}
