//! Node definition.
//!
//! Every node owns its children through [`Link`]. There are no parent
//! pointers: the tree functions take a subtree by value and hand back the
//! (possibly different) subtree root, so ownership always flows along the
//! path from the root the caller holds.

/// Owned, possibly absent subtree.
pub type Link<P> = Option<Box<Node<P>>>;

/// A weighted entry in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<P> {
    /// Ordering key.
    pub weight: i64,
    /// Identifier used to tell duplicate weights apart on deletion.
    pub id: Option<String>,
    /// Opaque value attached at insertion time.
    pub payload: Option<P>,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub height: i32,
    pub left: Link<P>,
    pub right: Link<P>,
}

impl<P> Node<P> {
    pub fn new(weight: i64, id: Option<String>, payload: Option<P>) -> Self {
        Self {
            weight,
            id,
            payload,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn bf(&self) -> i32 {
        height(self.left.as_deref()) - height(self.right.as_deref())
    }

    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }
}

/// Cached height of `node`, 0 when absent.
#[inline]
pub fn height<P>(node: Option<&Node<P>>) -> i32 {
    node.map_or(0, |n| n.height)
}

/// Balance factor of `node`, 0 when absent.
#[inline]
pub fn balance_factor<P>(node: Option<&Node<P>>) -> i32 {
    node.map_or(0, Node::bf)
}
