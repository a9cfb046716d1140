//! In-order traversal.

use crate::types::Node;

/// Leftmost node.
pub fn first<P>(root: Option<&Node<P>>) -> Option<&Node<P>> {
    let mut curr = root?;
    while let Some(l) = curr.left.as_deref() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<P>(root: Option<&Node<P>>) -> Option<&Node<P>> {
    let mut curr = root?;
    while let Some(r) = curr.right.as_deref() {
        curr = r;
    }
    Some(curr)
}

/// Ascending in-order iterator over borrowed nodes.
///
/// Keeps the unvisited left spine on a stack, so memory is bounded by the
/// tree height.
pub struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> Iter<'a, P> {
    fn push_left(&mut self, mut node: Option<&'a Node<P>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Node<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node)
    }
}

pub fn iter<P>(root: Option<&Node<P>>) -> Iter<'_, P> {
    let mut it = Iter {
        stack: Vec::with_capacity(root.map_or(0, |n| n.height as usize)),
    };
    it.push_left(root);
    it
}

/// Calls `f` for every node in ascending weight order.
pub fn for_each<P, F: FnMut(&Node<P>)>(root: Option<&Node<P>>, mut f: F) {
    for n in iter(root) {
        f(n);
    }
}

pub fn weights<P>(root: Option<&Node<P>>) -> Vec<i64> {
    iter(root).map(|n| n.weight).collect()
}
