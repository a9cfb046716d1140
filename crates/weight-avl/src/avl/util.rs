use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::AvlError;
use crate::types::{height, Link, Node};
use crate::util::iter;

use super::types::{Entry, Insertion};

/// `y.left` becomes the subtree root, `y` its right child.
pub(crate) fn rotate_right<P>(mut y: Box<Node<P>>) -> Box<Node<P>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    trace!(pivot = y.weight, new_root = x.weight, "rotate right");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// `x.right` becomes the subtree root, `x` its left child.
pub(crate) fn rotate_left<P>(mut x: Box<Node<P>>) -> Box<Node<P>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    trace!(pivot = x.weight, new_root = y.weight, "rotate left");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Insert four-case rule. The rotation kind is picked by comparing the
/// inserted weight to the heavy child's weight, using the same routing as
/// the descent: equal weights went right.
fn rebalance_after_insert<P>(mut node: Box<Node<P>>, weight: i64) -> Box<Node<P>> {
    node.update_height();
    let bf = node.bf();
    if bf > 1 {
        if let Some(left) = node.left.take() {
            let left = if weight < left.weight {
                left
            } else {
                rotate_left(left)
            };
            node.left = Some(left);
            return rotate_right(node);
        }
    } else if bf < -1 {
        if let Some(right) = node.right.take() {
            let right = if weight < right.weight {
                rotate_right(right)
            } else {
                right
            };
            node.right = Some(right);
            return rotate_left(node);
        }
    }
    node
}

/// Delete four-case rule. Ties are broken by the heavy child's own balance
/// factor rather than by key comparison.
fn rebalance_after_delete<P>(mut node: Box<Node<P>>) -> Box<Node<P>> {
    node.update_height();
    let bf = node.bf();
    if bf > 1 {
        if let Some(left) = node.left.take() {
            let left = if left.bf() >= 0 { left } else { rotate_left(left) };
            node.left = Some(left);
            return rotate_right(node);
        }
    } else if bf < -1 {
        if let Some(right) = node.right.take() {
            let right = if right.bf() <= 0 {
                right
            } else {
                rotate_right(right)
            };
            node.right = Some(right);
            return rotate_left(node);
        }
    }
    node
}

/// Inserts `entry` into the subtree rooted at `root`.
///
/// A rejected duplicate hands back the untouched subtree together with the
/// entry, so nothing is lost and no height is recomputed.
pub fn insert<P>(root: Link<P>, entry: Entry<P>, accept_duplicates: bool) -> Insertion<P> {
    let Some(mut node) = root else {
        return Insertion::Inserted(Box::new(entry.into_node()));
    };

    if entry.weight == node.weight && !accept_duplicates {
        debug!(weight = entry.weight, "duplicate weight rejected");
        return Insertion::Rejected { root: node, entry };
    }

    let weight = entry.weight;
    let go_left = weight < node.weight;
    let child = if go_left {
        node.left.take()
    } else {
        node.right.take()
    };

    let (child, rejected) = match insert(child, entry, accept_duplicates) {
        Insertion::Inserted(child) => (child, None),
        Insertion::Rejected { root, entry } => (root, Some(entry)),
    };
    if go_left {
        node.left = Some(child);
    } else {
        node.right = Some(child);
    }

    match rejected {
        Some(entry) => Insertion::Rejected { root: node, entry },
        None => Insertion::Inserted(rebalance_after_insert(node, weight)),
    }
}

/// Unlinks `node`, which matched a delete.
///
/// A node with two children is kept in place and takes the weight of its
/// in-order successor, which is then deleted from the right subtree. The
/// node's own `id` and `payload` stay as they were.
fn remove_matched<P>(mut node: Box<Node<P>>) -> Link<P> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let successor = minimum(&right).weight;
            node.weight = successor;
            node.left = Some(left);
            node.right = remove_weight(Some(right), successor, &mut false);
            Some(node)
        }
    }
}

fn remove_weight<P>(root: Link<P>, weight: i64, removed: &mut bool) -> Link<P> {
    let Some(mut node) = root else {
        return None;
    };

    match weight.cmp(&node.weight) {
        Ordering::Less => node.left = remove_weight(node.left.take(), weight, removed),
        Ordering::Greater => node.right = remove_weight(node.right.take(), weight, removed),
        Ordering::Equal => {
            *removed = true;
            return remove_matched(node).map(rebalance_after_delete);
        }
    }

    Some(rebalance_after_delete(node))
}

fn remove_weight_id<P>(
    root: Link<P>,
    weight: i64,
    id: &str,
    accept_duplicates: bool,
    removed: &mut usize,
) -> Link<P> {
    let Some(mut node) = root else {
        return None;
    };

    match weight.cmp(&node.weight) {
        Ordering::Less => {
            node.left = remove_weight_id(node.left.take(), weight, id, accept_duplicates, removed);
        }
        Ordering::Greater => {
            node.right = remove_weight_id(node.right.take(), weight, id, accept_duplicates, removed);
        }
        Ordering::Equal if !accept_duplicates || node.id.as_deref() == Some(id) => {
            *removed += 1;
            return remove_matched(node).map(rebalance_after_delete);
        }
        Ordering::Equal => {
            node.right = remove_weight_id(node.right.take(), weight, id, accept_duplicates, removed);
            node.left = remove_weight_id(node.left.take(), weight, id, accept_duplicates, removed);
        }
    }

    Some(rebalance_after_delete(node))
}

/// Deletes one node of weight `weight` and reports whether one was found.
pub fn remove<P>(root: Link<P>, weight: i64) -> (Link<P>, bool) {
    let mut removed = false;
    let root = remove_weight(root, weight, &mut removed);
    if !removed {
        debug!(weight, "delete: weight not found");
    }
    (root, removed)
}

/// Like [`remove`], matching on `id` as well when duplicates are accepted,
/// and returning how many nodes were removed.
///
/// Without duplicates the identifier is ignored. With duplicates, an equal
/// weight whose id differs searches both subtrees, right first: rotations
/// can carry a duplicate to the left of its equal. A repeated weight and id
/// pair can therefore lose more than one node in a single call.
pub fn remove_with_id<P>(
    root: Link<P>,
    weight: i64,
    id: &str,
    accept_duplicates: bool,
) -> (Link<P>, usize) {
    let mut removed = 0;
    let root = remove_weight_id(root, weight, id, accept_duplicates, &mut removed);
    if removed == 0 {
        debug!(weight, id, "delete: no node with this weight and id");
    }
    (root, removed)
}

/// Deletes one node of weight `weight`. A missing weight leaves the tree as is.
pub fn delete<P>(root: Link<P>, weight: i64) -> Link<P> {
    remove(root, weight).0
}

/// Deletes the node with weight `weight` and identifier `id`.
pub fn delete_with_id<P>(root: Link<P>, weight: i64, id: &str, accept_duplicates: bool) -> Link<P> {
    remove_with_id(root, weight, id, accept_duplicates).0
}

/// Leftmost node of the subtree.
pub fn minimum<P>(node: &Node<P>) -> &Node<P> {
    let mut curr = node;
    while let Some(left) = curr.left.as_deref() {
        curr = left;
    }
    curr
}

/// Rightmost node of the subtree.
pub fn maximum<P>(node: &Node<P>) -> &Node<P> {
    let mut curr = node;
    while let Some(right) = curr.right.as_deref() {
        curr = right;
    }
    curr
}

pub fn try_minimum<P>(root: Option<&Node<P>>) -> Result<&Node<P>, AvlError> {
    root.map(minimum).ok_or(AvlError::EmptyTree)
}

pub fn try_maximum<P>(root: Option<&Node<P>>) -> Result<&Node<P>, AvlError> {
    root.map(maximum).ok_or(AvlError::EmptyTree)
}

fn tree_height<P>(node: Option<&Node<P>>) -> i32 {
    node.map_or(0, |n| {
        1 + tree_height(n.left.as_deref()).max(tree_height(n.right.as_deref()))
    })
}

/// Checks cached heights, AVL balance and in-order weight order.
pub fn assert_avl_tree<P>(root: Option<&Node<P>>, accept_duplicates: bool) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };

    fn validate_heights_and_bf<P>(node: &Node<P>) -> Result<(), String> {
        if let Some(l) = node.left.as_deref() {
            validate_heights_and_bf(l)?;
        }
        if let Some(r) = node.right.as_deref() {
            validate_heights_and_bf(r)?;
        }

        let expected = tree_height(Some(node));
        if node.height != expected {
            return Err(format!(
                "Stale height at weight {}: expected {expected}, got {}",
                node.weight, node.height
            ));
        }
        let lh = height(node.left.as_deref());
        let rh = height(node.right.as_deref());
        if !(-1..=1).contains(&(lh - rh)) {
            return Err(format!(
                "AVL balance violated at weight {}: bf={}",
                node.weight,
                lh - rh
            ));
        }
        Ok(())
    }

    validate_heights_and_bf(root)?;

    let mut prev: Option<i64> = None;
    for node in iter(Some(root)) {
        if let Some(prev) = prev {
            let in_order = if accept_duplicates {
                prev <= node.weight
            } else {
                prev < node.weight
            };
            if !in_order {
                return Err(format!(
                    "Node order violated: {prev} before {}",
                    node.weight
                ));
            }
        }
        prev = Some(node.weight);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(weight: i64) -> Box<Node<()>> {
        Box::new(Node::new(weight, None, None))
    }

    fn build(weights: &[i64], accept_duplicates: bool) -> Link<()> {
        let mut root = None;
        for &w in weights {
            root = match insert(root, Entry::new(w), accept_duplicates) {
                Insertion::Inserted(root) => Some(root),
                Insertion::Rejected { root, .. } => Some(root),
            };
        }
        root
    }

    fn in_order(root: Option<&Node<()>>) -> Vec<i64> {
        iter(root).map(|n| n.weight).collect()
    }

    #[test]
    fn rotate_right_moves_inner_grandchild() {
        let mut y = leaf(30);
        let mut x = leaf(20);
        x.left = Some(leaf(10));
        x.right = Some(leaf(25));
        x.update_height();
        y.left = Some(x);
        y.update_height();

        let root = rotate_right(y);
        assert_eq!(root.weight, 20);
        assert_eq!(root.height, 3);
        let right = root.right.as_deref().unwrap();
        assert_eq!(right.weight, 30);
        assert_eq!(right.left.as_deref().unwrap().weight, 25);
        assert_eq!(right.height, 2);
        assert_eq!(in_order(Some(&root)), vec![10, 20, 25, 30]);
    }

    #[test]
    fn rotate_without_child_is_identity() {
        let root = rotate_left(leaf(1));
        assert_eq!(root.weight, 1);
        let root = rotate_right(root);
        assert_eq!(root.weight, 1);
        assert_eq!(root.height, 1);
    }

    #[test]
    fn insert_duplicate_routing_goes_right_and_rebalances() {
        // 5, 5, 5 would be a right chain without the equal-goes-right case.
        let root = build(&[5, 5, 5], true);
        assert_avl_tree(root.as_deref(), true).unwrap();
        assert_eq!(root.as_deref().unwrap().height, 2);
        assert_eq!(in_order(root.as_deref()), vec![5, 5, 5]);
    }

    #[test]
    fn insert_equal_to_left_child_uses_left_right_rotation() {
        // 10, 5, then 5 again lands in 5's right subtree: left-right case.
        let root = build(&[10, 5, 5], true);
        assert_avl_tree(root.as_deref(), true).unwrap();
        let root = root.unwrap();
        assert_eq!(root.weight, 5);
        assert_eq!(root.height, 2);
    }

    #[test]
    fn delete_leaf_and_single_child() {
        let root = build(&[20, 10, 30, 40], false);
        let root = delete(root, 30);
        assert_eq!(in_order(root.as_deref()), vec![10, 20, 40]);
        assert_avl_tree(root.as_deref(), false).unwrap();
        let root = delete(root, 10);
        assert_eq!(in_order(root.as_deref()), vec![20, 40]);
        assert_avl_tree(root.as_deref(), false).unwrap();
    }

    #[test]
    fn delete_two_children_keeps_payload_of_replaced_node() {
        let mut root = None;
        for (w, p) in [(20, "a"), (10, "b"), (30, "c")] {
            root = match insert(root, Entry::new(w).with_payload(p), false) {
                Insertion::Inserted(root) => Some(root),
                Insertion::Rejected { .. } => unreachable!(),
            };
        }
        let root = delete(root, 20).unwrap();
        assert_eq!(root.weight, 30);
        assert_eq!(root.payload, Some("a"));
        assert!(root.right.is_none());
    }

    #[test]
    fn delete_rebalances_with_child_balance_rule() {
        // Removing 10 leaves 20 with a right child of bf 0: single left rotation.
        let root = build(&[20, 10, 30, 25, 35], false);
        let root = delete(root, 10).unwrap();
        assert_eq!(root.weight, 30);
        assert_eq!(root.left.as_deref().unwrap().weight, 20);
        assert_avl_tree(Some(&root), false).unwrap();
    }

    #[test]
    fn delete_missing_weight_is_noop() {
        let root = build(&[2, 1, 3], false);
        let before = root.clone();
        let root = delete(root, 99);
        assert_eq!(root, before);
        assert!(delete::<()>(None, 1).is_none());
    }

    #[test]
    fn delete_with_id_ignores_id_without_duplicates() {
        let root = build(&[2, 1, 3], false);
        let root = delete_with_id(root, 3, "whatever", false);
        assert_eq!(in_order(root.as_deref()), vec![1, 2]);
    }

    #[test]
    fn delete_with_id_searches_both_sides_of_equal_weight() {
        // Left rotation at the root moves the first 7 below the second one.
        let mut root: Link<()> = None;
        for (w, id) in [(7, "a"), (7, "b"), (7, "c")] {
            root = match insert(root, Entry::new(w).with_id(id), true) {
                Insertion::Inserted(root) => Some(root),
                Insertion::Rejected { .. } => unreachable!(),
            };
        }
        let top = root.as_deref().unwrap();
        assert_eq!(top.id.as_deref(), Some("b"));
        assert_eq!(top.left.as_deref().unwrap().id.as_deref(), Some("a"));

        let root = delete_with_id(root, 7, "a", true);
        let ids: Vec<_> = iter(root.as_deref())
            .map(|n| n.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_avl_tree(root.as_deref(), true).unwrap();
    }

    #[test]
    fn delete_with_unknown_id_leaves_tree_unchanged() {
        let mut root: Link<()> = None;
        for (w, id) in [(4, "x"), (4, "y")] {
            root = match insert(root, Entry::new(w).with_id(id), true) {
                Insertion::Inserted(root) => Some(root),
                Insertion::Rejected { .. } => unreachable!(),
            };
        }
        let before = root.clone();
        let root = delete_with_id(root, 4, "z", true);
        assert_eq!(root, before);
    }

    #[test]
    fn remove_reports_whether_a_node_went_away() {
        let (root, removed) = remove(build(&[2, 1, 3], false), 9);
        assert!(!removed);
        let (root, removed) = remove(root, 2);
        assert!(removed);
        assert_eq!(in_order(root.as_deref()), vec![1, 3]);

        let (root, removed) = remove_with_id(build(&[4, 4], true), 4, "none", true);
        assert_eq!(removed, 0);
        assert_eq!(in_order(root.as_deref()), vec![4, 4]);
        let (root, removed) = remove_with_id(root, 4, "none", false);
        assert_eq!(removed, 1);
        assert_eq!(in_order(root.as_deref()), vec![4]);
        assert!(!remove::<()>(None, 1).1);
    }

    #[test]
    fn remove_with_id_counts_a_match_on_each_side() {
        // Same layout as above: "b" on top, one "a" on each side.
        let mut root: Link<()> = None;
        for (w, id) in [(7, "a"), (7, "b"), (7, "a")] {
            root = match insert(root, Entry::new(w).with_id(id), true) {
                Insertion::Inserted(root) => Some(root),
                Insertion::Rejected { .. } => unreachable!(),
            };
        }
        let (root, removed) = remove_with_id(root, 7, "a", true);
        assert_eq!(removed, 2);
        let top = root.as_deref().unwrap();
        assert_eq!((top.id.as_deref(), top.height), (Some("b"), 1));
        assert_avl_tree(root.as_deref(), true).unwrap();
    }

    #[test]
    fn min_max_and_empty_queries() {
        let root = build(&[5, 1, 9, 3], false).unwrap();
        assert_eq!(minimum(&root).weight, 1);
        assert_eq!(maximum(&root).weight, 9);
        assert!(matches!(try_minimum::<()>(None), Err(AvlError::EmptyTree)));
        assert!(matches!(try_maximum::<()>(None), Err(AvlError::EmptyTree)));
        assert_eq!(try_maximum(Some(&root)).unwrap().weight, 9);
    }

    #[test]
    fn validator_reports_stale_height() {
        let mut root = build(&[2, 1, 3], false).unwrap();
        root.height = 5;
        let err = assert_avl_tree(Some(&root), false).unwrap_err();
        assert!(err.starts_with("Stale height"), "{err}");
    }

    #[test]
    fn validator_reports_imbalance_and_order() {
        let mut root = leaf(1);
        let mut mid = leaf(2);
        mid.right = Some(leaf(3));
        mid.update_height();
        root.right = Some(mid);
        root.update_height();
        let err = assert_avl_tree(Some(&root), false).unwrap_err();
        assert!(err.starts_with("AVL balance violated"), "{err}");

        let mut root = leaf(5);
        root.left = Some(leaf(9));
        root.update_height();
        let err = assert_avl_tree(Some(&root), false).unwrap_err();
        assert!(err.starts_with("Node order violated"), "{err}");

        let mut root = leaf(5);
        root.right = Some(leaf(5));
        root.update_height();
        assert!(assert_avl_tree(Some(&root), false).is_err());
        assert!(assert_avl_tree(Some(&root), true).is_ok());
    }
}
