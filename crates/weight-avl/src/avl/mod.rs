//! AVL engine: insertion, both deletions, rotations and validation.

pub mod tree;
pub mod types;
pub mod util;
pub mod weight_tree;

pub use tree::AvlTree;
pub use types::{Entry, Insertion};
pub use util::{
    assert_avl_tree, delete, delete_with_id, insert, maximum, minimum, remove, remove_with_id,
    try_maximum, try_minimum,
};
pub use weight_tree::WeightTree;
