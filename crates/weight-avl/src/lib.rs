//! Weight-ordered AVL tree.
//!
//! Entries are `i64` weights, optionally carrying an identifier and an opaque
//! payload. The [`avl::AvlTree`] engine keeps no root of its own: every
//! mutation takes the caller's root by value and returns the new one, so a
//! rebalanced subtree is handed back rather than patched in place.
//!
//! Equal weights are either rejected or, with duplicates enabled, routed into
//! the right subtree. Duplicates are told apart on deletion by identifier.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`Link`], `height` / `balance_factor` |
//! [`avl`] | engine, rotations, both deletes, validation, [`avl::WeightTree`] |
//! [`util`] | in-order traversal |
//! [`print`] | level diagram and tree dump |
//! [`export`] | one-weight-per-line writer and reader |
//! [`config`] | [`AvlConfig`] loaded from TOML |

pub mod avl;
pub mod config;
pub mod error;
pub mod export;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlTree, Entry, Insertion, WeightTree};
pub use config::AvlConfig;
pub use error::AvlError;
pub use types::{balance_factor, height, Link, Node};
pub use util::{first, iter, last, weights, Iter};
