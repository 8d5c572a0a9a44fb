//! AVL tree: arena nodes, balance engine and the [`AvlTree`] facade.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::{AvlTree, TreeSnapshot};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, balance_factor, classify, find, height, insert, print, rebalance,
    rotate_left, rotate_right, Rotation, RotationCounts,
};
