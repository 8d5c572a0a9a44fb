//! Arena-based AVL tree with an order-statistics median query.
//!
//! Values are distinct `i32`s; inserting a value that is already present is
//! a no-op. Nodes are stored in a `Vec` owned by the tree and linked with
//! `Option<u32>` indices, so rotations only swap indices and the whole tree
//! is released by dropping the arena.
//!
//! The median is found by an in-order walk that tracks ranks and stops once
//! the one or two central values are collected; the sorted sequence is never
//! materialised.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`ValueNode`] link traits |
//! | [`avl`] | [`AvlNode`], balance engine, insertion, [`AvlTree`] facade |
//! | [`median`] | central-value walk, [`MedianError`], reference median |
//! | [`traversal`] | [`InOrder`] iterator, display rows |
//! | [`fuzzer`] | seeded random inputs |
//! | [`scenario`] | tree median vs reference runs |
//!
//! # Example
//!
//! ```
//! use avl_median::build_tree;
//!
//! let tree = build_tree([4, 1, 3, 2, 3]);
//! assert_eq!(tree.element_count(), 4);
//! assert_eq!(tree.in_order_values(), vec![1, 2, 3, 4]);
//! assert_eq!(tree.median(), Ok(2.5));
//! ```

pub mod avl;
pub mod fuzzer;
pub mod median;
pub mod scenario;
pub mod traversal;
pub mod types;

pub use avl::{AvlNode, AvlTree, Rotation, RotationCounts};
pub use median::{reference_median, CentralValues, MedianError};
pub use traversal::{InOrder, RenderRow};
pub use types::{Node, ValueNode};

/// Builds a tree by inserting every value once, in order.
pub fn build_tree<I: IntoIterator<Item = i32>>(values: I) -> AvlTree {
    AvlTree::from_values(values)
}
