//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by the tree. Each child
//! "pointer" is an `Option<u32>` index into that arena, so a subtree is only
//! ever reachable from one parent slot and rotations are index swaps.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node carrying an ordered integer value.
///
/// The value is the sort key and the only payload; it is fixed at creation.
pub trait ValueNode: Node {
    fn value(&self) -> i32;
}
