use crate::types::{Node, ValueNode};

/// One AVL tree vertex.
#[derive(Clone, Debug)]
pub struct AvlNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: i32,
    /// Cached height of the subtree rooted here; a leaf has height 1.
    pub h: i32,
}

impl AvlNode {
    pub fn new(v: i32) -> Self {
        Self {
            l: None,
            r: None,
            v,
            h: 1,
        }
    }
}

impl Node for AvlNode {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl ValueNode for AvlNode {
    fn value(&self) -> i32 {
        self.v
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: ValueNode {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl AvlNodeLike for AvlNode {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
