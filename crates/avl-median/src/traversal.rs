//! In-order iteration and display ordering.

use serde::Serialize;

use crate::types::ValueNode;

/// Ascending iterator over the values of an arena-backed tree.
///
/// Uses an explicit stack since nodes keep no parent links.
pub struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: ValueNode> InOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = self.arena[i as usize].l();
        }
    }
}

impl<N: ValueNode> Iterator for InOrder<'_, N> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let i = self.stack.pop()?;
        let n = &self.arena[i as usize];
        self.push_left(n.r());
        Some(n.value())
    }
}

/// One line of the rotated tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    pub depth: usize,
    pub value: i32,
}

/// Depth-first rows in right, self, left order.
///
/// Printed top to bottom with indentation growing with `depth`, the rows
/// show the tree rotated a quarter turn counter-clockwise.
pub fn render<N: ValueNode>(arena: &[N], root: Option<u32>) -> Vec<RenderRow> {
    fn walk<N: ValueNode>(arena: &[N], node: Option<u32>, depth: usize, out: &mut Vec<RenderRow>) {
        let Some(i) = node else {
            return;
        };
        let n = &arena[i as usize];
        walk(arena, n.r(), depth + 1, out);
        out.push(RenderRow {
            depth,
            value: n.value(),
        });
        walk(arena, n.l(), depth + 1, out);
    }

    let mut out = Vec::new();
    walk(arena, root, 0, &mut out);
    out
}
