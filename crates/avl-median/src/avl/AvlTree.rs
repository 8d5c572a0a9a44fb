use serde::Serialize;

use crate::median::{self, CentralValues, MedianError};
use crate::traversal::{self, InOrder, RenderRow};

use super::types::AvlNode;
use super::util::{assert_avl_tree, find, height, insert, print, RotationCounts};

/// AVL tree of distinct `i32` values.
///
/// Nodes live in an arena owned by the tree and are never removed, so node
/// indices stay valid for the life of the tree.
#[derive(Clone, Debug, Default)]
pub struct AvlTree {
    root: Option<u32>,
    elements: usize,
    rotations: RotationCounts,
    arena: Vec<AvlNode>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `values` in order. Repeated values are
    /// stored once.
    pub fn from_values<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// Inserts `value`. Returns `false` and leaves the tree untouched when
    /// the value is already present.
    pub fn insert(&mut self, value: i32) -> bool {
        let before = self.elements;
        let root = insert(
            &mut self.arena,
            self.root,
            value,
            &mut self.elements,
            &mut self.rotations,
        );
        self.root = Some(root);
        self.elements != before
    }

    pub fn contains(&self, value: i32) -> bool {
        find(&self.arena, self.root, value).is_some()
    }

    /// Number of distinct values stored.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements == 0
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Node at arena index `idx`, or `None` past the end of the arena.
    pub fn node(&self, idx: u32) -> Option<&AvlNode> {
        self.arena.get(idx as usize)
    }

    /// Rotations performed so far, by case.
    pub fn rotations(&self) -> RotationCounts {
        self.rotations
    }

    pub fn central_values(&self) -> Result<CentralValues, MedianError> {
        median::central_values(&self.arena, self.root, self.elements)
    }

    pub fn median(&self) -> Result<f64, MedianError> {
        median::median(&self.arena, self.root, self.elements)
    }

    pub fn iter(&self) -> InOrder<'_, AvlNode> {
        InOrder::new(&self.arena, self.root)
    }

    /// All values in ascending order.
    pub fn in_order_values(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// `(depth, value)` rows for display, right subtree first.
    pub fn render(&self) -> Vec<RenderRow> {
        traversal::render(&self.arena, self.root)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root, self.elements)
    }

    pub fn print(&self, tab: &str) -> String {
        format!("AvlTree {}", print(&self.arena, self.root, tab))
    }

    /// Serializable view of the tree used by display collaborators.
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            elements: self.elements,
            height: self.height(),
            values: self.in_order_values(),
            rows: self.render(),
        }
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for v in values {
            self.insert(v);
        }
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = i32;
    type IntoIter = InOrder<'a, AvlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub elements: usize,
    pub height: i32,
    pub values: Vec<i32>,
    pub rows: Vec<RenderRow>,
}
