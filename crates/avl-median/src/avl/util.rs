use std::cmp::Ordering;

use tracing::{debug, trace};

use super::types::{AvlNode, AvlNodeLike};

/// Height of the subtree at `node`; an absent subtree has height 0.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map(|i| arena[i as usize].height()).unwrap_or(0)
}

/// `height(left) - height(right)`; an absent subtree has balance factor 0.
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    let Some(i) = node else {
        return 0;
    };
    let n = &arena[i as usize];
    height(arena, n.l()) - height(arena, n.r())
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let n = &arena[i as usize];
    let h = 1 + height(arena, n.l()).max(height(arena, n.r()));
    arena[i as usize].set_height(h);
}

/// Imbalance shape found at a node after an insertion.
///
/// Named after where the excess height sits: `LeftRight` means the node is
/// left-heavy and its left child is right-heavy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Single right rotation.
    LeftLeft,
    /// Left rotation on the left child, then right rotation on the node.
    LeftRight,
    /// Single left rotation.
    RightRight,
    /// Right rotation on the right child, then left rotation on the node.
    RightLeft,
}

/// Selects the rotation for a node from its balance factor and the balance
/// factor of its heavier child. Returns `None` when the node is balanced.
pub fn classify(bf: i32, child_bf: i32) -> Option<Rotation> {
    if bf > 1 {
        if child_bf >= 0 {
            Some(Rotation::LeftLeft)
        } else {
            Some(Rotation::LeftRight)
        }
    } else if bf < -1 {
        if child_bf <= 0 {
            Some(Rotation::RightRight)
        } else {
            Some(Rotation::RightLeft)
        }
    } else {
        None
    }
}

/// Per-case rotation tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationCounts {
    pub left_left: usize,
    pub left_right: usize,
    pub right_right: usize,
    pub right_left: usize,
}

impl RotationCounts {
    pub fn record(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::LeftLeft => self.left_left += 1,
            Rotation::LeftRight => self.left_right += 1,
            Rotation::RightRight => self.right_right += 1,
            Rotation::RightLeft => self.right_left += 1,
        }
    }

    pub fn get(&self, rotation: Rotation) -> usize {
        match rotation {
            Rotation::LeftLeft => self.left_left,
            Rotation::LeftRight => self.left_right,
            Rotation::RightRight => self.right_right,
            Rotation::RightLeft => self.right_left,
        }
    }

    pub fn total(&self) -> usize {
        self.left_left + self.left_right + self.right_right + self.right_left
    }
}

/// Right rotation around `x`. Returns the new subtree root.
///
/// ```text
///         (x)            (z)
///         / \            / \
///       (z)  c   =>     a  (x)
///       / \                / \
///      a   b              b   c
/// ```
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let Some(z) = arena[x as usize].l() else {
        return x;
    };
    let zr = arena[z as usize].r();
    arena[x as usize].set_l(zr);
    arena[z as usize].set_r(Some(x));
    update_height(arena, x);
    update_height(arena, z);
    z
}

/// Left rotation around `x`. Mirror of [`rotate_right`].
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let Some(z) = arena[x as usize].r() else {
        return x;
    };
    let zl = arena[z as usize].l();
    arena[x as usize].set_r(zl);
    arena[z as usize].set_l(Some(x));
    update_height(arena, x);
    update_height(arena, z);
    z
}

fn apply<N: AvlNodeLike>(arena: &mut [N], node: u32, rotation: Rotation) -> u32 {
    match rotation {
        Rotation::LeftLeft => rotate_right(arena, node),
        Rotation::RightRight => rotate_left(arena, node),
        Rotation::LeftRight => {
            if let Some(l) = arena[node as usize].l() {
                let l = rotate_left(arena, l);
                arena[node as usize].set_l(Some(l));
            }
            rotate_right(arena, node)
        }
        Rotation::RightLeft => {
            if let Some(r) = arena[node as usize].r() {
                let r = rotate_right(arena, r);
                arena[node as usize].set_r(Some(r));
            }
            rotate_left(arena, node)
        }
    }
}

/// Refreshes the height of `node` and restores the AVL invariant there.
///
/// Children must already be balanced with coherent heights. Returns the root
/// of the subtree that must be bound into `node`'s old slot, together with
/// the rotation that was applied, if any.
pub fn rebalance<N: AvlNodeLike>(arena: &mut [N], node: u32) -> (u32, Option<Rotation>) {
    update_height(arena, node);
    let bf = balance_factor(arena, Some(node));
    let child = if bf > 1 {
        arena[node as usize].l()
    } else {
        arena[node as usize].r()
    };
    let Some(rotation) = classify(bf, balance_factor(arena, child)) else {
        return (node, None);
    };
    trace!(?rotation, pivot = arena[node as usize].value(), bf, "rotating");
    (apply(arena, node, rotation), Some(rotation))
}

/// Inserts `value` below `node` and returns the new root of that subtree.
///
/// A new leaf bumps `elements`; an equal value leaves the subtree untouched.
/// Every ancestor on the insertion path is rebalanced once on the way back
/// up, innermost first.
pub fn insert(
    arena: &mut Vec<AvlNode>,
    node: Option<u32>,
    value: i32,
    elements: &mut usize,
    rotations: &mut RotationCounts,
) -> u32 {
    let Some(n) = node else {
        arena.push(AvlNode::new(value));
        *elements += 1;
        return (arena.len() - 1) as u32;
    };

    match value.cmp(&arena[n as usize].v) {
        Ordering::Less => {
            let l = arena[n as usize].l;
            let l = insert(arena, l, value, elements, rotations);
            arena[n as usize].l = Some(l);
        }
        Ordering::Greater => {
            let r = arena[n as usize].r;
            let r = insert(arena, r, value, elements, rotations);
            arena[n as usize].r = Some(r);
        }
        Ordering::Equal => {
            debug!(value, "duplicate value ignored");
            return n;
        }
    }

    let (root, rotation) = rebalance(arena.as_mut_slice(), n);
    if let Some(rotation) = rotation {
        rotations.record(rotation);
    }
    root
}

/// Index of the node holding `value`, if any.
pub fn find<N: AvlNodeLike>(arena: &[N], root: Option<u32>, value: i32) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let n = &arena[i as usize];
        curr = match value.cmp(&n.value()) {
            Ordering::Less => n.l(),
            Ordering::Greater => n.r(),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Checks every structural invariant of the tree at `root`.
///
/// Heights are recomputed from structure and compared against the cached
/// ones; ordering is checked with strict bounds, so duplicates fail too.
pub fn assert_avl_tree<N: AvlNodeLike>(
    arena: &[N],
    root: Option<u32>,
    elements: usize,
) -> Result<(), String> {
    fn validate<N: AvlNodeLike>(
        arena: &[N],
        node: Option<u32>,
        lo: Option<i32>,
        hi: Option<i32>,
        seen: &mut [bool],
        count: &mut usize,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let Some(slot) = seen.get_mut(i as usize) else {
            return Err(format!("Node index {i} outside arena"));
        };
        if *slot {
            return Err(format!("Node[{i}] reachable more than once"));
        }
        *slot = true;
        *count += 1;

        let n = &arena[i as usize];
        let v = n.value();
        if lo.is_some_and(|lo| v <= lo) || hi.is_some_and(|hi| v >= hi) {
            return Err(format!("Node order violated at value {v}"));
        }

        let lh = validate(arena, n.l(), lo, Some(v), seen, count)?;
        let rh = validate(arena, n.r(), Some(v), hi, seen, count)?;
        let expected = 1 + lh.max(rh);
        if n.height() != expected {
            return Err(format!(
                "Height mismatch at value {v}: expected {expected}, got {}",
                n.height()
            ));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err(format!("AVL balance violated at value {v}: bf={}", lh - rh));
        }
        Ok(expected)
    }

    let mut seen = vec![false; arena.len()];
    let mut count = 0;
    validate(arena, root, None, None, &mut seen, &mut count)?;
    if count != elements {
        return Err(format!(
            "Element count mismatch: counter says {elements}, tree holds {count}"
        ));
    }
    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<N: AvlNodeLike>(arena: &[N], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}, bf={}] {}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                balance_factor(arena, Some(i)),
                n.value()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> (Vec<AvlNode>, Option<u32>, RotationCounts) {
        let mut arena = Vec::new();
        let mut root = None;
        let mut elements = 0;
        let mut rotations = RotationCounts::default();
        for &v in values {
            root = Some(insert(&mut arena, root, v, &mut elements, &mut rotations));
        }
        (arena, root, rotations)
    }

    fn shape(arena: &[AvlNode], root: Option<u32>) -> (i32, Option<i32>, Option<i32>) {
        let n = &arena[root.unwrap() as usize];
        (
            n.v,
            n.l.map(|i| arena[i as usize].v),
            n.r.map(|i| arena[i as usize].v),
        )
    }

    #[test]
    fn classify_matches_case_predicates() {
        assert_eq!(classify(2, 1), Some(Rotation::LeftLeft));
        assert_eq!(classify(2, 0), Some(Rotation::LeftLeft));
        assert_eq!(classify(2, -1), Some(Rotation::LeftRight));
        assert_eq!(classify(-2, -1), Some(Rotation::RightRight));
        assert_eq!(classify(-2, 0), Some(Rotation::RightRight));
        assert_eq!(classify(-2, 1), Some(Rotation::RightLeft));
        for bf in -1..=1 {
            for child_bf in -1..=1 {
                assert_eq!(classify(bf, child_bf), None);
            }
        }
    }

    #[test]
    fn height_and_balance_factor_of_absent_subtree() {
        let arena: Vec<AvlNode> = Vec::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance_factor(&arena, None), 0);
    }

    #[test]
    fn rotate_right_moves_inner_subtree() {
        // Left chain 3 -> 2 -> 1 linked by hand.
        let mut arena = vec![AvlNode::new(3), AvlNode::new(2), AvlNode::new(1)];
        arena[0].l = Some(1);
        arena[1].l = Some(2);
        arena[1].h = 2;
        arena[0].h = 3;
        let root = rotate_right(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(2));
        assert_eq!(arena[1].r, Some(0));
        assert_eq!(arena[0].l, None);
        assert_eq!(arena[0].h, 1);
        assert_eq!(arena[1].h, 2);
        assert_avl_tree(&arena, Some(root), 3).unwrap();
    }

    #[test]
    fn rotate_without_child_is_noop() {
        let mut arena = vec![AvlNode::new(1)];
        assert_eq!(rotate_right(&mut arena, 0), 0);
        assert_eq!(rotate_left(&mut arena, 0), 0);
    }

    #[test]
    fn single_and_double_rotation_shapes() {
        for (input, case) in [
            ([3, 2, 1], Rotation::LeftLeft),
            ([1, 2, 3], Rotation::RightRight),
            ([3, 1, 2], Rotation::LeftRight),
            ([1, 3, 2], Rotation::RightLeft),
        ] {
            let (arena, root, rotations) = build(&input);
            assert_eq!(shape(&arena, root), (2, Some(1), Some(3)), "{input:?}");
            assert_eq!(rotations.total(), 1);
            assert_eq!(rotations.get(case), 1);
            assert_avl_tree(&arena, root, 3).unwrap();
        }
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut arena = Vec::new();
        let mut elements = 0;
        let mut rotations = RotationCounts::default();
        let root = insert(&mut arena, None, 7, &mut elements, &mut rotations);
        let again = insert(&mut arena, Some(root), 7, &mut elements, &mut rotations);
        assert_eq!(root, again);
        assert_eq!(elements, 1);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn validator_reports_stale_height() {
        let (mut arena, root, _) = build(&[2, 1, 3]);
        arena[root.unwrap() as usize].h = 5;
        let err = assert_avl_tree(&arena, root, 3).unwrap_err();
        assert!(err.starts_with("Height mismatch"), "{err}");
    }

    #[test]
    fn validator_reports_order_and_count() {
        let (mut arena, root, _) = build(&[2, 1, 3]);
        assert!(assert_avl_tree(&arena, root, 4)
            .unwrap_err()
            .starts_with("Element count mismatch"));
        let l = arena[root.unwrap() as usize].l.unwrap();
        arena[l as usize].v = 9;
        assert!(assert_avl_tree(&arena, root, 3)
            .unwrap_err()
            .starts_with("Node order violated"));
    }

    #[test]
    fn find_locates_values() {
        let (arena, root, _) = build(&[5, 3, 8, 1, 4]);
        assert!(find(&arena, root, 4).is_some());
        assert_eq!(find(&arena, root, 6), None);
        assert_eq!(find(&arena, None, 6), None);
    }

    #[test]
    fn print_dumps_structure() {
        let (arena, root, _) = build(&[2, 1, 3]);
        let out = print(&arena, root, "");
        assert!(out.starts_with("Node[0] [h=2, bf=0] 2"), "{out}");
        assert!(out.contains("L=Node[1] [h=1, bf=0] 1"), "{out}");
        assert!(out.contains("R=Node[2] [h=1, bf=0] 3"), "{out}");
        assert_eq!(print::<AvlNode>(&arena, None, ""), "∅");
    }
}
