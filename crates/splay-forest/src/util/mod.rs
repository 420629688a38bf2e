//! Index-level helpers over an arena of [`Node`] links.
//!
//! Everything here takes the arena as a slice plus `u32` indices and never
//! checks generations; callers validate positions first.
//!
//! [`relink`] is the only function that writes a child slot. It updates the
//! child's parent pointer in the same step, which keeps parent and child
//! links mutually consistent.

use crate::types::{Node, Side};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

/// Writes `child` into the `side` slot of `parent` and points the child
/// back at `parent`. `child` may be `None` to clear the slot.
pub fn relink<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>, side: Side) {
    match side {
        Side::Left => arena[parent as usize].set_l(child),
        Side::Right => arena[parent as usize].set_r(child),
    }
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

/// Which slot of its parent `idx` occupies, or `None` for a root.
pub fn side_of<N: Node>(arena: &[N], idx: u32) -> Option<Side> {
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        Some(Side::Left)
    } else {
        debug_assert_eq!(get_r(arena, p), Some(idx), "node {idx} is not a child of its parent {p}");
        Some(Side::Right)
    }
}

/// Puts `node` into the slot `old` used to hold under `old`'s parent, or
/// makes it the root. Returns the resulting tree root.
pub fn replace_in_parent<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    old: u32,
    node: Option<u32>,
) -> Option<u32> {
    match (get_p(arena, old), side_of(arena, old)) {
        (Some(p), Some(side)) => {
            relink(arena, p, node, side);
            root
        }
        _ => {
            if let Some(n) = node {
                set_p(arena, n, None);
            }
            node
        }
    }
}

/// Leftmost node of the subtree rooted at `idx`.
pub fn subtree_first<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Rightmost node of the subtree rooted at `idx`.
pub fn subtree_last<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(r) = get_r(arena, idx) {
        idx = r;
    }
    idx
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| subtree_first(arena, r))
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| subtree_last(arena, r))
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return Some(subtree_first(arena, r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return Some(subtree_last(arena, l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Number of edges between `idx` and the root.
pub fn depth<N: Node>(arena: &[N], idx: u32) -> usize {
    let mut depth = 0;
    let mut curr = get_p(arena, idx);
    while let Some(p) = curr {
        depth += 1;
        curr = get_p(arena, p);
    }
    depth
}

/// Height of the subtree under `root`: `-1` when empty, `0` for a leaf.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> isize {
    let mut max = -1;
    let mut stack: Vec<(u32, isize)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((i, level)) = stack.pop() {
        max = max.max(level);
        stack.extend(get_l(arena, i).map(|l| (l, level + 1)));
        stack.extend(get_r(arena, i).map(|r| (r, level + 1)));
    }
    max
}
