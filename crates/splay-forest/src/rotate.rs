//! Rotation and trinode restructure over an arena of [`Node`] links.
//!
//! Both operations only rewrite links, so the in-order key sequence and the
//! node count are unchanged. They know nothing about balance criteria and
//! can drive any rebalancing policy.

use crate::types::{Node, Side};
use crate::util::{get_l, get_p, get_r, relink, replace_in_parent, side_of};

/// Rotates `x` above its parent and returns the new tree root.
///
/// ```text
///       y                x
///      / \              / \
///     x   t2    →     t0   y
///    / \                  / \
///   t0  t1              t1  t2
/// ```
///
/// The mirrored case is handled symmetrically. A root `x` is left as is.
pub fn rotate<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_p(arena, x) else {
        return root;
    };
    let root = replace_in_parent(arena, root, y, Some(x));
    if get_l(arena, y) == Some(x) {
        let middle = get_r(arena, x);
        relink(arena, y, middle, Side::Left);
        relink(arena, x, Some(y), Side::Right);
    } else {
        let middle = get_l(arena, x);
        relink(arena, y, middle, Side::Right);
        relink(arena, x, Some(y), Side::Left);
    }
    root
}

/// Trinode restructure of `x`, its parent `y` and grandparent `z`.
///
/// ```text
///     z=a               z=c           z=a               z=c
///    /  \              /  \          /  \              /  \
///   t0  y=b           y=b  t3       t0   y=c          y=a  t3
///      /  \          /  \               /  \         /  \
///     t1  x=c       x=a  t2            x=b  t3      t0   x=b
///
///                           b
///                         /   \
///                        a     c
/// ```
///
/// When `x` and `y` sit on the same side of their parents, `y` is rotated
/// once and becomes the subtree top. Otherwise `x` is rotated twice and
/// becomes the top. Returns `(new_root, top)`. Without a grandparent the
/// tree is left untouched and `x` is returned as the top.
pub fn restructure<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> (Option<u32>, u32) {
    let Some(y) = get_p(arena, x) else {
        return (root, x);
    };
    if get_p(arena, y).is_none() {
        return (root, x);
    }
    if side_of(arena, x) == side_of(arena, y) {
        (rotate(arena, root, y), y)
    } else {
        let root = rotate(arena, root, x);
        (rotate(arena, root, x), x)
    }
}
