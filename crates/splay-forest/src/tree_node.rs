use crate::types::Node;

/// Arena slot of a linked binary tree.
///
/// `element` is `None` while the slot sits on the free list. `generation`
/// is bumped every time the slot is vacated, so a
/// [`Position`](crate::Position) minted for an earlier occupant no longer
/// matches.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub generation: u32,
    pub element: Option<T>,
}

impl<T> TreeNode<T> {
    pub fn new(element: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            generation: 0,
            element: Some(element),
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.element.is_none()
    }
}

impl<T> Node for TreeNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
