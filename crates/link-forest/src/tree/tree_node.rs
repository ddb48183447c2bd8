use crate::types::Node;

/// Element of a [`Forest`](crate::Forest).
///
/// `p` is a non-owning back-reference to the parent slot; `l` and `r` own
/// the child subtrees. A node handed back by
/// [`Forest::remove`](crate::Forest::remove) is detached: all three links
/// are empty and the value belongs to the caller.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) v: T,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(parent: Option<u32>, value: T) -> Self {
        Self {
            p: parent,
            l: None,
            r: None,
            v: value,
        }
    }

    pub fn value(&self) -> &T {
        &self.v
    }

    pub fn into_value(self) -> T {
        self.v
    }

    /// `true` when the node has no parent and no children.
    pub fn is_detached(&self) -> bool {
        self.p.is_none() && self.l.is_none() && self.r.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
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
