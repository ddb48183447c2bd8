//! Link trait shared by the tree algorithms.
//!
//! Tree "pointers" are `Option<u32>` slot indices into the [`Forest`]
//! arena. `p` is a non-owning back-reference; `l` and `r` name the node's
//! owned children.
//!
//! [`Forest`]: crate::Forest

/// Binary-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
