//! Intrusive node-link data structures.
//!
//! The nodes carry the links and the structure is nothing more than those
//! links:
//!
//! - **Tree** ([`Forest`], [`TreeNode`]): an unbalanced ordered binary search
//!   tree. Children and the parent back-link are `Option<u32>` indices into
//!   the forest arena, never pointers.
//! - **Chain** ([`LinkedNode`], [`Link`], [`ForwardLink`]): a singly-linked
//!   chain where every node owns its successor.
//! - **List** ([`FrontList`]): a handle owning the chain's before-first
//!   sentinel, edited through a [`CursorMut`].
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`comparator`] | three-way [`Comparator`] contract and adapters |
//! [`types`] | [`Node`] link accessor trait |
//! [`tree`] | [`Forest`] arena, insert / find / remove, rotations, [`TreeSet`] |
//! [`list`] | chain primitives and [`FrontList`] |
//! [`error`] | [`ForestError`], [`InvariantError`] |

pub mod comparator;
pub mod error;
pub mod list;
pub mod tree;
pub mod types;

pub use comparator::{AlwaysEq, AlwaysGt, AlwaysLt, Comparator, DefaultComparator, EqLessComparator, LessComparator};
pub use error::{ForestError, InvariantError};
pub use list::{CursorMut, ForwardLink, FrontList, Link, LinkedNode};
pub use tree::{Forest, NodeId, Removal, TreeNode, TreeSet};
pub use types::Node;
