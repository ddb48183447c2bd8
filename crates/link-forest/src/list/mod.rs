//! Forward-linked chain and the [`FrontList`] handle over it.
//!
//! ```
//! use link_forest::FrontList;
//!
//! let mut list: FrontList<i32> = (1..=6).collect();
//! assert_eq!(list.remove_if(|v| v % 2 == 0), 3);
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
//!
//! let mut cursor = list.before_begin_mut();
//! cursor.move_next();
//! cursor.insert_after(4);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 1]);
//! ```

mod cursor;
mod front_list;
mod linked_node;

pub use cursor::CursorMut;
pub use front_list::{FrontList, IntoIter, Iter, IterMut};
pub use linked_node::{ForwardLink, Link, LinkedNode};
