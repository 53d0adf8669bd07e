//! This crate provides a singly-linked list with owned nodes and a tail
//! pointer.
//!
//! The [`List`] allows pushing elements at both ends in constant time, and
//! inserting at any position counted from either end. In compromise,
//! accessing or mutating elements at a position takes *O*(*n*) time. It also
//! supports removing every occurrence of a value, reversal and rotation in
//! place.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ordered_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! list.insert(2, 9).unwrap();
//! assert_eq!(list.to_string(), "0 -> 1 -> 9 -> 2 -> 3 -> 4 -> NULL");
//!
//! list.remove_data(&9);
//! list.rotate(-1).unwrap();
//! assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4 -> 0 -> NULL");
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "0 -> 4 -> 3 -> 2 -> 1 -> NULL");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ──→ NULL
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//!    ║ payload T ║           ║ payload T ║                        │ payload T │
//!    ╚═══════════╝           ╚═══════════╝                        └───────────┘
//!        Node 0                  Node 1                            Node N - 1
//!          ↑                                                            ↑
//! ╔═══════════╗                                                         ┆
//! ║   head    ║ ────────────────┘                                       ┆
//! ╟───────────╢                                                         ┆
//! ║   tail    ║ ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `head` to the first node;
//! - a pointer `tail` to the last node;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, and links its
//! successor through its `next` pointer. The `next` pointer of the last node
//! is empty. All nodes are owned by the list itself, so moving the list
//! leaves them in place.
//!
//! In an empty list, both `head` and `tail` are absent.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, and the *positions* between them by 0, 1, ..., *n*, where
//! position *n* is past the last node.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. They
//! walk the list from front to back, and are fused and exact-sized.
//!
//! ## Examples
//!
//! ```
//! use ordered_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list. Since the list is singly linked, they only
//! move forward; seeking to an earlier position restarts from the front.
//!
//! [`CursorMut`] edits the list at the cursor in constant time:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//!
//! ## Examples
//!
//! ```
//! use ordered_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 2, 4]);
//! ```
//!
//! # Errors and Logging
//!
//! Operations taking a position or a rotation return a [`Result`] with a
//! [`ListError`] when the argument is out of range, leaving the list
//! untouched. Each such error is also reported as a `tracing` warning, and
//! bulk operations can emit debug events, both controlled by the [`Config`]
//! of the list.
//!
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Data, DrainFilter, List, Node, OrderedList};

mod config;
mod error;
pub mod list;
