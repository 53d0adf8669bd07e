use crate::list::{List, Node};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can seek to any position.
/// Since the list is singly linked, it only moves forward; seeking backward
/// restarts from the front.
///
/// In a list with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is past the back of the list.
/// The cursor remembers the node before its position (the *predecessor*),
/// which is `None` at position 0.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end of the
/// list is denoted by `#`).
/// ```
/// use ordered_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.previous(), Some(&'D'));
///
/// // Cannot move past the end
/// assert!(cursor.move_next().is_err());
///
/// // Seek backward by restarting from the front: [ A|B C D #] (index = 1)
/// assert!(cursor.seek_to(1).is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a List<T>,
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use ordered_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different lists.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.index == other.index
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use ordered_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let cursor2 = list.cursor_end();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can seek to any
/// position, and can safely mutate the list during iteration. All insertions
/// and removals go through the cursor's predecessor, which it keeps valid
/// across its own mutations.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use ordered_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn current_node(&self) -> Option<NonNull<Node<T>>> {
                match self.prev {
                    // SAFETY: `prev` is always a node of the list the cursor
                    // borrows.
                    Some(prev) => unsafe { prev.as_ref() }.next,
                    None => self.list.head_node(),
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is past the back of the list.
            pub fn is_end(&self) -> bool {
                self.index == self.list.len()
            }

            /// Move the cursor to the next position, or return an error
            /// if it is already past the back of the list.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor(2).unwrap();
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move past the end
            /// assert!(cursor.move_next().is_err());
            /// assert_eq!(cursor.index(), 3);
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                let next = self.current_node().ok_or("`move_next` past the end")?;
                self.prev = Some(next);
                self.index += 1;
                Ok(())
            }

            /// Move forward the cursor by given steps, or return the number of
            /// steps actually taken when the end is reached first.
            ///
            /// If an error occurs, the cursor will stay past the back.
            ///
            /// This operation should compute in *O*(`steps`) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert_eq!(cursor.seek_forward(5), Err(1));
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(`target`) time, or
            /// *O*(1) if `target` is `0` or `len`.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Moving backward restarts from the front
            /// assert!(cursor.seek_to(1).is_ok());
            /// assert_eq!(cursor.current(), Some(&2));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                match target {
                    target if target > len => return Err(target - len),
                    target if target == self.index => {}
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    _ => {
                        if target < self.index {
                            self.move_to_start();
                        }
                        let steps = target - self.index;
                        self.seek_forward(steps).map_err(|taken| steps - taken)?;
                    }
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.prev = None;
            }

            /// Set the cursor past the back of the list.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_to_end();
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.prev = self.list.tail_node();
            }

            /// Return an immutable reference of current node of the cursor,
            /// or return `None` if it is past the back of the list.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).unwrap().current(), Some(&1));
            /// assert_eq!(list.cursor(2).unwrap().current(), Some(&3));
            /// assert_eq!(list.cursor(3).unwrap().current(), None);
            /// ```
            pub fn current(&self) -> Option<&T> {
                // SAFETY: the current node belongs to the list the cursor borrows.
                self.current_node().map(|node| unsafe { &(*node.as_ptr()).element })
            }

            /// Return an immutable reference of previous node of the cursor,
            /// or return `None` if it is located at the first node.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).unwrap().previous(), None);
            /// assert_eq!(list.cursor(1).unwrap().previous(), Some(&1));
            /// assert_eq!(list.cursor(3).unwrap().previous(), Some(&3));
            /// ```
            pub fn previous(&self) -> Option<&T> {
                // SAFETY: `prev` is always a node of the list the cursor borrows.
                self.prev.map(|prev| unsafe { &prev.as_ref().element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, prev: Option<NonNull<Node<T>>>, index: usize) -> Self {
        Self { index, prev, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        prev: Option<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        Self { index, prev, list }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an mutable reference of current node of the cursor,
    /// or return `None` if it is past the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Nothing to mutate past the back.
    /// cursor.move_to_end();
    /// assert!(cursor.current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the current node belongs to the list the cursor borrows
        // mutably.
        self.current_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.prev, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.prev, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert a new item before the current node. The cursor keeps pointing
    /// to the same node, so its index grows by one.
    ///
    /// Past the back of the list, the item becomes the new back.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(5);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.previous(), Some(&5));
    /// assert_eq!(cursor.index(), 2);
    ///
    /// cursor.move_to_end();
    /// cursor.insert(6);
    /// assert_eq!(list.to_string(), "1 -> 5 -> 2 -> 3 -> 6 -> NULL");
    /// ```
    pub fn insert(&mut self, item: T) {
        self.insert_node(Node::new(item));
    }

    /// Like [`CursorMut::insert`], but attaches a node made by [`Node::new`]
    /// (or detached by [`CursorMut::remove_node`]).
    pub fn insert_node(&mut self, node: Box<Node<T>>) {
        // SAFETY: `prev` is always a node of the list the cursor borrows.
        let node = unsafe { self.list.attach_node(self.prev, node) };
        self.prev = Some(node);
        self.index += 1;
    }

    /// Remove the current node and return its element, or return `None` if
    /// the cursor is past the back of the list. The cursor then points to
    /// the node after the removed one.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(2).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(3));
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.remove(), None);
    ///
    /// // The removed node's predecessor is the new back.
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        self.remove_node().map(Node::into_element)
    }

    /// Like [`CursorMut::remove`], but returns the detached node itself.
    pub fn remove_node(&mut self) -> Option<Box<Node<T>>> {
        // SAFETY: `prev` is always a node of the list the cursor borrows.
        unsafe { self.list.detach_node(self.prev) }
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
