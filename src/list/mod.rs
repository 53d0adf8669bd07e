use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::config::Config;
use crate::error::{ListError, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::drain::DrainFilter;

/// The default element type of a [`List`].
pub type Data = i32;

/// A [`List`] of [`Data`].
pub type OrderedList = List<Data>;

/// The `List` is a singly-linked list with owned nodes and a tail pointer.
/// It allows inserting at both ends in constant time, and inserting at any
/// position in time proportional to its distance from the head.
///
/// The `List` contains:
/// - a pointer `head` to the first node, which links the rest of the chain
///   through its `next` pointer;
/// - a pointer `tail` to the last node of the chain, used for appending in
///   *O*(1) time;
/// - a length field `len` counting the nodes of the chain;
/// - the runtime logging [`Config`] of the list.
///
/// Every node is allocated on heap and owned by the list as a whole, so
/// moving the list never moves a node.
///
/// `len == 0` if and only if both `head` and `tail` are absent. Otherwise,
/// following `next` exactly `len - 1` times from `head` reaches the node
/// pointed to by `tail`, whose `next` is absent.
///
/// # Naming Conventions
///
/// - *position* `at`: a zero-based offset in `0..=len` denoting the gap
///   before the node at `at`, where `len` is the gap after the tail;
/// - *predecessor* of position `at`: the node at `at - 1`, or `None` for
///   position 0.
pub struct List<T = Data> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    config: Config,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A single node of a [`List`].
///
/// A node is created detached by [`Node::new`]. Once attached, it is owned
/// by the list until it is detached again as a box.
pub struct Node<T = Data> {
    pub(crate) element: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Return the link to the node after `prev`, or the head link if `prev`
    /// is `None`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list.
    pub(crate) unsafe fn link_after(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
    ) -> &mut Option<NonNull<Node<T>>> {
        match prev {
            Some(mut prev) => &mut prev.as_mut().next,
            None => &mut self.head,
        }
    }

    /// Attach a detached node `node` to the list right after `prev`, or at the
    /// head if `prev` is `None`, and return a pointer to the attached node.
    ///
    /// - On an empty list, `node` becomes both the head and the tail,
    ///   whatever `prev` is.
    /// - If `prev` is `None`, `node` becomes the new head.
    /// - If `prev` is the tail, `node` becomes the new tail.
    /// - Otherwise `node` is spliced between `prev` and its successor.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        node: Box<Node<T>>,
    ) -> NonNull<Node<T>> {
        debug_assert!(node.next.is_none(), "Cannot attach a linked node");
        let prev = if self.is_empty() { None } else { prev };
        let mut node = NonNull::from(Box::leak(node));
        let link = self.link_after(prev);
        node.as_mut().next = link.replace(node);
        if node.as_ref().next.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        node
    }

    /// Detach the node right after `prev`, or the head if `prev` is `None`,
    /// and return it as a box. Return `None` if there is no such node.
    ///
    /// If the detached node was the tail, `prev` becomes the new tail.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
    ) -> Option<Box<Node<T>>> {
        let link = self.link_after(prev);
        let mut node = Box::from_raw((*link)?.as_ptr());
        *link = node.next.take();
        let was_tail = link.is_none();
        if was_tail {
            self.tail = prev;
        }
        self.len -= 1;
        Some(node)
    }

    /// Release every node, one at a time, and return how many were released.
    fn release_nodes(&mut self) -> usize {
        let released = self.len;
        let mut head = self.head.take();
        while let Some(node) = head {
            // SAFETY: every node of the chain was leaked from a box by
            // `attach_node`, and is released exactly once here.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            head = node.next;
        }
        self.tail = None;
        self.len = 0;
        released
    }

    /// Check that `at` is a position of the list.
    pub(crate) fn check_position(
        &self,
        operation: &'static str,
        argument: &'static str,
        at: usize,
    ) -> Result<()> {
        if at > self.len {
            return Err(self.report(ListError::OutOfBounds {
                operation,
                argument,
                position: at,
                len: self.len,
            }));
        }
        Ok(())
    }

    /// Send `err` to the error sink if enabled, and hand it back.
    pub(crate) fn report(&self, err: ListError) -> ListError {
        if self.config.report_errors {
            tracing::warn!(
                operation = err.operation(),
                argument = err.argument(),
                "{}",
                err
            );
        }
        err
    }

    pub(crate) fn cursor_at(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        let _seek = cursor.seek_to(at);
        debug_assert!(_seek.is_ok(), "Cannot create cursor at a nonexistent position");
        cursor
    }

    pub(crate) fn cursor_mut_at(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        let _seek = cursor.seek_to(at);
        debug_assert!(_seek.is_ok(), "Cannot create cursor at a nonexistent position");
        cursor
    }
}

impl<T> List<T> {
    /// Create an empty `List` with the default [`Config`].
    ///
    /// # Examples
    /// ```
    /// use ordered_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Create an empty `List` with the given [`Config`].
    ///
    /// # Examples
    /// ```
    /// use ordered_list::{Config, List};
    /// let list: List = List::with_config(Config::new().trace(true));
    /// assert!(list.config().trace);
    /// ```
    #[inline]
    pub fn with_config(config: Config) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            config,
            _marker: PhantomData,
        }
    }

    /// Returns the [`Config`] of the list.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Replaces the [`Config`] of the list.
    #[inline]
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// Clearing an empty list does nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// assert_eq!(list.back(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = self.release_nodes();
        if self.config.trace {
            tracing::debug!(released, "removed all nodes from list");
        }
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` always points to the first node of the chain owned
        // by the list, and the list is borrowed immutably here.
        self.head.map(|head| unsafe { &(*head.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` always points to the first node of the chain owned
        // by the list, and the list is borrowed mutably here.
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_front(0);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` always points to the last node of the chain owned by
        // the list, and the list is borrowed immutably here.
        self.tail.map(|tail| unsafe { &tail.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `tail` always points to the last node of the chain owned by
        // the list, and the list is borrowed mutably here.
        self.tail.map(|mut tail| unsafe { &mut tail.as_mut().element })
    }

    /// Provides a reference to the element at position `at`, or `None` if
    /// `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(1), Some(&2));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, at: usize) -> Option<&T> {
        self.iter().nth(at)
    }

    /// Provides a mutable reference to the element at position `at`, or `None`
    /// if `at >= len`.
    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        self.iter_mut().nth(at)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.to_string(), "2 -> 1 -> NULL");
    /// ```
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: `None` denotes the head link, which always belongs to the list.
        unsafe {
            self.attach_node(None, Node::new(elt));
        }
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_back(3);
    /// assert_eq!(list.to_string(), "2 -> 1 -> 3 -> NULL");
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: `tail` is either `None` (the list is empty) or the last
        // node of the list.
        unsafe {
            self.attach_node(self.tail, Node::new(elt));
        }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: `None` denotes the head link, which always belongs to the list.
        unsafe { self.detach_node(None) }.map(Node::into_element)
    }

    /// Inserts an element at position `at`, counted from the front of the
    /// list.
    ///
    /// Position `0` makes the element the new front, and position `len` the
    /// new back.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] and leaves the list untouched if
    /// `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time, or *O*(1) if
    /// `at == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 4, 3, 5]);
    ///
    /// assert!(list.insert(6, 6).is_err());
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        self.check_position("insert", "position", at)?;
        self.cursor_mut_at(at).insert(elt);
        Ok(())
    }

    /// Inserts an element at position `at`, counted from the back of the list.
    ///
    /// Position `0` makes the element the new back, and position `len` the
    /// new front. It is equivalent to `insert(len - at, elt)`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] and leaves the list untouched if
    /// `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`len - at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 2]);
    ///
    /// list.insert_from_back(0, 4).unwrap();
    /// list.insert_from_back(3, 5).unwrap();
    /// assert_eq!(list.to_string(), "5 -> 3 -> 2 -> 4 -> NULL");
    /// ```
    pub fn insert_from_back(&mut self, at: usize, elt: T) -> Result<()> {
        self.check_position("insert_from_back", "position", at)?;
        let from_front = self.len - at;
        self.cursor_mut_at(from_front).insert(elt);
        Ok(())
    }

    /// Provides a cursor at the given position.
    ///
    /// By convention, the cursor is past the back of the list if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        self.check_position("cursor", "at", at)?;
        Ok(self.cursor_at(at))
    }

    /// Provides a cursor at the front of the list.
    ///
    /// The cursor is past the back if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, 0)
    }

    /// Provides a cursor past the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, self.len)
    }

    /// Provides a cursor with editing operations at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] if `at > len`.
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
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert!(list.cursor_mut(4).is_err());
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        self.check_position("cursor_mut", "at", at)?;
        Ok(self.cursor_mut_at(at))
    }

    /// Provides a cursor with editing operations at the front of the list.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None, 0)
    }

    /// Provides a cursor with editing operations past the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    /// cursor.insert(4);
    /// assert_eq!(cursor.previous(), Some(&4));
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (tail, len) = (self.tail, self.len);
        CursorMut::new(self, tail, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_string(), "10 -> 11 -> NULL");
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Display> List<T> {
    /// Prints the list to the standard output, followed by a newline.
    ///
    /// See the [`Display`] implementation for the format.
    pub fn print(&self) {
        println!("{}", self);
    }
}

/// Renders the list as `v1 -> v2 -> ... -> NULL`, or `NULL` if it is empty.
///
/// # Examples
///
/// ```
/// use ordered_list::List;
/// use std::iter::FromIterator;
///
/// assert_eq!(List::from_iter([1, 2, 3]).to_string(), "1 -> 2 -> 3 -> NULL");
/// assert_eq!(List::<i32>::new().to_string(), "NULL");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(f, "{} -> ", element)?;
        }
        f.write_str("NULL")
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// let node = Node::new(7);
    /// assert_eq!(node.element(), &7);
    ///
    /// list.cursor_start_mut().insert_node(node);
    /// assert_eq!(list.front(), Some(&7));
    /// ```
    pub fn new(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            next: None,
        })
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    /// Provides a mutable reference to the element of a detached node.
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
    /// let mut node = cursor.remove_node().unwrap();
    /// *node.element_mut() *= 10;
    /// cursor.move_to_end();
    /// cursor.insert_node(node);
    /// assert_eq!(list.to_string(), "2 -> 3 -> 10 -> NULL");
    /// ```
    pub fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    pub fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("linked", &self.next.is_some())
            .finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

unsafe impl<T: Send> Send for Node<T> {}

unsafe impl<T: Sync> Sync for Node<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the chain and check that `len` and `tail` agree with it.
    pub(crate) fn assert_well_formed(&self) {
        let mut len = 0;
        let mut last = None;
        let mut node = self.head;
        while let Some(current) = node {
            len += 1;
            last = Some(current);
            // SAFETY: every link of the chain points to a node owned by the list.
            node = unsafe { current.as_ref() }.next;
        }
        assert_eq!(len, self.len, "`len` does not match the chain");
        assert_eq!(last, self.tail, "`tail` does not point to the last node");
        assert_eq!(self.head.is_none(), self.tail.is_none());
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.assert_well_formed();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.assert_well_formed();
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_drop_long_chain() {
        let list = List::from_iter(0..200_000);
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        list_eq(&list, None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list_eq(&list, vec![2, 1, 3]);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        list_eq(&list, vec![1, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.back(), None);
        list_eq(&list, None);

        // the tail pointer survives a head insertion into a single-node list
        list.push_back(4);
        list.push_front(5);
        list.push_back(6);
        list_eq(&list, vec![5, 4, 6]);
    }

    #[test]
    fn list_insert() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, Some(11).into_iter().chain(0..5).chain(Some(10)).chain(5..10));

        list.insert(12, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        list.push_back(13);
        list_eq(
            &list,
            Some(11)
                .into_iter()
                .chain(0..5)
                .chain(Some(10))
                .chain(5..10)
                .chain(12..14),
        );
    }

    #[test]
    fn list_insert_at_every_position() {
        fn test_case(len: i32) {
            for at in 0..=len as usize {
                let mut list = List::from_iter(0..len);
                list.insert(at, -1).unwrap();
                assert_eq!(list.get(at), Some(&-1));
                assert_eq!(list.len(), len as usize + 1);
                let mut expected = Vec::from_iter(0..len);
                expected.insert(at, -1);
                list_eq(&list, expected);

                let mut from_back = List::from_iter(0..len);
                from_back.insert_from_back(len as usize - at, -1).unwrap();
                assert_eq!(from_back, list);
                from_back.assert_well_formed();
            }
        }
        test_case(0);
        test_case(1);
        test_case(2);
        test_case(5);
    }

    #[test]
    fn list_insert_out_of_bounds() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(
            list.insert(4, 0),
            Err(ListError::OutOfBounds {
                operation: "insert",
                argument: "position",
                position: 4,
                len: 3,
            })
        );
        assert_eq!(
            list.insert_from_back(4, 0),
            Err(ListError::OutOfBounds {
                operation: "insert_from_back",
                argument: "position",
                position: 4,
                len: 3,
            })
        );
        list_eq(&list, vec![1, 2, 3]);

        let mut empty = List::new();
        assert!(empty.insert(1, 0).is_err());
        assert!(empty.insert_from_back(1, 0).is_err());
        list_eq(&empty, None);
        assert!(empty.insert_from_back(0, 0).is_ok());
        list_eq(&empty, Some(0));
    }

    #[test]
    fn list_get() {
        let mut list = List::from_iter(0..5);
        assert_eq!(list.get(0), Some(&0));
        assert_eq!(list.get(4), Some(&4));
        assert_eq!(list.get(5), None);
        *list.get_mut(2).unwrap() = 20;
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 40;
        list_eq(&list, vec![10, 1, 20, 3, 40]);
    }

    #[test]
    fn list_moved_by_value() {
        fn single(value: i32) -> List {
            let mut list = List::new();
            list.push_back(value);
            list
        }

        let mut list = single(1);
        assert_eq!(list.back(), Some(&1));
        list.push_back(2);
        list_eq(&list, vec![1, 2]);

        let mut moved = Box::new(single(3));
        assert_eq!(moved.cursor_end().previous(), Some(&3));
        *moved.back_mut().unwrap() = 4;
        moved.push_back(5);
        moved.rotate(1).unwrap();
        list_eq(&moved, vec![5, 4]);

        let mut lists = vec![single(6), List::from_iter(7..9), single(9).clone()];
        for list in lists.iter_mut() {
            list.push_back(0);
            list.reverse();
            list.push_back(-1);
        }
        list_eq(&lists[0], vec![0, 6, -1]);
        list_eq(&lists[1], vec![0, 8, 7, -1]);
        list_eq(&lists[2], vec![0, 9, -1]);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.clear();
        list_eq(&list, None);
        assert_eq!(list.len(), 0);
        list.clear();
        list_eq(&list, None);

        list.push_back(1);
        list_eq(&list, Some(1));
    }

    #[test]
    fn list_display() {
        let mut list = List::<i32>::new();
        assert_eq!(list.to_string(), "NULL");
        list.push_front(1);
        assert_eq!(list.to_string(), "1 -> NULL");
        list.push_front(2);
        assert_eq!(list.to_string(), "2 -> 1 -> NULL");
        list.push_back(3);
        assert_eq!(list.to_string(), "2 -> 1 -> 3 -> NULL");
        assert_eq!(format!("{:?}", list), "[2, 1, 3]");
    }

    #[test]
    fn list_driver_transcript() {
        let mut list = List::<i32>::new();
        let mut transcript = vec![list.to_string()];
        let step = |list: &List, transcript: &mut Vec<String>| {
            list.assert_well_formed();
            transcript.push(list.to_string());
        };

        list.push_front(1);
        step(&list, &mut transcript);
        list.push_front(2);
        step(&list, &mut transcript);
        list.push_back(3);
        step(&list, &mut transcript);
        list.push_back(4);
        step(&list, &mut transcript);
        list.push_back(5);
        step(&list, &mut transcript);
        list.remove_data(&3);
        step(&list, &mut transcript);
        list.remove_data(&2);
        step(&list, &mut transcript);
        list.remove_data(&5);
        step(&list, &mut transcript);
        list.clear();
        step(&list, &mut transcript);

        list.push_front(2);
        step(&list, &mut transcript);
        list.push_front(3);
        step(&list, &mut transcript);
        list.push_front(2);
        step(&list, &mut transcript);
        list.push_back(2);
        step(&list, &mut transcript);
        list.remove_data(&2);
        step(&list, &mut transcript);
        list.push_front(2);
        step(&list, &mut transcript);
        list.remove_data(&3);
        step(&list, &mut transcript);
        list.clear();
        step(&list, &mut transcript);

        list.insert(0, 2).unwrap();
        step(&list, &mut transcript);
        list.insert(1, 3).unwrap();
        step(&list, &mut transcript);
        list.remove_data(&3);
        step(&list, &mut transcript);
        list.insert(0, 3).unwrap();
        step(&list, &mut transcript);
        list.insert_from_back(0, 4).unwrap();
        step(&list, &mut transcript);
        list.insert_from_back(3, 5).unwrap();
        step(&list, &mut transcript);
        list.insert(2, 6).unwrap();
        step(&list, &mut transcript);
        list.insert_from_back(2, 7).unwrap();
        step(&list, &mut transcript);
        list.clear();
        step(&list, &mut transcript);

        list.reverse();
        step(&list, &mut transcript);
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        step(&list, &mut transcript);
        list.reverse();
        step(&list, &mut transcript);
        list.push_back(4);
        list.push_back(5);
        step(&list, &mut transcript);
        list.rotate(1).unwrap();
        step(&list, &mut transcript);
        list.rotate(-1).unwrap();
        step(&list, &mut transcript);
        list.rotate(0).unwrap();
        step(&list, &mut transcript);
        list.rotate(2).unwrap();
        step(&list, &mut transcript);
        list.rotate(-3).unwrap();
        step(&list, &mut transcript);
        assert!(list.rotate(5).is_err());
        step(&list, &mut transcript);

        let expected = [
            "NULL",
            "1 -> NULL",
            "2 -> 1 -> NULL",
            "2 -> 1 -> 3 -> NULL",
            "2 -> 1 -> 3 -> 4 -> NULL",
            "2 -> 1 -> 3 -> 4 -> 5 -> NULL",
            "2 -> 1 -> 4 -> 5 -> NULL",
            "1 -> 4 -> 5 -> NULL",
            "1 -> 4 -> NULL",
            "NULL",
            "2 -> NULL",
            "3 -> 2 -> NULL",
            "2 -> 3 -> 2 -> NULL",
            "2 -> 3 -> 2 -> 2 -> NULL",
            "3 -> NULL",
            "2 -> 3 -> NULL",
            "2 -> NULL",
            "NULL",
            "2 -> NULL",
            "2 -> 3 -> NULL",
            "2 -> NULL",
            "3 -> 2 -> NULL",
            "3 -> 2 -> 4 -> NULL",
            "5 -> 3 -> 2 -> 4 -> NULL",
            "5 -> 3 -> 6 -> 2 -> 4 -> NULL",
            "5 -> 3 -> 6 -> 7 -> 2 -> 4 -> NULL",
            "NULL",
            "NULL",
            "3 -> 2 -> 1 -> NULL",
            "1 -> 2 -> 3 -> NULL",
            "1 -> 2 -> 3 -> 4 -> 5 -> NULL",
            "5 -> 1 -> 2 -> 3 -> 4 -> NULL",
            "1 -> 2 -> 3 -> 4 -> 5 -> NULL",
            "1 -> 2 -> 3 -> 4 -> 5 -> NULL",
            "4 -> 5 -> 1 -> 2 -> 3 -> NULL",
            "2 -> 3 -> 4 -> 5 -> 1 -> NULL",
            "2 -> 3 -> 4 -> 5 -> 1 -> NULL",
        ];
        assert_eq!(transcript, expected);
    }
}
