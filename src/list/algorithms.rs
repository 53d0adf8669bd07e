use crate::error::{ListError, Result};
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub mod drain;

use drain::DrainFilter;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::with_config(self.config());
        list.extend(self.iter().cloned());
        list
    }

    fn clone_from(&mut self, other: &Self) {
        self.set_config(other.config());
        let mut cursor_mut = self.cursor_start_mut();
        for elem_other in other {
            match cursor_mut.current_mut() {
                None => cursor_mut.insert(elem_other.clone()),
                Some(elem) => {
                    elem.clone_from(elem_other);
                    let _moved = cursor_mut.move_next();
                    debug_assert!(_moved.is_ok());
                }
            }
        }
        while cursor_mut.remove().is_some() {}
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Creates an iterator which uses a closure to determine if an element
    /// should be removed.
    ///
    /// If the closure returns true, then the element is removed and yielded.
    /// If the closure returns false, the element will remain in the list and
    /// will not be yielded by the iterator.
    ///
    /// The list is scanned once from the front. Removing an element does not
    /// restart the scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut numbers = List::from_iter([1, 2, 3, 4, 5, 6, 8, 9, 11, 13, 14, 15]);
    ///
    /// let evens = Vec::from_iter(numbers.drain_filter(|x| *x % 2 == 0));
    /// let odds = Vec::from_iter(numbers);
    ///
    /// assert_eq!(evens, vec![2, 4, 6, 8, 14]);
    /// assert_eq!(odds, vec![1, 3, 5, 9, 11, 13, 15]);
    /// ```
    pub fn drain_filter<F>(&mut self, filter: F) -> DrainFilter<'_, T, F>
    where
        F: FnMut(&mut T) -> bool,
    {
        DrainFilter::new(self, filter)
    }

    /// Removes every element equal to `value` and returns how many were
    /// removed.
    ///
    /// An absent value is not an error: the list is left unchanged and `0`
    /// is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 3, 2, 2]);
    ///
    /// assert_eq!(list.remove_data(&2), 3);
    /// assert_eq!(list.to_string(), "3 -> NULL");
    ///
    /// assert_eq!(list.remove_data(&7), 0);
    /// assert_eq!(list.to_string(), "3 -> NULL");
    /// ```
    pub fn remove_data(&mut self, value: &T) -> usize
    where
        T: PartialEq<T>,
    {
        let removed = self.drain_filter(|e| *e == *value).count();
        if self.config.trace {
            if removed == 0 {
                tracing::debug!("value not found in list");
            } else {
                tracing::debug!(removed, len = self.len, "removed value from list");
            }
        }
        removed
    }

    /// Reverses the order of the list in place.
    ///
    /// The former front becomes the back and the former back becomes the
    /// front. An empty list is left as it is.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_string(), "3 -> 2 -> 1 -> NULL");
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut rest = self.head;
        self.tail = self.head;
        while let Some(mut node) = rest {
            // SAFETY: every link of the chain points to a node owned by the
            // list, and the list is borrowed mutably here.
            let node_mut = unsafe { node.as_mut() };
            rest = std::mem::replace(&mut node_mut.next, reversed);
            reversed = Some(node);
        }
        self.head = reversed;
        if self.config.trace {
            tracing::debug!(len = self.len, "reversed list");
        }
    }

    /// Rotates the list in place by `rotation` positions.
    ///
    /// A positive `rotation` moves the last `rotation` elements to the front,
    /// and a negative one moves the first `-rotation` elements to the back.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::UnsupportedRotation`] and leaves the list
    /// untouched unless `-len < rotation < len`. In particular, any rotation
    /// of an empty list is rejected, and so is a full turn.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`-rotation`) time for a negative
    /// `rotation`, or *O*(`len - rotation`) time for a positive one, and
    /// *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// list.rotate(2).unwrap();
    /// assert_eq!(list.to_string(), "4 -> 5 -> 1 -> 2 -> 3 -> NULL");
    ///
    /// list.rotate(-3).unwrap();
    /// assert_eq!(list.to_string(), "2 -> 3 -> 4 -> 5 -> 1 -> NULL");
    ///
    /// assert!(list.rotate(5).is_err());
    /// assert_eq!(list.to_string(), "2 -> 3 -> 4 -> 5 -> 1 -> NULL");
    /// ```
    pub fn rotate(&mut self, rotation: isize) -> Result<()> {
        let magnitude = rotation.unsigned_abs();
        if magnitude >= self.len {
            return Err(self.report(ListError::UnsupportedRotation {
                rotation,
                len: self.len,
            }));
        }
        if rotation == 0 {
            return Ok(());
        }
        let split = if rotation < 0 {
            magnitude
        } else {
            self.len - magnitude
        };
        // SAFETY: `0 < split < len`, so the list has at least two nodes.
        unsafe { self.rotate_at(split) };
        if self.config.trace {
            tracing::debug!(rotation, split, "rotated list");
        }
        Ok(())
    }

    /// Make the node at `split` the new head, by closing the chain into a
    /// ring and cutting it right before that node.
    ///
    /// It is unsafe because it requires `0 < split < len`.
    unsafe fn rotate_at(&mut self, split: usize) {
        debug_assert!(0 < split && split < self.len);
        let mut old_tail = match self.tail {
            Some(tail) => tail,
            None => return,
        };
        old_tail.as_mut().next = self.head;
        let mut new_tail = old_tail;
        for _ in 0..split {
            new_tail = match new_tail.as_ref().next {
                Some(next) => next,
                None => break,
            };
        }
        self.head = new_tail.as_mut().next.take();
        self.tail = Some(new_tail);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::ListError;
    use crate::list::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::io;
    use std::iter::FromIterator;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reverse_twice() {
        fn test_case(len: i32) {
            let mut list = List::from_iter(0..len);
            list.reverse();
            list.assert_well_formed();
            assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter((0..len).rev()));
            list.reverse();
            list.assert_well_formed();
            assert_eq!(list, List::from_iter(0..len));
        }
        test_case(0);
        test_case(1);
        test_case(2);
        test_case(5);
    }

    #[test]
    fn reverse_then_push() {
        let mut list = List::from_iter([1, 2, 3]);
        list.reverse();
        list.push_back(0);
        list.push_front(4);
        list.assert_well_formed();
        assert_eq!(list.to_string(), "4 -> 3 -> 2 -> 1 -> 0 -> NULL");
    }

    #[test]
    fn rotate_and_back() {
        fn test_case(len: i32) {
            let origin = List::from_iter(0..len);
            for rotation in -(len as isize - 1)..len as isize {
                let mut list = origin.clone();
                list.rotate(rotation).unwrap();
                list.assert_well_formed();
                let mut expected = Vec::from_iter(0..len);
                if rotation >= 0 {
                    expected.rotate_right(rotation as usize);
                } else {
                    expected.rotate_left(rotation.unsigned_abs());
                }
                assert_eq!(Vec::from_iter(list.iter().copied()), expected);
                list.rotate(-rotation).unwrap();
                list.assert_well_formed();
                assert_eq!(list, origin);
            }
        }
        test_case(1);
        test_case(2);
        test_case(3);
        test_case(6);
    }

    #[test]
    fn rotate_right_by_one() {
        let mut list = List::from_iter([1, 2, 3, 4, 5]);
        list.rotate(1).unwrap();
        assert_eq!(list.to_string(), "5 -> 1 -> 2 -> 3 -> 4 -> NULL");
        list.rotate(-1).unwrap();
        assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4 -> 5 -> NULL");
        list.push_back(6);
        list.assert_well_formed();
    }

    #[test]
    fn rotate_unsupported() {
        let mut list = List::from_iter([1, 2, 3]);
        for rotation in [3, -3, 4, isize::MIN, isize::MAX] {
            assert_eq!(
                list.rotate(rotation),
                Err(ListError::UnsupportedRotation { rotation, len: 3 })
            );
            assert_eq!(list.to_string(), "1 -> 2 -> 3 -> NULL");
        }
        let mut empty: List = List::new();
        assert!(empty.rotate(0).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn remove_data() {
        let mut list = List::from_iter([2, 1, 3]);
        assert_eq!(list.remove_data(&1), 1);
        assert_eq!(list.to_string(), "2 -> 3 -> NULL");
        list.clear();
        assert_eq!(list.to_string(), "NULL");
        assert_eq!(list.len(), 0);

        let mut list = List::from_iter([1, 4, 5]);
        assert_eq!(list.remove_data(&9), 0);
        assert_eq!(list.to_string(), "1 -> 4 -> 5 -> NULL");
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove_data(&5), 1);
        list.assert_well_formed();
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    fn clone_and_compare() {
        let config = Config::new().trace(true);
        let mut list: List = List::with_config(config);
        list.extend([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(cloned, list);
        assert_eq!(cloned.config(), config);
        assert_eq!(list, List::from_iter([1, 2, 3]));
        assert!(list < List::from_iter([1, 2, 4]));
        assert!(list > List::from_iter([1, 2]));

        fn hash_of(list: &List) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(hash_of(&list), hash_of(&cloned));
    }

    #[test]
    fn clone_from() {
        fn test_case(from: usize, to: usize) {
            let mut list = List::from_iter(0..from);
            let other = List::from_iter(10..10 + to);
            list.clone_from(&other);
            list.assert_well_formed();
            assert_eq!(list, other);
        }
        for (from, to) in [(0, 0), (0, 3), (3, 0), (2, 5), (5, 2), (4, 4)] {
            test_case(from, to);
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<F: FnOnce()>(f: F) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.output()
    }

    #[test]
    fn trace_bulk_operations() {
        let logs = with_captured_logs(|| {
            let mut list: List = List::with_config(Config::new().trace(true));
            list.extend([1, 2, 3]);
            list.remove_data(&7);
            list.remove_data(&2);
            list.reverse();
            list.rotate(1).unwrap();
            list.clear();
        });
        assert!(logs.contains("value not found in list"));
        assert!(logs.contains("removed value from list"));
        assert!(logs.contains("removed=1"));
        assert!(logs.contains("reversed list"));
        assert!(logs.contains("rotated list"));
        assert!(logs.contains("released=2"));
    }

    #[test]
    fn trace_disabled_by_default() {
        let logs = with_captured_logs(|| {
            let mut list = List::from_iter([1, 2, 3]);
            list.remove_data(&2);
            list.reverse();
            list.clear();
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn report_errors() {
        let logs = with_captured_logs(|| {
            let mut list = List::from_iter([1, 2, 3]);
            assert!(list.insert(9, 0).is_err());
            assert!(list.rotate(-3).is_err());
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("argument `position` of `insert` is out of bounds"));
        assert!(logs.contains("operation=\"rotate\""));

        let logs = with_captured_logs(|| {
            let mut list: List = List::with_config(Config::new().report_errors(false));
            assert!(list.rotate(1).is_err());
        });
        assert!(logs.is_empty());
    }
}
