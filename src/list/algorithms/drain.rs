use crate::list::cursor::CursorMut;
use crate::List;
use std::fmt;

/// An iterator that removes and yields the elements matching a filter.
///
/// This `struct` is created by [`List::drain_filter`]. Elements the filter
/// rejects stay in the list in their original order. Dropping it unfinished
/// still removes every remaining match.
pub struct DrainFilter<'a, T: 'a, F: 'a>
where
    F: FnMut(&mut T) -> bool,
{
    cursor: CursorMut<'a, T>,
    filter: F,
}

impl<'a, T, F> DrainFilter<'a, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(list: &'a mut List<T>, filter: F) -> Self {
        let cursor = list.cursor_start_mut();
        Self { cursor, filter }
    }
}

impl<T, F> Iterator for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if (self.filter)(self.cursor.current_mut()?) {
                return self.cursor.remove();
            }
            self.cursor.move_next().ok()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.cursor.view().len() - self.cursor.index();
        (0, Some(rest))
    }
}

impl<T, F> Drop for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainFilter")
            .field(self.cursor.view())
            .finish()
    }
}
