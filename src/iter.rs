//! Standard iterators over a view, built on its cursor pairs.
//!
//! [`Iter`] walks `begin..end` and [`RevIter`] walks `rbegin..rend`.

use core::{iter::FusedIterator, slice};

use crate::{cursor::Cursor, view::View};

/// Forward iterator: walks `begin` up to `end`.
///
/// Double-ended: `next_back` walks `end` down toward `begin`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(view: View<'a, T>) -> Self {
        Iter {
            front: view.begin(),
            back: view.end(),
            remaining: view.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.move_next();
        self.remaining -= 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev();
        self.remaining -= 1;
        self.back.get()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Reverse iterator: walks `rbegin` down to `rend`.
///
/// This is the same [`Cursor`] type as the forward pair, positioned at
/// `last - 1` and `first - 1` and stepped with `move_prev`.
#[derive(Debug)]
pub struct RevIter<'a, T> {
    cursor: Cursor<'a, T>,
    rend: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(view: View<'a, T>) -> Self {
        RevIter {
            cursor: view.rbegin(),
            rend: view.rend(),
            remaining: view.len(),
        }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == self.rend {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.move_prev();
        self.remaining -= 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        RevIter {
            cursor: self.cursor,
            rend: self.rend,
            remaining: self.remaining,
        }
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}
impl<T> FusedIterator for RevIter<'_, T> {}

/// Mutable forward iterator.
///
/// Exclusive cursors cannot hand out references that outlive themselves, so
/// this one rides on the slice iterator of the same range.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        IterMut {
            inner: slice.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
