//! Bidirectional cursors into a view.
//!
//! A cursor is a position paired with the view that produced it. Moving a
//! cursor is plain arithmetic and is never checked; the position may wander
//! anywhere. Dereferencing is what gets checked: only positions inside the
//! producing view yield an element.
//!
//! ```text
//!      rend   begin                  rbegin   end
//!       ▼      ▼                       ▼       ▼
//!     [ -1 |   0   |   1   |  ...  | len-1 | len ]
//!               └──── dereferenceable ────┘
//! ```
//!
//! The default cursor is the *sentinel*: it points nowhere, never
//! dereferences, and compares unequal to every positioned cursor.

use core::{
    fmt,
    ops::{Deref, DerefMut},
    ptr,
};

use crate::view::{View, ViewMut};

/// A read-only cursor, the `Copy` counterpart of `*const T` within a view.
pub struct Cursor<'a, T> {
    view: Option<View<'a, T>>,
    pos: isize,
}

/// A mutable cursor.
///
/// Not `Clone`: two copies could hand out aliasing `&mut T`. Use
/// [`as_cursor`](CursorMut::as_cursor) to compare positions.
pub struct CursorMut<'a, T> {
    view: Option<ViewMut<'a, T>>,
    pos: isize,
}

static_assertions::assert_eq_size!(Cursor<u32>, [usize; 3]);
static_assertions::assert_eq_size!(CursorMut<u32>, [usize; 3]);
static_assertions::assert_impl_all!(Cursor<'static, u8>: Copy, Eq, Default, Send, Sync);
static_assertions::assert_not_impl_any!(CursorMut<'static, u8>: Clone);

#[cold]
#[track_caller]
fn bad_deref(pos: isize, len: Option<usize>) -> ! {
    match len {
        None => panic!("dereferenced the sentinel cursor"),
        Some(len) => panic!("dereferenced a cursor at {pos} outside a view of length {len}"),
    }
}

/// Identity used for equality: the element address, plus the position for
/// zero-sized `T` where every element shares one address.
#[inline]
fn address<T>(first: *const T, pos: isize) -> (*const T, isize) {
    if size_of::<T>() == 0 {
        (first, pos)
    } else {
        (first.wrapping_offset(pos), 0)
    }
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn at(view: View<'a, T>, pos: isize) -> Self {
        Cursor {
            view: Some(view),
            pos,
        }
    }

    /// Pre-increment: steps forward one element and returns `self`.
    #[inline]
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Pre-decrement: steps back one element and returns `self`.
    #[inline]
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Post-increment: steps forward and returns the cursor as it was.
    #[inline]
    pub fn post_next(&mut self) -> Self {
        let before = *self;
        self.move_next();
        before
    }

    /// Post-decrement: steps back and returns the cursor as it was.
    #[inline]
    pub fn post_prev(&mut self) -> Self {
        let before = *self;
        self.move_prev();
        before
    }

    /// The element under the cursor, or `None` for the sentinel and for
    /// positions outside the view.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        let view = self.view?;
        view.get(usize::try_from(self.pos).ok()?)
    }

    /// The element under the cursor, unchecked.
    ///
    /// # Safety
    ///
    /// The cursor must not be the sentinel and must be positioned inside its
    /// view, i.e. [`get`](Self::get) would return `Some`.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &'a T {
        debug_assert!(self.get().is_some(), "unchecked deref of an invalid cursor");
        // SAFETY: positioned inside a view per the contract.
        unsafe { self.view.unwrap_unchecked().get_unchecked(self.pos as usize) }
    }

    /// Index of the element under the cursor within its view.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.get().map(|_| self.pos as usize)
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.view.is_none()
    }

    /// Address the cursor points at, null for the sentinel.
    ///
    /// Never dereference this unless [`get`](Self::get) returns `Some`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.view {
            Some(view) => view.as_ptr().wrapping_offset(self.pos),
            None => ptr::null(),
        }
    }

    #[inline]
    fn address(&self) -> Option<(*const T, isize)> {
        self.view.map(|view| address(view.as_ptr(), self.pos))
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Cursor { view: None, pos: 0 }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view {
            None => f.write_str("Cursor(sentinel)"),
            Some(view) => f
                .debug_struct("Cursor")
                .field("pos", &self.pos)
                .field("len", &view.len())
                .finish(),
        }
    }
}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => bad_deref(self.pos, self.view.map(|view| view.len())),
        }
    }
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn at(view: ViewMut<'a, T>, pos: isize) -> Self {
        CursorMut {
            view: Some(view),
            pos,
        }
    }

    #[inline]
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    #[inline]
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Post-increment: steps forward and returns the index the cursor was
    /// at, `None` if that position held no element.
    ///
    /// A copy of the cursor itself would alias its `&mut T`, so only the
    /// position comes back.
    #[inline]
    pub fn post_next(&mut self) -> Option<usize> {
        let before = self.index();
        self.move_next();
        before
    }

    /// Post-decrement: steps back and returns the index the cursor was at.
    #[inline]
    pub fn post_prev(&mut self) -> Option<usize> {
        let before = self.index();
        self.move_prev();
        before
    }

    /// A read-only cursor at the same position, borrowing `self`.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        match &self.view {
            Some(view) => Cursor::at(view.as_view(), self.pos),
            None => Cursor::default(),
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        let view = self.view.as_ref()?;
        view.get(usize::try_from(self.pos).ok()?)
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = usize::try_from(self.pos).ok()?;
        self.view.as_mut()?.get_mut(index)
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.as_cursor().index()
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.view.is_none()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_cursor().as_ptr()
    }
}

impl<T> Default for CursorMut<'_, T> {
    fn default() -> Self {
        CursorMut { view: None, pos: 0 }
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}
impl<T> Eq for CursorMut<'_, T> {}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.as_cursor().address() == other.address()
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        other == self
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.view {
            None => f.write_str("CursorMut(sentinel)"),
            Some(view) => f
                .debug_struct("CursorMut")
                .field("pos", &self.pos)
                .field("len", &view.len())
                .finish(),
        }
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => bad_deref(self.pos, self.view.as_ref().map(|view| view.len())),
        }
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        let pos = self.pos;
        let len = self.view.as_ref().map(|view| view.len());
        match self.get_mut() {
            Some(value) => value,
            None => bad_deref(pos, len),
        }
    }
}
