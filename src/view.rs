use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut, Index, IndexMut, Range},
    ptr::NonNull,
    slice,
};

use crate::{
    cursor::{Cursor, CursorMut},
    error::{Result, check_range},
    iter::{Iter, IterMut, RevIter},
};

/// A shared, non-owning view over `[first, last)` of some borrowed storage.
///
/// `View` is two words (`first` plus a length) and `Copy`. It hands out
/// references with the storage lifetime `'a`, so elements read through a
/// view outlive the view itself.
///
/// See [crate-level docs](crate) for examples.
pub struct View<'a, T> {
    first: NonNull<T>,
    len: usize,
    phantom: PhantomData<&'a [T]>,
}

/// An exclusive, non-owning view over `[first, last)` of some borrowed
/// storage.
///
/// Same layout as [`View`], but writes through it reach the backing
/// storage. Not `Copy`: it stands in for `&'a mut [T]`.
pub struct ViewMut<'a, T> {
    first: NonNull<T>,
    len: usize,
    phantom: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(View<u8>, [usize; 2]);
static_assertions::assert_eq_size!(View<u128>, [usize; 2]);
static_assertions::assert_eq_size!(ViewMut<u64>, [usize; 2]);
static_assertions::assert_eq_size!(Option<View<u64>>, [usize; 2]);
static_assertions::assert_impl_all!(View<'static, i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(ViewMut<'static, i32>: Clone);
static_assertions::assert_not_impl_any!(View<'static, core::cell::Cell<i32>>: Send, Sync);

/// Element count of `[start, end)`, zero for zero-sized `T`.
///
/// # Safety
///
/// `start` and `end` must belong to the same allocation with `start <= end`.
unsafe fn bounds_len<T>(start: *const T, end: *const T) -> usize {
    if size_of::<T>() == 0 {
        debug_assert_eq!(start, end, "zero-sized bounds must coincide");
        return 0;
    }
    // SAFETY: both pointers are in the same allocation per the contract.
    let distance = unsafe { end.offset_from(start) };
    debug_assert!(distance >= 0, "view bounds are inverted");
    distance as usize
}

impl<'a, T> View<'a, T> {
    /// Views the whole of `storage`.
    pub fn new(storage: &'a [T]) -> Self {
        View {
            first: NonNull::from(storage).cast(),
            len: storage.len(),
            phantom: PhantomData,
        }
    }

    /// An empty view that borrows nothing.
    pub const fn empty() -> Self {
        View {
            first: NonNull::dangling(),
            len: 0,
            phantom: PhantomData,
        }
    }

    /// Views `storage[range]`, rejecting ranges that are inverted or run past
    /// the end of `storage`.
    ///
    /// # Example
    ///
    /// ```
    /// use ml_view::{View, ViewError};
    ///
    /// let storage = [10, 20, 30, 40, 50];
    /// let view = View::from_range(&storage, 1..4).unwrap();
    /// assert_eq!(&*view, &[20, 30, 40]);
    ///
    /// assert_eq!(
    ///     View::from_range(&storage, 2..9).unwrap_err(),
    ///     ViewError::OutOfBounds { end: 9, len: 5 },
    /// );
    /// ```
    pub fn from_range(storage: &'a [T], range: Range<usize>) -> Result<Self> {
        check_range(&range, storage.len())?;
        Ok(Self::new(&storage[range]))
    }

    /// Views `len` elements starting at `start`.
    ///
    /// # Safety
    ///
    /// Same contract as [`slice::from_raw_parts`]: `start` must be non-null,
    /// aligned, and valid for reads of `len` elements for all of `'a`, and the
    /// elements must not be mutated through any other path while the view (or
    /// anything derived from it) is alive.
    pub unsafe fn from_raw_parts(start: *const T, len: usize) -> Self {
        tracing::trace!(len, "View from raw parts");
        // SAFETY: forwarded to the caller.
        Self::new(unsafe { slice::from_raw_parts(start, len) })
    }

    /// Views the elements in `[start, end)`.
    ///
    /// # Safety
    ///
    /// `start` and `end` must belong to the same allocation with
    /// `start <= end`, and `[start, end)` must satisfy the contract of
    /// [`View::from_raw_parts`].
    ///
    /// For zero-sized `T` every address is the same, so the bounds carry no
    /// length and the view is empty.
    pub unsafe fn from_raw_bounds(start: *const T, end: *const T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(start, bounds_len(start, end)) }
    }

    /// Number of elements, `last - first`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True iff `first == last`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.first.as_ptr()
    }

    /// The viewed elements as a plain slice with the storage lifetime.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: `first` and `len` came from a valid `&'a [T]` (or from a raw
        // constructor whose caller vouched for the same thing).
        unsafe { slice::from_raw_parts(self.first.as_ptr(), self.len) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for view of length {}",
            self.len
        );
        // SAFETY: in bounds per the contract.
        unsafe { &*self.first.as_ptr().add(index) }
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty. See [`View::first`] for a non-panicking
    /// version.
    #[track_caller]
    pub fn front(&self) -> &'a T {
        match self.first() {
            Some(value) => value,
            None => panic!("front() called on an empty view"),
        }
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn back(&self) -> &'a T {
        match self.last() {
            Some(value) => value,
            None => panic!("back() called on an empty view"),
        }
    }

    pub fn first(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.as_slice().last()
    }

    /// Cursor at `first`.
    pub fn begin(&self) -> Cursor<'a, T> {
        Cursor::at(*self, 0)
    }

    /// Cursor at `last`, one past the final element.
    pub fn end(&self) -> Cursor<'a, T> {
        Cursor::at(*self, self.len as isize)
    }

    /// Cursor at `last - 1`, the start of reverse traversal.
    ///
    /// Reverse traversal steps this cursor with
    /// [`move_prev`](Cursor::move_prev) until it equals [`rend`](Self::rend).
    /// For an empty view `rbegin() == rend()`.
    pub fn rbegin(&self) -> Cursor<'a, T> {
        Cursor::at(*self, self.len as isize - 1)
    }

    /// Cursor at `first - 1`, one before the first element.
    pub fn rend(&self) -> Cursor<'a, T> {
        Cursor::at(*self, -1)
    }

    /// Iterates from [`begin`](Self::begin) to [`end`](Self::end).
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(*self)
    }

    /// Iterates from [`rbegin`](Self::rbegin) to [`rend`](Self::rend).
    pub fn rev_iter(&self) -> RevIter<'a, T> {
        RevIter::new(*self)
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for View<'_, T> {}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> Deref for View<'_, T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for View<'_, T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(storage: &'a [T]) -> Self {
        Self::new(storage)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(storage: &'a [T; N]) -> Self {
        Self::new(storage)
    }
}

impl<'a, T> From<ViewMut<'a, T>> for View<'a, T> {
    fn from(view: ViewMut<'a, T>) -> Self {
        view.into_view()
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> ViewMut<'a, T> {
    /// Views the whole of `storage` mutably.
    pub fn new(storage: &'a mut [T]) -> Self {
        ViewMut {
            len: storage.len(),
            first: NonNull::from(storage).cast(),
            phantom: PhantomData,
        }
    }

    /// Views `storage[range]` mutably. See [`View::from_range`].
    pub fn from_range(storage: &'a mut [T], range: Range<usize>) -> Result<Self> {
        check_range(&range, storage.len())?;
        Ok(Self::new(&mut storage[range]))
    }

    /// Views `len` elements starting at `start` mutably.
    ///
    /// # Safety
    ///
    /// Same contract as [`slice::from_raw_parts_mut`]: `start` must be
    /// non-null, aligned, valid for reads and writes of `len` elements for
    /// all of `'a`, and not accessed through any other path while the view
    /// (or anything derived from it) is alive.
    pub unsafe fn from_raw_parts(start: *mut T, len: usize) -> Self {
        tracing::trace!(len, "ViewMut from raw parts");
        // SAFETY: forwarded to the caller.
        Self::new(unsafe { slice::from_raw_parts_mut(start, len) })
    }

    /// Views the elements in `[start, end)` mutably.
    ///
    /// # Safety
    ///
    /// `start` and `end` must belong to the same allocation with
    /// `start <= end`, and `[start, end)` must satisfy the contract of
    /// [`ViewMut::from_raw_parts`].
    ///
    /// For zero-sized `T` every address is the same, so the bounds carry no
    /// length and the view is empty.
    pub unsafe fn from_raw_bounds(start: *mut T, end: *mut T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(start, bounds_len(start, end)) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.first.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.first.as_ptr()
    }

    /// A shared view of the same range, borrowing `self`.
    #[inline]
    pub fn as_view(&self) -> View<'_, T> {
        View {
            first: self.first,
            len: self.len,
            phantom: PhantomData,
        }
    }

    /// Converts into a shared view for the rest of `'a`.
    #[inline]
    pub fn into_view(self) -> View<'a, T> {
        View {
            first: self.first,
            len: self.len,
            phantom: PhantomData,
        }
    }

    /// A shorter-lived mutable view of the same range.
    #[inline]
    pub fn reborrow(&mut self) -> ViewMut<'_, T> {
        ViewMut {
            first: self.first,
            len: self.len,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `self` is the only path to the range while borrowed mutably.
        unsafe { slice::from_raw_parts_mut(self.first.as_ptr(), self.len) }
    }

    /// The viewed elements as a mutable slice with the storage lifetime.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        // SAFETY: consuming `self` hands its exclusive access to the slice.
        unsafe { slice::from_raw_parts_mut(self.first.as_ptr(), self.len) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_view().get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for view of length {}",
            self.len
        );
        // SAFETY: in bounds per the contract, exclusive through `&mut self`.
        unsafe { &mut *self.first.as_ptr().add(index) }
    }

    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(value) => value,
            None => panic!("front() called on an empty view"),
        }
    }

    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(value) => value,
            None => panic!("back() called on an empty view"),
        }
    }

    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(value) => value,
            None => panic!("front_mut() called on an empty view"),
        }
    }

    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(value) => value,
            None => panic!("back_mut() called on an empty view"),
        }
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        self.as_view().begin()
    }

    pub fn end(&self) -> Cursor<'_, T> {
        self.as_view().end()
    }

    pub fn rbegin(&self) -> Cursor<'_, T> {
        self.as_view().rbegin()
    }

    pub fn rend(&self) -> Cursor<'_, T> {
        self.as_view().rend()
    }

    /// Mutable cursor at `first`.
    ///
    /// # Example
    ///
    /// ```
    /// use ml_view::ViewMut;
    ///
    /// let mut storage = [1, 2, 3];
    /// let mut view = ViewMut::new(&mut storage);
    /// let mut cursor = view.begin_mut();
    /// while let Some(value) = cursor.get_mut() {
    ///     *value *= 10;
    ///     cursor.move_next();
    /// }
    /// assert_eq!(storage, [10, 20, 30]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::at(self.reborrow(), 0)
    }

    /// Mutable cursor at `last`.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len as isize;
        CursorMut::at(self.reborrow(), len)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_view().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    pub fn rev_iter(&self) -> RevIter<'_, T> {
        self.as_view().rev_iter()
    }
}

impl<T> Default for ViewMut<'_, T> {
    fn default() -> Self {
        ViewMut {
            first: NonNull::dangling(),
            len: 0,
            phantom: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> Deref for ViewMut<'_, T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ViewMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for ViewMut<'_, T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for ViewMut<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Index<usize> for ViewMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ViewMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T> {
    fn from(storage: &'a mut [T]) -> Self {
        Self::new(storage)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ViewMut<'a, T> {
    fn from(storage: &'a mut [T; N]) -> Self {
        Self::new(storage)
    }
}

impl<'a, T> IntoIterator for ViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut::new(self.into_slice())
    }
}

impl<'a, T> IntoIterator for &'a mut ViewMut<'_, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a ViewMut<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Important: use correct semantics for references.
unsafe impl<T: Sync> Send for View<'_, T> {}
unsafe impl<T: Sync> Sync for View<'_, T> {}
unsafe impl<T: Send> Send for ViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for ViewMut<'_, T> {}
