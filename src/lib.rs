//! Non-owning views over contiguous storage.
//!
//! A [`View`] is a bounds pair `[first, last)` over elements owned by someone
//! else: an array, a `Vec`, an arena allocation, a subrange of a larger
//! buffer. It never allocates, copies or frees; the lifetime `'a` ties it to
//! the storage it borrows.
//!
//! ```text
//! storage:  [ 10 | 20 | 30 | 40 | 50 ]
//!                  ▲              ▲
//!                first          last
//!
//! View::from_range(&storage, 1..4)  ==  [20, 30, 40]
//! ```
//!
//! Traversal goes through cursors: [`View::begin`] and [`View::end`] for
//! forward order, [`View::rbegin`] and [`View::rend`] for reverse order.
//! Cursors compare by address, so two cursors into the same storage are
//! equal exactly when they point at the same element, regardless of which
//! view produced them.
//!
//! # Example
//!
//! ```
//! use ml_view::View;
//!
//! let storage = [10, 20, 30, 40];
//! let view = View::new(&storage);
//!
//! assert_eq!(view.len(), 4);
//! assert_eq!(*view.front(), 10);
//! assert_eq!(*view.back(), 40);
//! assert_eq!(view[2], 30);
//!
//! let forward: Vec<i32> = view.iter().copied().collect();
//! assert_eq!(forward, [10, 20, 30, 40]);
//!
//! let reverse: Vec<i32> = view.rev_iter().copied().collect();
//! assert_eq!(reverse, [40, 30, 20, 10]);
//! ```
//!
//! # Mutable views
//!
//! [`ViewMut`] is the exclusive counterpart. Writes land directly in the
//! backing storage and are visible to every later view over it.
//!
//! ```
//! use ml_view::ViewMut;
//!
//! let mut storage = [1, 2, 3];
//! let mut view = ViewMut::new(&mut storage);
//! view[0] = 10;
//! *view.back_mut() = 30;
//! assert_eq!(storage, [10, 2, 30]);
//! ```
//!
//! # Checked and unchecked access
//!
//! | Access                      | Out of range      |
//! |-----------------------------|-------------------|
//! | `view[i]`, `front`, `back`  | panics            |
//! | `get`, `first`, `last`      | `None`            |
//! | `*cursor`                   | panics            |
//! | `cursor.get()`              | `None`            |
//! | `get_unchecked` (`unsafe`)  | undefined         |
//!
//! Cursor movement is never checked: a cursor may step anywhere, and only
//! dereferencing it is validated against the view that produced it.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod cursor;
mod error;
mod iter;
mod view;

pub use cursor::{Cursor, CursorMut};
pub use error::{Result, ViewError};
pub use iter::{Iter, IterMut, RevIter};
pub use view::{View, ViewMut};
