//! End-to-end tests for views over externally owned storage.
//!
//! Backing buffers come from arrays, `Vec`s and a `bumpalo` arena, so the
//! views never own what they look at.

use bumpalo::Bump;
use ml_view::{Cursor, View, ViewError, ViewMut};
use pretty_assertions::assert_eq;

fn forward<T: Copy>(view: View<'_, T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cursor = view.begin();
    while cursor != view.end() {
        out.push(*cursor);
        cursor.move_next();
    }
    out
}

fn reverse<T: Copy>(view: View<'_, T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cursor = view.rbegin();
    while cursor != view.rend() {
        out.push(*cursor.post_prev());
    }
    out
}

// ===================
// Scenarios
// ===================

#[test]
fn four_element_array() {
    let storage = [10, 20, 30, 40];
    let view = unsafe { View::from_raw_parts(storage.as_ptr(), 4) };

    assert_eq!(view.len(), 4);
    assert_eq!(*view.front(), 10);
    assert_eq!(*view.back(), 40);
    assert_eq!(view[2], 30);
    assert_eq!(forward(view), vec![10, 20, 30, 40]);
    assert_eq!(reverse(view), vec![40, 30, 20, 10]);
}

#[test]
fn zero_length_from_equal_bounds() {
    let storage = [10, 20, 30, 40];
    let start = storage.as_ptr();
    let view = unsafe { View::from_raw_bounds(start, start) };

    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert_eq!(view.begin(), view.end());
    assert_eq!(forward(view), Vec::<i32>::new());
    assert_eq!(reverse(view), Vec::<i32>::new());
}

#[test]
fn default_cursor_is_distinguishable() {
    let storage = [1, 2, 3];
    let view = View::new(&storage);
    let sentinel = Cursor::default();

    assert!(sentinel != view.begin());
    assert!(sentinel != view.end());
    assert!(view.begin() != sentinel);
}

// ===================
// Properties over many shapes
// ===================

#[test]
fn sizes_for_every_subrange() {
    let storage: Vec<u64> = (0..12).map(|i| i * i).collect();
    let base = storage.as_ptr();

    for start in 0..=storage.len() {
        for end in start..=storage.len() {
            let by_len = unsafe { View::from_raw_parts(base.add(start), end - start) };
            let by_bounds = unsafe { View::from_raw_bounds(base.add(start), base.add(end)) };
            let by_range = View::from_range(&storage, start..end).unwrap();

            for view in [by_len, by_bounds, by_range] {
                assert_eq!(view.len(), end - start);
                assert_eq!(view.is_empty(), view.len() == 0);
                assert_eq!(view.is_empty(), view.begin() == view.end());
                assert_eq!(view.iter().count(), view.len());
                assert_eq!(&*view, &storage[start..end]);

                let indexed: Vec<u64> = (0..view.len()).map(|i| view[i]).collect();
                assert_eq!(forward(view), indexed);

                let mut reversed = forward(view);
                reversed.reverse();
                assert_eq!(reverse(view), reversed);
                assert_eq!(view.rev_iter().copied().collect::<Vec<_>>(), reversed);
            }
        }
    }
}

#[test]
fn range_errors() {
    let storage = vec![1, 2, 3];
    assert_eq!(
        View::from_range(&storage, 0..4).unwrap_err(),
        ViewError::OutOfBounds { end: 4, len: 3 }
    );

    let mut storage = storage;
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = 3..2;
    assert_eq!(
        ViewMut::from_range(&mut storage, inverted).unwrap_err(),
        ViewError::InvertedRange { start: 3, end: 2 }
    );
}

// ===================
// Aliasing
// ===================

#[test]
fn writes_visible_to_later_views() {
    let mut storage = vec![1, 2, 3, 4, 5];

    let mut middle = ViewMut::from_range(&mut storage, 1..4).unwrap();
    middle[0] = 20;
    let mut cursor = middle.end_mut();
    cursor.move_prev();
    *cursor = 40;

    let whole = View::new(&storage);
    let tail = View::from_range(&storage, 3..5).unwrap();
    assert_eq!(forward(whole), vec![1, 20, 3, 40, 5]);
    assert_eq!(*tail.front(), 40);

    // Cursors from different views of the same storage agree on positions.
    let mut cursor = whole.begin();
    cursor.move_next().move_next().move_next();
    assert_eq!(cursor, tail.begin());
}

// ===================
// Arena-backed storage
// ===================

#[test]
fn views_over_arena_allocations() {
    let arena = Bump::new();
    let numbers: &mut [i32] = arena.alloc_slice_copy(&[1, 2, 3, 4, 5, 6]);

    {
        let mut evens = ViewMut::from_range(numbers, 1..6).unwrap();
        for value in evens.iter_mut().step_by(2) {
            *value = -*value;
        }
    }

    let numbers: &[i32] = numbers;
    let view = View::new(numbers);
    assert_eq!(forward(view), vec![1, -2, 3, -4, 5, -6]);

    let words = arena.alloc_slice_copy(&["alpha", "beta", "gamma"]);
    let view = View::new(words);
    assert_eq!(view.rev_iter().copied().collect::<Vec<_>>(), ["gamma", "beta", "alpha"]);
    assert_eq!(view.iter().map(|w| w.len()).sum::<usize>(), 14);
}

#[test]
fn element_references_outlive_the_view() {
    let arena = Bump::new();
    let first = {
        let storage = arena.alloc_slice_copy(&[3.5f64, 1.25]);
        let view = View::new(storage);
        view.front()
    };
    assert_eq!(*first, 3.5);
}
