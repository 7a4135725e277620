// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned, ordered list of items and its single mutating primitive.
//!
//! ## Semantics
//!
//! [`OrderedList::move_item`] removes one element and reinserts it elsewhere; it never swaps.
//! Every reorder is expressed as a sequence of these single-element moves, so the length never
//! changes and the relative order of all untouched elements is preserved.
//!
//! ```
//! use understory_reorder::list::OrderedList;
//! let mut l = OrderedList::new(vec!["a", "b", "c", "d"]);
//! l.move_item(0, 2);
//! assert_eq!(l.as_slice(), &["b", "c", "a", "d"]);
//! l.move_item(3, 0);
//! assert_eq!(l.as_slice(), &["d", "b", "c", "a"]);
//! ```

use alloc::vec::Vec;

/// Why a [`OrderedList::try_move_item`] call was refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MoveError {
    /// One of the indices is not a valid slot.
    #[error("slot {index} is out of bounds for a list of length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// Source and destination are the same slot.
    #[error("cannot move slot {0} onto itself")]
    SameSlot(usize),
}

/// An ordered sequence of opaque items.
///
/// Read access is unrestricted; mutation goes only through [`move_item`](Self::move_item)
/// (or its fallible twin [`try_move_item`](Self::try_move_item)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Create a list from the given items, in order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `slot`, if any.
    pub fn item_at(&self, slot: usize) -> Option<&T> {
        self.items.get(slot)
    }

    /// Iterate items in slot order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Read-only view of the items in slot order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list and return its items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Move the element at `from` to `to`, shifting the elements in between by one.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds or if `from == to`. Callers that cannot
    /// guarantee this should use [`try_move_item`](Self::try_move_item).
    pub fn move_item(&mut self, from: usize, to: usize) {
        if let Err(err) = self.try_move_item(from, to) {
            panic!("move_item precondition violated: {err}");
        }
    }

    /// Move the element at `from` to `to`, or report why that is not allowed.
    ///
    /// On error the list is left untouched.
    pub fn try_move_item(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(MoveError::OutOfBounds { index, len });
            }
        }
        if from == to {
            return Err(MoveError::SameSlot(from));
        }
        // Equivalent to remove(from) followed by insert(to), without reallocating.
        if from < to {
            self.items[from..=to].rotate_left(1);
        } else {
            self.items[to..=from].rotate_right(1);
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
