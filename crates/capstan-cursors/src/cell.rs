// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cell Slice Cursors
//!
//! A writable random access cursor that can coexist with copies of
//! itself. A `&mut [T]` cursor is single-pass by construction because the
//! unique borrow forbids aliasing; routing the slice through `Cell`
//! restores shared mutability, so many cursors can point into the same
//! storage, write through it, and swap elements between positions. Reads
//! are value-returning (`Cell` cannot lend a borrow of its interior),
//! which also makes this the canonical client of the proxy reference.

use capstan_core::cursor::capability::{
    BidiSteppable, Cursor, IndirectlyMovable, IndirectlySwappable, MultiPass, RandomSteppable,
    Readable, Sentineled, SizedSentineled, Steppable, Writable,
};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::range::CursorRange;
use std::cell::Cell;

/// A random access, writable cursor over a slice of cells.
///
/// # Examples
///
/// ```rust
/// use capstan_core::iter::facade::BasicIterator;
/// use capstan_cursors::cell::CellSliceCursor;
/// use std::cell::Cell;
///
/// let mut data = [1, 2, 3];
/// let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
///
/// let mut it = BasicIterator::new(CellSliceCursor::begin(cells));
/// it.proxy().set(10);
/// assert_eq!(it.get(), 10);
///
/// drop(it);
/// assert_eq!(data, [10, 2, 3]);
/// ```
pub struct CellSliceCursor<'a, T> {
    cells: &'a [Cell<T>],
    index: usize,
}

impl<'a, T> CellSliceCursor<'a, T> {
    /// Positions a cursor at the first element of `cells`.
    #[inline]
    pub fn begin(cells: &'a [Cell<T>]) -> Self {
        Self { cells, index: 0 }
    }

    /// Positions a cursor one past the last element of `cells`.
    #[inline]
    pub fn end(cells: &'a [Cell<T>]) -> Self {
        Self {
            cells,
            index: cells.len(),
        }
    }

    /// Returns the current offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    #[inline]
    fn cell(&self) -> &'a Cell<T> {
        let cells: &'a [Cell<T>] = self.cells;
        &cells[self.index]
    }
}

/// A half-open range over a whole cell slice.
#[inline]
pub fn cell_range<'a, T>(
    cells: &'a [Cell<T>],
) -> CursorRange<CellSliceCursor<'a, T>, CellSliceCursor<'a, T>> {
    CursorRange::new(CellSliceCursor::begin(cells), CellSliceCursor::end(cells))
}

impl<'a, T> Clone for CellSliceCursor<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for CellSliceCursor<'a, T> {}

impl<'a, T> Default for CellSliceCursor<'a, T> {
    #[inline]
    fn default() -> Self {
        Self {
            cells: &[],
            index: 0,
        }
    }
}

impl<'a, T> std::fmt::Debug for CellSliceCursor<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellSliceCursor")
            .field("index", &self.index)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<'a, T> Cursor for CellSliceCursor<'a, T> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<'a, T: Copy> Readable for CellSliceCursor<'a, T> {
    type Value = T;
    type Reference = T;

    #[inline]
    fn read(&self) -> T {
        self.cell().get()
    }
}

impl<'a, T> Writable<T> for CellSliceCursor<'a, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.cell().set(value);
    }
}

impl<'a, T> Steppable for CellSliceCursor<'a, T> {
    #[inline]
    fn next(&mut self) {
        debug_assert!(
            self.index < self.cells.len(),
            "CellSliceCursor: stepped past the end of the slice"
        );
        self.index += 1;
    }
}

impl<'a, T> BidiSteppable for CellSliceCursor<'a, T> {
    #[inline]
    fn prev(&mut self) {
        debug_assert!(self.index > 0, "CellSliceCursor: stepped before the slice");
        self.index -= 1;
    }
}

impl<'a, T> RandomSteppable for CellSliceCursor<'a, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        let target = self.index as isize + n;
        debug_assert!(
            target >= 0 && target as usize <= self.cells.len(),
            "CellSliceCursor: advanced outside the slice"
        );
        self.index = target as usize;
    }
}

impl<'a, T> Sentineled<CellSliceCursor<'a, T>> for CellSliceCursor<'a, T> {
    #[inline]
    fn equal(&self, other: &CellSliceCursor<'a, T>) -> bool {
        self.index == other.index && self.cells.as_ptr() == other.cells.as_ptr()
    }

    #[inline]
    fn steps_hint(&self, other: &CellSliceCursor<'a, T>) -> (usize, Option<usize>) {
        let n = other.index.saturating_sub(self.index);
        (n, Some(n))
    }
}

impl<'a, T> SizedSentineled<CellSliceCursor<'a, T>> for CellSliceCursor<'a, T> {
    #[inline]
    fn distance_to(&self, other: &CellSliceCursor<'a, T>) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<'a, T> MultiPass for CellSliceCursor<'a, T> {}

impl<'a, T: Copy> IndirectlyMovable for CellSliceCursor<'a, T> {
    #[inline]
    fn indirect_move(&mut self) -> T {
        self.read()
    }
}

impl<'a, T> IndirectlySwappable for CellSliceCursor<'a, T> {
    #[inline]
    fn indirect_swap(&mut self, other: &mut Self) {
        self.cell().swap(other.cell());
    }
}

impl<'a, T: Copy> Categorized for CellSliceCursor<'a, T> {
    const CATEGORY: Category = Category::RandomAccess;
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::tier::require_random_access;
    use capstan_core::iter::facade::BasicIterator;

    fn cells_of(data: &mut [i32]) -> &[Cell<i32>] {
        Cell::from_mut(data).as_slice_of_cells()
    }

    #[test]
    fn test_random_access_tier_not_contiguous() {
        // Value-returning reads keep this off the contiguous tier.
        require_random_access::<CellSliceCursor<'_, i32>>();
        assert_eq!(CellSliceCursor::<'_, i32>::CATEGORY, Category::RandomAccess);
    }

    #[test]
    fn test_proxy_read_write_round_trip() {
        let mut data = [0, 0, 0];
        let cells = cells_of(&mut data);
        let mut it = BasicIterator::new(CellSliceCursor::begin(cells));

        it.proxy().set(41);
        assert_eq!(it.proxy().get(), 41);
        assert_eq!(it.value(), 41);
    }

    #[test]
    fn test_aliasing_cursors_observe_writes() {
        let mut data = [1, 2, 3];
        let cells = cells_of(&mut data);
        let mut writer = BasicIterator::new(CellSliceCursor::begin(cells));
        let reader = BasicIterator::new(CellSliceCursor::begin(cells));

        writer.put(99);
        // Both iterators point into the same storage.
        assert_eq!(reader.get(), 99);
    }

    #[test]
    fn test_swap_between_positions() {
        let mut data = [1, 2, 3, 4];
        let cells = cells_of(&mut data);
        let mut first = BasicIterator::new(CellSliceCursor::begin(cells));
        let mut last = BasicIterator::new(CellSliceCursor::begin(cells)) + 3;

        first.swap_with(&mut last);
        drop((first, last));
        assert_eq!(data, [4, 2, 3, 1]);
    }

    #[test]
    fn test_arithmetic_and_indexing() {
        let mut data = [10, 11, 12, 13];
        let cells = cells_of(&mut data);
        let it = BasicIterator::new(CellSliceCursor::begin(cells));
        let end = BasicIterator::new(CellSliceCursor::end(cells));

        assert_eq!(it.at(2), 12);
        assert_eq!((it + 2).get(), it.at(2));
        assert_eq!(end - it, 4);
    }

    #[test]
    fn test_range_collects_values_by_copy() {
        let mut data = [5, 6, 7];
        let cells = cells_of(&mut data);
        let collected: Vec<i32> = cell_range(cells).collect();
        assert_eq!(collected, vec![5, 6, 7]);
        assert_eq!(cell_range(cells).len(), 3);
    }

    #[test]
    fn test_reverse_with_writes() {
        // Reverse a sequence with two cursors closing in on each other.
        let mut data = [1, 2, 3, 4, 5];
        let cells = cells_of(&mut data);
        let mut lo = BasicIterator::new(CellSliceCursor::begin(cells));
        let mut hi = BasicIterator::new(CellSliceCursor::end(cells));

        while lo != hi {
            hi.step_back();
            if lo == hi {
                break;
            }
            lo.swap_with(&mut hi);
            lo.step();
        }
        drop((lo, hi));
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }
}
