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

//! # Slice Cursors
//!
//! The canonical contiguous cursor: a shared slice plus an index. It
//! climbs the entire capability ladder, hands out plain `&'a T` borrows
//! that outlive the cursor itself, and opts into `ContiguousStorage`.
//! `SliceCursorMut` is its single-pass writing sibling over `&mut [T]`;
//! holding the unique borrow makes it impossible to clone, which is
//! exactly what keeps it honest about being single-pass.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::iter::facade::BasicIterator;
//! use capstan_cursors::slice::{slice_range, SliceCursor};
//!
//! let data = [10, 20, 30, 40];
//! let begin = BasicIterator::new(SliceCursor::begin(&data));
//! let end = BasicIterator::new(SliceCursor::end(&data));
//!
//! assert_eq!(begin.get(), &10);
//! assert_eq!(begin.at(2), &30);
//! assert_eq!(end - begin, 4);
//!
//! let doubled: Vec<i32> = slice_range(&data).map(|x| x * 2).collect();
//! assert_eq!(doubled, vec![20, 40, 60, 80]);
//! ```

use capstan_core::cursor::capability::{
    Arrow, ArrowMut, BidiSteppable, ContiguousStorage, Cursor, IndirectlyMovable, MultiPass,
    RandomSteppable, Readable, Sentineled, SizedSentineled, Steppable, Writable,
};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::range::CursorRange;
use capstan_core::iter::sentinel::DefaultSentinel;

/// A contiguous-tier cursor over a shared slice.
///
/// Positions range from the first element to one past the last; reading
/// or stepping outside that window is a precondition violation. Reads
/// return `&'a T` with the slice's lifetime, so elements obtained through
/// the cursor stay borrowable after the cursor is gone.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Positions a cursor at the first element of `slice`.
    #[inline]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Positions a cursor one past the last element of `slice`.
    #[inline]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    /// Returns the current offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }
}

/// A half-open range over a whole slice, ready for `std::iter` use.
///
/// # Examples
///
/// ```rust
/// # use capstan_cursors::slice::slice_range;
/// let data = [1, 2, 3];
/// assert!(slice_range(&data).eq(data.iter()));
/// ```
#[inline]
pub fn slice_range<'a, T>(slice: &'a [T]) -> CursorRange<SliceCursor<'a, T>, SliceCursor<'a, T>> {
    CursorRange::new(SliceCursor::begin(slice), SliceCursor::end(slice))
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> Default for SliceCursor<'a, T> {
    #[inline]
    fn default() -> Self {
        Self {
            slice: &[],
            index: 0,
        }
    }
}

impl<'a, T> std::fmt::Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;

    /// # Panics
    ///
    /// Panics if the cursor is at the past-the-end position.
    #[inline]
    fn read(&self) -> &'a T {
        let slice: &'a [T] = self.slice;
        &slice[self.index]
    }
}

impl<'a, T> Steppable for SliceCursor<'a, T> {
    #[inline]
    fn next(&mut self) {
        debug_assert!(
            self.index < self.slice.len(),
            "SliceCursor: stepped past the end of the slice"
        );
        self.index += 1;
    }
}

impl<'a, T> BidiSteppable for SliceCursor<'a, T> {
    #[inline]
    fn prev(&mut self) {
        debug_assert!(self.index > 0, "SliceCursor: stepped before the slice");
        self.index -= 1;
    }
}

impl<'a, T> RandomSteppable for SliceCursor<'a, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        let target = self.index as isize + n;
        debug_assert!(
            target >= 0 && target as usize <= self.slice.len(),
            "SliceCursor: advanced outside the slice"
        );
        self.index = target as usize;
    }
}

impl<'a, T> Sentineled<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn equal(&self, other: &SliceCursor<'a, T>) -> bool {
        self.index == other.index && self.slice.as_ptr() == other.slice.as_ptr()
    }

    #[inline]
    fn steps_hint(&self, other: &SliceCursor<'a, T>) -> (usize, Option<usize>) {
        let n = other.index.saturating_sub(self.index);
        (n, Some(n))
    }
}

impl<'a, T> SizedSentineled<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn distance_to(&self, other: &SliceCursor<'a, T>) -> isize {
        debug_assert!(
            self.slice.as_ptr() == other.slice.as_ptr(),
            "SliceCursor: measuring distance across unrelated slices"
        );
        other.index as isize - self.index as isize
    }
}

impl<'a, T> MultiPass for SliceCursor<'a, T> {}

impl<'a, T> Arrow for SliceCursor<'a, T> {
    #[inline]
    fn arrow(&self) -> &T {
        self.read()
    }
}

impl<'a, T> ContiguousStorage for SliceCursor<'a, T> {}

impl<'a, T: Clone> IndirectlyMovable for SliceCursor<'a, T> {
    #[inline]
    fn indirect_move(&mut self) -> T {
        self.read().clone()
    }
}

impl<'a, T> Categorized for SliceCursor<'a, T> {
    const CATEGORY: Category = Category::Contiguous;
}

/// A single-pass writing cursor over a mutable slice.
///
/// Holds the unique borrow of its storage, so it cannot be cloned and
/// never reaches the forward tier. Compares against
/// [`DefaultSentinel`] when the slice is exhausted.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    index: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Positions a cursor at the first element of `slice`.
    #[inline]
    pub fn begin(slice: &'a mut [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Returns the current offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> std::fmt::Debug for SliceCursorMut<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursorMut<'a, T> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<'a, T: Clone> Readable for SliceCursorMut<'a, T> {
    type Value = T;
    type Reference = T;

    #[inline]
    fn read(&self) -> T {
        self.slice[self.index].clone()
    }
}

impl<'a, T> Writable<T> for SliceCursorMut<'a, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.slice[self.index] = value;
    }
}

impl<'a, T> Steppable for SliceCursorMut<'a, T> {
    #[inline]
    fn next(&mut self) {
        debug_assert!(
            self.index < self.slice.len(),
            "SliceCursorMut: stepped past the end of the slice"
        );
        self.index += 1;
    }
}

impl<'a, T: Clone> Arrow for SliceCursorMut<'a, T> {
    #[inline]
    fn arrow(&self) -> &T {
        &self.slice[self.index]
    }
}

impl<'a, T: Clone> ArrowMut for SliceCursorMut<'a, T> {
    #[inline]
    fn arrow_mut(&mut self) -> &mut T {
        &mut self.slice[self.index]
    }
}

impl<'a, T> Sentineled<DefaultSentinel> for SliceCursorMut<'a, T> {
    #[inline]
    fn equal(&self, _: &DefaultSentinel) -> bool {
        self.index >= self.slice.len()
    }

    #[inline]
    fn steps_hint(&self, _: &DefaultSentinel) -> (usize, Option<usize>) {
        let n = self.slice.len().saturating_sub(self.index);
        (n, Some(n))
    }
}

impl<'a, T> SizedSentineled<DefaultSentinel> for SliceCursorMut<'a, T> {
    #[inline]
    fn distance_to(&self, _: &DefaultSentinel) -> isize {
        (self.slice.len() - self.index) as isize
    }
}

impl<'a, T: Clone> Categorized for SliceCursorMut<'a, T> {
    const CATEGORY: Category = Category::Input;
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::tier::{require_contiguous, require_input};
    use capstan_core::iter::facade::BasicIterator;

    #[test]
    fn test_contiguous_scenario() {
        let data = [0, 1, 2, 3];
        let begin = BasicIterator::new(SliceCursor::begin(&data));
        let end = BasicIterator::new(SliceCursor::end(&data));

        require_contiguous::<SliceCursor<'_, i32>>();
        assert_eq!(begin.category(), Category::Contiguous);

        assert_eq!(*begin.get(), 0);
        assert_eq!(*begin.at(2), 2);
        assert_eq!(end - begin, 4);
        assert!(begin + 4 == end);

        let mut walker = end;
        walker.step_back();
        walker.step_back();
        walker.step_back();
        walker.step_back();
        assert_eq!(walker, begin);
    }

    #[test]
    fn test_round_trip_construct_compare() {
        let data = [7, 8];
        let a = BasicIterator::new(SliceCursor::begin(&data));
        let b = BasicIterator::new(SliceCursor::begin(&data));
        assert_eq!(a, b);
        assert!(!(a != b));

        let defaulted_a = BasicIterator::<SliceCursor<'_, i32>>::default();
        let defaulted_b = BasicIterator::<SliceCursor<'_, i32>>::default();
        assert_eq!(defaulted_a, defaulted_b);
    }

    #[test]
    fn test_deref_and_storage_ptr() {
        let data = [5, 6, 7];
        let it = BasicIterator::new(SliceCursor::begin(&data));
        // Deref reaches through to the element.
        assert_eq!(*it, 5);
        assert_eq!(it.cursor().storage_ptr(), data.as_ptr());
    }

    #[test]
    fn test_reference_outlives_cursor() {
        let data = [String::from("keep")];
        let borrowed;
        {
            let it = BasicIterator::new(SliceCursor::begin(&data));
            borrowed = it.get();
        }
        // The borrow carries the slice's lifetime, not the iterator's.
        assert_eq!(borrowed, "keep");
    }

    #[test]
    fn test_range_matches_native_iteration() {
        let data = [1, 4, 9, 16];
        assert!(slice_range(&data).eq(data.iter()));
        assert_eq!(slice_range(&data).len(), 4);
        assert_eq!(slice_range(&data).size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_range_reverses() {
        let data = [1, 2, 3];
        let reversed: Vec<&i32> = slice_range(&data).rev().collect();
        assert_eq!(reversed, vec![&3, &2, &1]);
    }

    #[test]
    fn test_ordering() {
        let data = [0; 5];
        let begin = BasicIterator::new(SliceCursor::begin(&data));
        let end = BasicIterator::new(SliceCursor::end(&data));
        assert!(begin < end);
        assert!(end > begin);
        assert!(begin <= begin);
        assert!(begin >= begin);
    }

    #[test]
    fn test_take_value_clones_element() {
        let data = [String::from("x")];
        let mut it = BasicIterator::new(SliceCursor::begin(&data));
        assert_eq!(it.take_value(), "x");
        // The source is untouched.
        assert_eq!(data[0], "x");
    }

    #[test]
    fn test_mut_cursor_writes_in_place() {
        let mut data = [0; 4];
        let mut it = BasicIterator::new(SliceCursorMut::begin(&mut data));
        let mut value = 1;
        while !it.reached(&DefaultSentinel) {
            it.put(value).step();
            value += 1;
        }
        assert_eq!(data, [1, 2, 3, 4]);
    }

    #[test]
    fn test_mut_cursor_stays_input_tier() {
        require_input::<SliceCursorMut<'_, u8>>();
        assert_eq!(SliceCursorMut::<'_, u8>::CATEGORY, Category::Input);
    }

    #[test]
    fn test_mut_cursor_arrow_mut() {
        let mut data = [10, 20];
        let mut it = BasicIterator::new(SliceCursorMut::begin(&mut data));
        *it += 5;
        it.step();
        *it += 5;
        drop(it);
        assert_eq!(data, [15, 25]);
    }

    #[test]
    fn test_mut_cursor_remaining() {
        let mut data = [0; 3];
        let mut it = BasicIterator::new(SliceCursorMut::begin(&mut data));
        assert_eq!(it.remaining(&DefaultSentinel), 3);
        it.step();
        assert_eq!(it.remaining(&DefaultSentinel), 2);
    }
}
