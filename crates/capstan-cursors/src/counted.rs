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

//! # Counted Cursors
//!
//! Wraps any cursor with a countdown, turning "the next `n` elements"
//! into a first-class position. The wrapper forwards every capability of
//! the inner cursor unchanged and adds two sentinels of its own: another
//! counted cursor (compared by count) and [`DefaultSentinel`] (reached
//! when the countdown hits zero). Because the count is part of the
//! position, a counted cursor over a plain input stream still knows
//! exactly how far it is from the end.

use capstan_core::cursor::capability::{
    Arrow, BidiSteppable, Cursor, IndirectlyMovable, IndirectlySwappable, MultiPass,
    RandomSteppable, Readable, Sentineled, SizedSentineled, Steppable, Writable,
};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::sentinel::DefaultSentinel;
use num_traits::{One, ToPrimitive, Zero};

/// The error returned when constructing a counted cursor from a negative
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCountError;

impl std::fmt::Display for NegativeCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "counted cursor requires a non-negative count")
    }
}

impl std::error::Error for NegativeCountError {}

/// A cursor bundling an inner cursor with the number of steps left.
///
/// # Examples
///
/// ```rust
/// use capstan_core::iter::facade::BasicIterator;
/// use capstan_core::iter::sentinel::DefaultSentinel;
/// use capstan_cursors::counted::CountedCursor;
/// use capstan_cursors::slice::SliceCursor;
///
/// let data = [0, 1, 2, 3];
/// let it = BasicIterator::new(CountedCursor::new(SliceCursor::begin(&data), 4));
///
/// assert_eq!(it.remaining(&DefaultSentinel), 4);
/// assert_eq!(*it.at(2), 2);
/// ```
#[derive(Clone, Default, Debug)]
pub struct CountedCursor<C: Cursor> {
    inner: C,
    count: C::Difference,
}

impl<C: Cursor> CountedCursor<C> {
    /// Bundles `inner` with `count` remaining steps.
    ///
    /// # Panics
    ///
    /// Panics if `count` is negative.
    #[inline]
    pub fn new(inner: C, count: C::Difference) -> Self {
        assert!(
            count >= C::Difference::zero(),
            "CountedCursor: count must be non-negative"
        );
        Self { inner, count }
    }

    /// Bundles `inner` with `count` remaining steps if the count is
    /// non-negative.
    #[inline]
    pub fn try_new(inner: C, count: C::Difference) -> Result<Self, NegativeCountError> {
        if count < C::Difference::zero() {
            Err(NegativeCountError)
        } else {
            Ok(Self { inner, count })
        }
    }

    /// Bundles `inner` with `count` without checking the sign in release
    /// builds.
    #[inline]
    pub fn new_unchecked(inner: C, count: C::Difference) -> Self {
        debug_assert!(
            count >= C::Difference::zero(),
            "CountedCursor: count must be non-negative"
        );
        Self { inner, count }
    }

    /// Borrows the wrapped cursor.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the number of steps left.
    #[inline]
    pub fn count(&self) -> C::Difference {
        self.count
    }

    /// Unwraps into the inner cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for CountedCursor<C> {
    type Difference = C::Difference;
    type Mixin = DefaultMixin<Self>;
}

impl<C: Readable> Readable for CountedCursor<C> {
    type Value = C::Value;
    type Reference = C::Reference;

    #[inline]
    fn read(&self) -> C::Reference {
        self.inner.read()
    }
}

impl<C, T> Writable<T> for CountedCursor<C>
where
    C: Writable<T>,
{
    #[inline]
    fn write(&mut self, value: T) {
        self.inner.write(value);
    }
}

impl<C: Steppable> Steppable for CountedCursor<C> {
    #[inline]
    fn next(&mut self) {
        self.inner.next();
        self.count = self.count - C::Difference::one();
    }
}

impl<C: BidiSteppable> BidiSteppable for CountedCursor<C> {
    #[inline]
    fn prev(&mut self) {
        self.inner.prev();
        self.count = self.count + C::Difference::one();
    }
}

impl<C: RandomSteppable> RandomSteppable for CountedCursor<C> {
    #[inline]
    fn advance(&mut self, n: C::Difference) {
        self.inner.advance(n);
        self.count = self.count - n;
    }
}

impl<C: Cursor> Sentineled<CountedCursor<C>> for CountedCursor<C> {
    #[inline]
    fn equal(&self, other: &CountedCursor<C>) -> bool {
        self.count == other.count
    }

    #[inline]
    fn steps_hint(&self, other: &CountedCursor<C>) -> (usize, Option<usize>) {
        match (self.count - other.count).to_usize() {
            Some(n) => (n, Some(n)),
            None => (0, Some(0)),
        }
    }
}

impl<C: Cursor> SizedSentineled<CountedCursor<C>> for CountedCursor<C> {
    #[inline]
    fn distance_to(&self, other: &CountedCursor<C>) -> C::Difference {
        self.count - other.count
    }
}

impl<C: Cursor> Sentineled<DefaultSentinel> for CountedCursor<C> {
    #[inline]
    fn equal(&self, _: &DefaultSentinel) -> bool {
        self.count.is_zero()
    }

    #[inline]
    fn steps_hint(&self, _: &DefaultSentinel) -> (usize, Option<usize>) {
        match self.count.to_usize() {
            Some(n) => (n, Some(n)),
            None => (0, Some(0)),
        }
    }
}

impl<C: Cursor> SizedSentineled<DefaultSentinel> for CountedCursor<C> {
    #[inline]
    fn distance_to(&self, _: &DefaultSentinel) -> C::Difference {
        self.count
    }
}

impl<C: MultiPass> MultiPass for CountedCursor<C> {}

impl<C: Arrow> Arrow for CountedCursor<C> {
    #[inline]
    fn arrow(&self) -> &C::Value {
        self.inner.arrow()
    }
}

impl<C: IndirectlyMovable> IndirectlyMovable for CountedCursor<C> {
    #[inline]
    fn indirect_move(&mut self) -> C::Value {
        self.inner.indirect_move()
    }
}

impl<C: IndirectlySwappable> IndirectlySwappable for CountedCursor<C> {
    #[inline]
    fn indirect_swap(&mut self, other: &mut Self) {
        self.inner.indirect_swap(&mut other.inner);
    }
}

impl<C: Categorized> Categorized for CountedCursor<C> {
    // Counting caps the tier at random access: the wrapper's reads still
    // go through the inner cursor, but contiguity claims stop here.
    const CATEGORY: Category = C::CATEGORY.weaker(Category::RandomAccess);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::IterCursor;
    use crate::slice::SliceCursor;
    use capstan_core::cursor::tier::{require_input, require_random_access};
    use capstan_core::iter::facade::BasicIterator;
    use capstan_core::iter::range::CursorRange;

    #[test]
    fn test_construction_validates_count() {
        let data = [1, 2];
        assert!(CountedCursor::try_new(SliceCursor::begin(&data), 2).is_ok());
        assert_eq!(
            CountedCursor::try_new(SliceCursor::begin(&data), -1).unwrap_err(),
            NegativeCountError
        );
        assert_eq!(
            format!("{}", NegativeCountError),
            "counted cursor requires a non-negative count"
        );
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_new_panics_on_negative_count() {
        let data = [1, 2];
        CountedCursor::new(SliceCursor::begin(&data), -3);
    }

    #[test]
    fn test_counted_input_scenario() {
        // An input-only base: a counted cursor over a drained iterator.
        let base = IterCursor::new([7, 8, 9, 10].into_iter());
        let mut it = BasicIterator::new(CountedCursor::new(base, 4));

        require_input::<CountedCursor<IterCursor<std::array::IntoIter<i32, 4>>>>();

        assert_eq!(it.remaining(&DefaultSentinel), 4);
        assert_eq!(DefaultSentinel - &it, 4);
        assert!(it != DefaultSentinel);

        let mut seen = Vec::new();
        while !it.reached(&DefaultSentinel) {
            seen.push(it.get());
            it.step();
        }
        assert_eq!(seen, vec![7, 8, 9, 10]);
        assert!(it == DefaultSentinel);
        assert_eq!(DefaultSentinel - &it, 0);
    }

    #[test]
    fn test_counted_random_access() {
        let data = [0, 1, 2, 3];
        let first = BasicIterator::new(CountedCursor::new(SliceCursor::begin(&data), 4));
        let last = BasicIterator::new(CountedCursor::new(SliceCursor::end(&data), 0));

        require_random_access::<CountedCursor<SliceCursor<'_, i32>>>();

        assert_eq!(last.clone() - first.clone(), 4);
        assert_eq!(*first.at(2), 2);
        assert!(first.clone() + 4 == last);
    }

    #[test]
    fn test_category_is_capped() {
        assert_eq!(
            CountedCursor::<SliceCursor<'_, i32>>::CATEGORY,
            Category::RandomAccess
        );
    }

    #[test]
    fn test_counted_range_is_exact_sized() {
        let base = IterCursor::new(std::iter::repeat(5));
        let range = CursorRange::new(CountedCursor::new(base, 3), DefaultSentinel);
        assert_eq!(range.size_hint(), (3, Some(3)));
        let collected: Vec<i32> = range.collect();
        assert_eq!(collected, vec![5, 5, 5]);
    }

    #[test]
    fn test_inner_access() {
        let data = [4, 5];
        let counted = CountedCursor::new(SliceCursor::begin(&data), 2);
        assert_eq!(counted.count(), 2);
        assert_eq!(counted.inner().position(), 0);
        assert_eq!(counted.into_inner().position(), 0);
    }
}
