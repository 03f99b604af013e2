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

//! # Repeating Cursors
//!
//! An endless generator of a single value. Every position is every other
//! position: steps and jumps are no-ops, all cursors compare equal, and
//! all distances are zero. That makes the cursor random access in the
//! cheapest possible way, and it pairs with
//! [`Unreachable`](capstan_core::iter::sentinel::Unreachable) when used
//! as a range.

use capstan_core::cursor::capability::{
    Arrow, BidiSteppable, Cursor, IndirectlyMovable, MultiPass, RandomSteppable, Readable,
    Sentineled, SizedSentineled, Steppable,
};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::range::CursorRange;
use capstan_core::iter::sentinel::Unreachable;

/// A cursor yielding one value forever.
///
/// Reads synthesize a fresh clone on every access, so the reference type
/// is the value type itself; this cursor never pretends to have elements
/// in memory.
///
/// # Examples
///
/// ```rust
/// use capstan_core::iter::facade::BasicIterator;
/// use capstan_cursors::repeat::{repeat_range, RepeatCursor};
///
/// let it = BasicIterator::new(RepeatCursor::new(42));
/// assert_eq!(it.get(), 42);
/// assert_eq!((it + 1000).get(), 42);
///
/// let echoes: Vec<&str> = repeat_range("aye").take(3).collect();
/// assert_eq!(echoes, vec!["aye", "aye", "aye"]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct RepeatCursor<T> {
    value: T,
}

impl<T> RepeatCursor<T> {
    /// Builds a cursor that yields `value` at every position.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the repeated value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps into the repeated value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// An endless range repeating `value`, bounded only by adapters such as
/// `Iterator::take`.
#[inline]
pub fn repeat_range<T: Clone>(value: T) -> CursorRange<RepeatCursor<T>, Unreachable> {
    CursorRange::new(RepeatCursor::new(value), Unreachable)
}

impl<T> Cursor for RepeatCursor<T> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<T: Clone> Readable for RepeatCursor<T> {
    type Value = T;
    type Reference = T;

    #[inline]
    fn read(&self) -> T {
        self.value.clone()
    }
}

impl<T> Steppable for RepeatCursor<T> {
    #[inline]
    fn next(&mut self) {}
}

impl<T> BidiSteppable for RepeatCursor<T> {
    #[inline]
    fn prev(&mut self) {}
}

impl<T> RandomSteppable for RepeatCursor<T> {
    #[inline]
    fn advance(&mut self, _: isize) {}
}

impl<T> Sentineled<RepeatCursor<T>> for RepeatCursor<T> {
    #[inline]
    fn equal(&self, _: &RepeatCursor<T>) -> bool {
        true
    }

    #[inline]
    fn steps_hint(&self, _: &RepeatCursor<T>) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> SizedSentineled<RepeatCursor<T>> for RepeatCursor<T> {
    #[inline]
    fn distance_to(&self, _: &RepeatCursor<T>) -> isize {
        0
    }
}

impl<T> MultiPass for RepeatCursor<T> {}

impl<T: Clone> Arrow for RepeatCursor<T> {
    #[inline]
    fn arrow(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> IndirectlyMovable for RepeatCursor<T> {
    #[inline]
    fn indirect_move(&mut self) -> T {
        self.value.clone()
    }
}

impl<T: Clone> Categorized for RepeatCursor<T> {
    const CATEGORY: Category = Category::RandomAccess;
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::tier::require_random_access;
    use capstan_core::iter::facade::BasicIterator;
    use capstan_core::iter::sentinel::Unreachable;

    #[test]
    fn test_random_access_tier() {
        require_random_access::<RepeatCursor<i32>>();
        assert_eq!(RepeatCursor::<i32>::CATEGORY, Category::RandomAccess);
    }

    #[test]
    fn test_every_position_is_the_same() {
        let it = BasicIterator::new(RepeatCursor::new(9));
        assert_eq!(it.get(), 9);
        assert_eq!((it + 42).get(), 9);
        assert_eq!(it.at(-42), 9);
        assert_eq!(it.distance_to(&(it + 7)), 0);
        assert_eq!(it, it + 1);
    }

    #[test]
    fn test_never_reaches_unreachable() {
        let it = BasicIterator::new(RepeatCursor::new('x'));
        assert!(it != Unreachable);
        assert!(!it.reached(&Unreachable));
    }

    #[test]
    fn test_bounded_by_take() {
        let threes: Vec<i32> = repeat_range(3).take(4).collect();
        assert_eq!(threes, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_deref_reaches_value() {
        let it = BasicIterator::new(RepeatCursor::new(String::from("rope")));
        assert_eq!(it.len(), 4);
    }

    #[test]
    fn test_value_accessors() {
        let cursor = RepeatCursor::new(5);
        assert_eq!(*cursor.value(), 5);
        assert_eq!(cursor.into_value(), 5);
    }
}
