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

//! # Stock Sentinels
//!
//! An end marker does not have to be an iterator. A cursor that knows
//! internally when it is finished (a countdown hit zero, a stream ran
//! dry) compares against [`DefaultSentinel`]; a cursor that never ends
//! pairs with [`Unreachable`]. Both are zero-sized, so carrying one
//! around costs nothing.

use crate::cursor::capability::{Cursor, Sentineled, SizedSentineled};
use crate::iter::facade::BasicIterator;
use std::ops::Sub;

/// The unit sentinel for cursors with internal end detection.
///
/// A cursor opts in by implementing `Sentineled<DefaultSentinel>` (and
/// `SizedSentineled<DefaultSentinel>` when the remaining count is known),
/// after which iterators over it compare against the sentinel with `==`
/// and measure against it with [`Sub`] or
/// [`remaining`](BasicIterator::remaining).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct DefaultSentinel;

/// The sentinel no cursor ever reaches.
///
/// Pairs with endless generators. Every cursor compares unequal to it,
/// through a blanket impl, so an endless range can still be expressed and
/// then bounded by adapters such as `Iterator::take`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Unreachable;

impl<C: Cursor> Sentineled<Unreachable> for C {
    #[inline]
    fn equal(&self, _: &Unreachable) -> bool {
        false
    }

    #[inline]
    fn steps_hint(&self, _: &Unreachable) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<C> PartialEq<DefaultSentinel> for BasicIterator<C>
where
    C: Sentineled<DefaultSentinel>,
{
    #[inline]
    fn eq(&self, sentinel: &DefaultSentinel) -> bool {
        self.cursor().equal(sentinel)
    }
}

impl<C> PartialEq<BasicIterator<C>> for DefaultSentinel
where
    C: Sentineled<DefaultSentinel>,
{
    #[inline]
    fn eq(&self, iterator: &BasicIterator<C>) -> bool {
        iterator.cursor().equal(self)
    }
}

impl<C: Cursor> PartialEq<Unreachable> for BasicIterator<C> {
    #[inline]
    fn eq(&self, _: &Unreachable) -> bool {
        false
    }
}

impl<C: Cursor> PartialEq<BasicIterator<C>> for Unreachable {
    #[inline]
    fn eq(&self, _: &BasicIterator<C>) -> bool {
        false
    }
}

/// `DefaultSentinel - iterator` is the number of steps the iterator still
/// has to take, mirroring iterator difference.
impl<C> Sub<BasicIterator<C>> for DefaultSentinel
where
    C: SizedSentineled<DefaultSentinel>,
{
    type Output = C::Difference;

    #[inline]
    fn sub(self, iterator: BasicIterator<C>) -> C::Difference {
        iterator.cursor().distance_to(&DefaultSentinel)
    }
}

impl<'a, C> Sub<&'a BasicIterator<C>> for DefaultSentinel
where
    C: SizedSentineled<DefaultSentinel>,
{
    type Output = C::Difference;

    #[inline]
    fn sub(self, iterator: &'a BasicIterator<C>) -> C::Difference {
        iterator.cursor().distance_to(&DefaultSentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability::{Readable, Steppable};
    use crate::cursor::mixin::DefaultMixin;

    // Counts down to zero.
    #[derive(Clone, Default, Debug)]
    struct Countdown {
        remaining: i32,
    }

    impl Cursor for Countdown {
        type Difference = i32;
        type Mixin = DefaultMixin<Self>;
    }

    impl Readable for Countdown {
        type Value = i32;
        type Reference = i32;
        fn read(&self) -> i32 {
            self.remaining
        }
    }

    impl Steppable for Countdown {
        fn next(&mut self) {
            self.remaining -= 1;
        }
    }

    impl Sentineled<DefaultSentinel> for Countdown {
        fn equal(&self, _: &DefaultSentinel) -> bool {
            self.remaining == 0
        }
    }

    impl SizedSentineled<DefaultSentinel> for Countdown {
        fn distance_to(&self, _: &DefaultSentinel) -> i32 {
            self.remaining
        }
    }

    #[test]
    fn test_equality_exactly_at_zero() {
        let mut it = BasicIterator::new(Countdown { remaining: 2 });
        assert!(it != DefaultSentinel);
        assert!(DefaultSentinel != it);
        it.step();
        it.step();
        assert!(it == DefaultSentinel);
        assert!(DefaultSentinel == it);
    }

    #[test]
    fn test_sentinel_minus_iterator_is_remaining() {
        let it = BasicIterator::new(Countdown { remaining: 4 });
        assert_eq!(DefaultSentinel - &it, 4);
        assert_eq!(it.remaining(&DefaultSentinel), 4);
        assert_eq!(DefaultSentinel - it, 4);
    }

    #[test]
    fn test_unreachable_never_matches() {
        let it = BasicIterator::new(Countdown { remaining: 0 });
        assert!(it != Unreachable);
        assert!(Unreachable != it);
        assert!(!it.reached(&Unreachable));
    }

    #[test]
    fn test_unreachable_steps_hint_is_endless() {
        let cursor = Countdown { remaining: 0 };
        assert_eq!(cursor.steps_hint(&Unreachable), (usize::MAX, None));
    }
}
