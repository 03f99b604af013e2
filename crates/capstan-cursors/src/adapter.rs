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

//! # Iterator Adapter Cursor
//!
//! The bridge in the opposite direction of
//! [`CursorRange`](capstan_core::iter::range::CursorRange): any standard
//! iterator becomes a single-pass input cursor. The adapter keeps a
//! one-element lookahead so that `read` is repeatable at a position and
//! exhaustion is observable through
//! [`DefaultSentinel`](capstan_core::iter::sentinel::DefaultSentinel).
//! It deliberately does not declare `MultiPass`: a drained iterator
//! cannot be replayed, so the cursor stays honestly at the input tier.

use capstan_core::cursor::capability::{Cursor, Readable, Sentineled, Steppable};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::sentinel::DefaultSentinel;

/// A single-pass cursor draining a standard iterator.
///
/// # Examples
///
/// ```rust
/// use capstan_core::iter::facade::BasicIterator;
/// use capstan_core::iter::sentinel::DefaultSentinel;
/// use capstan_cursors::adapter::IterCursor;
///
/// let mut it = BasicIterator::new(IterCursor::new("abc".chars()));
/// assert_eq!(it.get(), 'a');
/// // Reads are repeatable until the cursor steps.
/// assert_eq!(it.get(), 'a');
///
/// it.step();
/// it.step();
/// assert_eq!(it.get(), 'c');
///
/// it.step();
/// assert!(it == DefaultSentinel);
/// ```
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps an iterator, pulling the first element as the lookahead.
    #[inline]
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self { iter, current }
    }

    /// Returns `true` once the underlying iterator is drained.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Borrows the lookahead element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }
}

impl<I: Iterator> std::fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor")
            .field("exhausted", &self.current.is_none())
            .finish()
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<I> Readable for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Value = I::Item;
    type Reference = I::Item;

    /// # Panics
    ///
    /// Panics if the underlying iterator is already exhausted.
    #[inline]
    fn read(&self) -> I::Item {
        self.current
            .as_ref()
            .expect("IterCursor: read past the end of the underlying iterator")
            .clone()
    }
}

impl<I: Iterator> Steppable for IterCursor<I> {
    #[inline]
    fn next(&mut self) {
        self.current = self.iter.next();
    }
}

impl<I: Iterator> Sentineled<DefaultSentinel> for IterCursor<I> {
    #[inline]
    fn equal(&self, _: &DefaultSentinel) -> bool {
        self.current.is_none()
    }

    #[inline]
    fn steps_hint(&self, _: &DefaultSentinel) -> (usize, Option<usize>) {
        if self.current.is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|u| u.checked_add(1)),
        )
    }
}

impl<I> Categorized for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    const CATEGORY: Category = Category::Input;
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::tier::require_input;
    use capstan_core::iter::facade::BasicIterator;
    use capstan_core::iter::range::CursorRange;
    use capstan_core::iter::sentinel::DefaultSentinel;

    #[test]
    fn test_input_tier() {
        require_input::<IterCursor<std::vec::IntoIter<u8>>>();
        assert_eq!(
            IterCursor::<std::vec::IntoIter<u8>>::CATEGORY,
            Category::Input
        );
    }

    #[test]
    fn test_lookahead_read_is_repeatable() {
        let cursor = IterCursor::new(vec![1, 2].into_iter());
        assert_eq!(cursor.read(), 1);
        assert_eq!(cursor.read(), 1);
        assert_eq!(cursor.peek(), Some(&1));
    }

    #[test]
    fn test_exhaustion_matches_sentinel() {
        let mut it = BasicIterator::new(IterCursor::new(std::iter::once(7)));
        assert!(it != DefaultSentinel);
        it.step();
        assert!(it == DefaultSentinel);
        assert!(it.cursor().is_exhausted());
    }

    #[test]
    fn test_round_trip_through_both_bridges() {
        // std iterator -> cursor -> std iterator again.
        let range = CursorRange::new(
            IterCursor::new(vec!["a", "b", "c"].into_iter()),
            DefaultSentinel,
        );
        let collected: Vec<&str> = range.collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_steps_hint_accounts_for_lookahead() {
        let cursor = IterCursor::new(vec![1, 2, 3].into_iter());
        assert_eq!(cursor.steps_hint(&DefaultSentinel), (3, Some(3)));

        let drained = IterCursor::new(std::iter::empty::<i32>());
        assert_eq!(drained.steps_hint(&DefaultSentinel), (0, Some(0)));
    }

    #[test]
    #[should_panic(expected = "read past the end")]
    fn test_read_past_end_panics() {
        let cursor = IterCursor::new(std::iter::empty::<i32>());
        let _ = cursor.read();
    }

    #[test]
    fn test_debug_shows_exhaustion_only() {
        // Items need not be Debug for the cursor to be.
        struct Opaque;
        let cursor = IterCursor::new(vec![Opaque].into_iter());
        assert!(format!("{:?}", cursor).contains("exhausted: false"));
    }
}
