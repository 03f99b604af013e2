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

//! # Trace Instrumentation
//!
//! A transparent wrapper that reports every cursor primitive through the
//! `log` facade at trace level. Wrap a cursor while diagnosing a
//! traversal, watch the primitive calls stream by, and unwrap it when
//! done; the wrapped cursor's capabilities and semantics pass through
//! unchanged. With no logger installed the calls compile down to cheap
//! level checks.

use capstan_core::cursor::capability::{
    Arrow, BidiSteppable, ContiguousStorage, Cursor, IndirectlyMovable, MultiPass,
    RandomSteppable, Readable, Sentineled, SizedSentineled, Steppable, Writable,
};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::cursor::tier::{Categorized, Category};
use capstan_core::iter::sentinel::DefaultSentinel;

const TARGET: &str = "capstan::cursor";

/// A cursor forwarding to an inner cursor and logging every primitive.
///
/// The `label` distinguishes concurrent traversals in the log stream.
///
/// # Examples
///
/// ```rust
/// use capstan_core::iter::facade::BasicIterator;
/// use capstan_cursors::slice::SliceCursor;
/// use capstan_cursors::trace::TraceCursor;
///
/// let data = [1, 2, 3];
/// let mut it = BasicIterator::new(TraceCursor::new(SliceCursor::begin(&data), "scan"));
/// it.step();
/// assert_eq!(it.get(), &2);
/// assert_eq!(it.into_cursor().into_inner().position(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TraceCursor<C> {
    inner: C,
    label: &'static str,
}

impl<C> TraceCursor<C> {
    /// Wraps `inner`, tagging its log lines with `label`.
    #[inline]
    pub fn new(inner: C, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// Borrows the wrapped cursor.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the log label.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unwraps into the inner cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Default> Default for TraceCursor<C> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: C::default(),
            label: "cursor",
        }
    }
}

impl<C: Cursor> Cursor for TraceCursor<C> {
    type Difference = C::Difference;
    type Mixin = DefaultMixin<Self>;
}

impl<C: Readable> Readable for TraceCursor<C> {
    type Value = C::Value;
    type Reference = C::Reference;

    #[inline]
    fn read(&self) -> C::Reference {
        log::trace!(target: TARGET, "{}: read", self.label);
        self.inner.read()
    }
}

impl<C, T> Writable<T> for TraceCursor<C>
where
    C: Writable<T>,
{
    #[inline]
    fn write(&mut self, value: T) {
        log::trace!(target: TARGET, "{}: write", self.label);
        self.inner.write(value);
    }
}

impl<C: Steppable> Steppable for TraceCursor<C> {
    #[inline]
    fn next(&mut self) {
        log::trace!(target: TARGET, "{}: next", self.label);
        self.inner.next();
    }
}

impl<C: BidiSteppable> BidiSteppable for TraceCursor<C> {
    #[inline]
    fn prev(&mut self) {
        log::trace!(target: TARGET, "{}: prev", self.label);
        self.inner.prev();
    }
}

impl<C: RandomSteppable> RandomSteppable for TraceCursor<C> {
    #[inline]
    fn advance(&mut self, n: C::Difference) {
        log::trace!(target: TARGET, "{}: advance({:?})", self.label, n);
        self.inner.advance(n);
    }
}

impl<C> Sentineled<TraceCursor<C>> for TraceCursor<C>
where
    C: Sentineled<C>,
{
    #[inline]
    fn equal(&self, other: &TraceCursor<C>) -> bool {
        log::trace!(target: TARGET, "{}: equal", self.label);
        self.inner.equal(&other.inner)
    }

    #[inline]
    fn steps_hint(&self, other: &TraceCursor<C>) -> (usize, Option<usize>) {
        self.inner.steps_hint(&other.inner)
    }
}

impl<C> SizedSentineled<TraceCursor<C>> for TraceCursor<C>
where
    C: SizedSentineled<C>,
{
    #[inline]
    fn distance_to(&self, other: &TraceCursor<C>) -> C::Difference {
        log::trace!(target: TARGET, "{}: distance_to", self.label);
        self.inner.distance_to(&other.inner)
    }
}

impl<C> Sentineled<DefaultSentinel> for TraceCursor<C>
where
    C: Sentineled<DefaultSentinel>,
{
    #[inline]
    fn equal(&self, sentinel: &DefaultSentinel) -> bool {
        log::trace!(target: TARGET, "{}: equal(sentinel)", self.label);
        self.inner.equal(sentinel)
    }

    #[inline]
    fn steps_hint(&self, sentinel: &DefaultSentinel) -> (usize, Option<usize>) {
        self.inner.steps_hint(sentinel)
    }
}

impl<C> SizedSentineled<DefaultSentinel> for TraceCursor<C>
where
    C: SizedSentineled<DefaultSentinel>,
{
    #[inline]
    fn distance_to(&self, sentinel: &DefaultSentinel) -> C::Difference {
        log::trace!(target: TARGET, "{}: distance_to(sentinel)", self.label);
        self.inner.distance_to(sentinel)
    }
}

impl<C: MultiPass> MultiPass for TraceCursor<C> {}

impl<C: Arrow> Arrow for TraceCursor<C> {
    #[inline]
    fn arrow(&self) -> &C::Value {
        self.inner.arrow()
    }
}

impl<C: ContiguousStorage> ContiguousStorage for TraceCursor<C> {}

impl<C: IndirectlyMovable> IndirectlyMovable for TraceCursor<C> {
    #[inline]
    fn indirect_move(&mut self) -> C::Value {
        log::trace!(target: TARGET, "{}: indirect_move", self.label);
        self.inner.indirect_move()
    }
}

impl<C: Categorized> Categorized for TraceCursor<C> {
    const CATEGORY: Category = C::CATEGORY;
}
