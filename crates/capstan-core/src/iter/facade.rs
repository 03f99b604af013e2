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

//! # The Iterator Facade
//!
//! `BasicIterator<C>` lifts any cursor into an iterator. The facade holds
//! nothing but the cursor (through its declared mixin) and exposes an
//! operation set that is a pure function of the cursor's capability
//! profile: each method and trait impl below is gated on the capability it
//! delegates to, so an operation a cursor cannot support simply does not
//! exist on the iterator built over it.
//!
//! ## Highlights
//!
//! - Reading: `get`, `value`, and (for in-place cursors) `Deref`.
//! - Writing: `put` for direct writes, `proxy` for a reusable read/write
//!   stand-in.
//! - Motion: `step`, `step_back`, `advance`, with synthesized copying
//!   variants `post_step` and `post_step_back`, and operator sugar
//!   (`+`, `+=`, `-=`) at the random access tier.
//! - Measurement: `Sub` computes iterator difference, `at` indexes
//!   relative to the current position, `PartialOrd`/`Ord` order positions
//!   by distance sign.
//! - Sentinels: `reached` and `remaining` against any sentinel the cursor
//!   understands; `==` against [`DefaultSentinel`] and [`Unreachable`]
//!   directly.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::cursor::capability::{Cursor, Readable, Steppable};
//! use capstan_core::cursor::mixin::DefaultMixin;
//! use capstan_core::iter::facade::BasicIterator;
//!
//! /// Yields the naturals starting from some origin.
//! #[derive(Clone, Copy, Default)]
//! struct Naturals {
//!     position: i64,
//! }
//!
//! impl Cursor for Naturals {
//!     type Difference = i64;
//!     type Mixin = DefaultMixin<Self>;
//! }
//!
//! impl Readable for Naturals {
//!     type Value = i64;
//!     type Reference = i64;
//!     fn read(&self) -> i64 {
//!         self.position
//!     }
//! }
//!
//! impl Steppable for Naturals {
//!     fn next(&mut self) {
//!         self.position += 1;
//!     }
//! }
//!
//! let mut it = BasicIterator::new(Naturals { position: 5 });
//! assert_eq!(it.get(), 5);
//! it.step();
//! assert_eq!(it.get(), 6);
//! ```
//!
//! [`DefaultSentinel`]: crate::iter::sentinel::DefaultSentinel
//! [`Unreachable`]: crate::iter::sentinel::Unreachable

use crate::concept::common_ref::CommonReference;
use crate::cursor::capability::{
    Arrow, ArrowMut, BidiSteppable, Cursor, IndirectlyMovable, IndirectlySwappable,
    RandomSteppable, Readable, Sentineled, SizedSentineled, Steppable, Writable,
};
use crate::cursor::mixin::CursorMixin;
use crate::cursor::tier::{Categorized, Category};
use crate::iter::proxy::ProxyRef;
use crate::iter::range::CursorRange;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};

/// The generic iterator built over a cursor.
///
/// Holds exactly the cursor's declared mixin and nothing else; every
/// operation delegates to a cursor primitive. `Clone`, `Copy`, `Default`,
/// and `Debug` are forwarded from the mixin, so an iterator is exactly as
/// regular as its storage.
pub struct BasicIterator<C: Cursor> {
    mixin: C::Mixin,
}

impl<C: Cursor> BasicIterator<C> {
    /// Lifts a cursor into an iterator.
    #[inline]
    pub fn new(cursor: C) -> Self {
        Self {
            mixin: <C::Mixin as CursorMixin<C>>::from_cursor(cursor),
        }
    }

    /// Builds an iterator from an already-constructed mixin.
    ///
    /// Useful for custom mixins carrying extra state that the plain
    /// cursor cannot provide.
    #[inline]
    pub fn from_mixin(mixin: C::Mixin) -> Self {
        Self { mixin }
    }

    /// Borrows the wrapped cursor.
    #[inline]
    pub fn cursor(&self) -> &C {
        self.mixin.get()
    }

    /// Mutably borrows the wrapped cursor.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut C {
        self.mixin.get_mut()
    }

    /// Unwraps into the cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.mixin.into_cursor()
    }

    /// Borrows the storage mixin.
    #[inline]
    pub fn mixin(&self) -> &C::Mixin {
        &self.mixin
    }

    /// Mutably borrows the storage mixin.
    #[inline]
    pub fn mixin_mut(&mut self) -> &mut C::Mixin {
        &mut self.mixin
    }

    /// Writes `value` at the current position.
    #[inline]
    pub fn put<T>(&mut self, value: T) -> &mut Self
    where
        C: Writable<T>,
    {
        self.cursor_mut().write(value);
        self
    }

    /// Returns `true` if this iterator has reached `sentinel`.
    #[inline]
    pub fn reached<S>(&self, sentinel: &S) -> bool
    where
        C: Sentineled<S>,
    {
        self.cursor().equal(sentinel)
    }

    /// Returns the number of forward steps from this iterator to
    /// `sentinel`.
    #[inline]
    pub fn remaining<S>(&self, sentinel: &S) -> C::Difference
    where
        C: SizedSentineled<S>,
    {
        self.cursor().distance_to(sentinel)
    }

    /// Returns the number of forward steps from this iterator to `other`.
    ///
    /// Equivalently, `other - self.clone()`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> C::Difference
    where
        C: SizedSentineled<C>,
    {
        self.cursor().distance_to(other.cursor())
    }

    /// Pairs this iterator with an end marker, producing a
    /// [`CursorRange`] that plugs into `std::iter`.
    #[inline]
    pub fn until<S>(self, sentinel: S) -> CursorRange<C, S> {
        CursorRange::new(self.into_cursor(), sentinel)
    }
}

impl<C> BasicIterator<C>
where
    C: Readable,
{
    /// Reads the current element, returning whatever the cursor's `read`
    /// returns: a borrow for in-place cursors, a value for synthesizing
    /// ones.
    #[inline]
    pub fn get(&self) -> C::Reference {
        self.cursor().read()
    }

    /// Reads the current element as an owned value.
    #[inline]
    pub fn value(&self) -> C::Value
    where
        C::Value: Clone,
    {
        self.cursor().read().to_value()
    }
}

impl<C> BasicIterator<C>
where
    C: Steppable,
{
    /// Advances one position.
    ///
    /// Returns `&mut Self` so motion and access chain naturally.
    #[inline]
    pub fn step(&mut self) -> &mut Self {
        self.cursor_mut().next();
        self
    }

    /// Advances one position, returning the iterator as it was before the
    /// step.
    #[inline]
    pub fn post_step(&mut self) -> Self
    where
        C::Mixin: Clone,
    {
        let before = self.clone();
        self.cursor_mut().next();
        before
    }

    /// Returns a read/write stand-in for the current element.
    ///
    /// The proxy borrows this iterator; its `set` is available whenever
    /// the cursor is [`Writable`], its `get` whenever the cursor is
    /// [`Readable`].
    #[inline]
    pub fn proxy(&mut self) -> ProxyRef<'_, C> {
        ProxyRef::new(self.cursor_mut())
    }
}

impl<C> BasicIterator<C>
where
    C: BidiSteppable,
{
    /// Retreats one position.
    #[inline]
    pub fn step_back(&mut self) -> &mut Self {
        self.cursor_mut().prev();
        self
    }

    /// Retreats one position, returning the iterator as it was before the
    /// step.
    #[inline]
    pub fn post_step_back(&mut self) -> Self
    where
        C::Mixin: Clone,
    {
        let before = self.clone();
        self.cursor_mut().prev();
        before
    }
}

impl<C> BasicIterator<C>
where
    C: RandomSteppable,
{
    /// Moves by `n` positions, which may be negative.
    #[inline]
    pub fn advance(&mut self, n: C::Difference) -> &mut Self {
        self.cursor_mut().advance(n);
        self
    }

    /// Returns a copy of this iterator moved by `n` positions.
    #[inline]
    pub fn offset(&self, n: C::Difference) -> Self
    where
        C::Mixin: Clone,
    {
        let mut shifted = self.clone();
        shifted.cursor_mut().advance(n);
        shifted
    }

    /// Reads the element `n` positions away from the current one.
    ///
    /// Exactly `self.offset(n).get()`; the subscript operation of a
    /// random access iterator.
    #[inline]
    pub fn at(&self, n: C::Difference) -> C::Reference
    where
        C: Readable,
        C::Mixin: Clone,
    {
        self.offset(n).get()
    }
}

impl<C> BasicIterator<C>
where
    C: IndirectlyMovable,
{
    /// Extracts the current element by value through the cursor's
    /// `indirect_move`.
    #[inline]
    pub fn take_value(&mut self) -> C::Value {
        self.cursor_mut().indirect_move()
    }
}

impl<C> BasicIterator<C>
where
    C: IndirectlySwappable,
{
    /// Exchanges the current elements of two iterators over the same
    /// sequence.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.cursor_mut().indirect_swap(other.cursor_mut());
    }
}

impl<C> BasicIterator<C>
where
    C: Categorized,
{
    /// The declared capability tier of the underlying cursor.
    pub const CATEGORY: Category = C::CATEGORY;

    /// Returns the declared capability tier of the underlying cursor.
    #[inline]
    pub fn category(&self) -> Category {
        C::CATEGORY
    }
}

impl<C: Cursor> Clone for BasicIterator<C>
where
    C::Mixin: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mixin: self.mixin.clone(),
        }
    }
}

impl<C: Cursor> Copy for BasicIterator<C> where C::Mixin: Copy {}

impl<C: Cursor> Default for BasicIterator<C>
where
    C::Mixin: Default,
{
    #[inline]
    fn default() -> Self {
        Self {
            mixin: Default::default(),
        }
    }
}

impl<C: Cursor> std::fmt::Debug for BasicIterator<C>
where
    C::Mixin: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicIterator")
            .field("mixin", &self.mixin)
            .finish()
    }
}

impl<C: Cursor> From<C> for BasicIterator<C> {
    #[inline]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}

impl<C> PartialEq for BasicIterator<C>
where
    C: Sentineled<C>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cursor().equal(other.cursor())
    }
}

impl<C> Eq for BasicIterator<C> where C: Sentineled<C> {}

impl<C> PartialOrd for BasicIterator<C>
where
    C: SizedSentineled<C>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for BasicIterator<C>
where
    C: SizedSentineled<C>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        let zero: C::Difference = num_traits::Zero::zero();
        let to_other = self.cursor().distance_to(other.cursor());
        if to_other > zero {
            Ordering::Less
        } else if to_other < zero {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<C> Add<C::Difference> for BasicIterator<C>
where
    C: RandomSteppable,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: C::Difference) -> Self {
        self.cursor_mut().advance(n);
        self
    }
}

impl<C> AddAssign<C::Difference> for BasicIterator<C>
where
    C: RandomSteppable,
{
    #[inline]
    fn add_assign(&mut self, n: C::Difference) {
        self.cursor_mut().advance(n);
    }
}

impl<C> SubAssign<C::Difference> for BasicIterator<C>
where
    C: RandomSteppable,
{
    #[inline]
    fn sub_assign(&mut self, n: C::Difference) {
        self.cursor_mut().advance(-n);
    }
}

/// Iterator difference: `a - b` is the number of forward steps from `b`
/// to `a`.
///
/// Note that subtracting an integral offset is spelled `it + (-n)` or
/// `it.offset(-n)`; `Sub` between two iterators is reserved for the
/// distance computation.
impl<C> Sub for BasicIterator<C>
where
    C: SizedSentineled<C>,
{
    type Output = C::Difference;

    #[inline]
    fn sub(self, other: Self) -> C::Difference {
        other.cursor().distance_to(self.cursor())
    }
}

impl<C> Deref for BasicIterator<C>
where
    C: Arrow,
{
    type Target = C::Value;

    #[inline]
    fn deref(&self) -> &C::Value {
        self.cursor().arrow()
    }
}

impl<C> DerefMut for BasicIterator<C>
where
    C: ArrowMut,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut C::Value {
        self.cursor_mut().arrow_mut()
    }
}
