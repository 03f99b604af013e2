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

//! # Mixin Storage Layer
//!
//! The facade never holds a cursor directly; it holds the cursor's
//! declared mixin, and the mixin holds the cursor. For almost every cursor
//! the right mixin is [`DefaultMixin`], a transparent wrapper. Cursors
//! that want to ride extra state alongside every iterator built over them
//! (a debug label, an access counter, a generation stamp) declare their
//! own mixin type instead, and the facade carries it without knowing.
//!
//! Whatever the facade can do with its storage (clone it, default it,
//! print it) is inherited from the mixin, so a custom mixin also controls
//! which of those the resulting iterator supports.

/// The contract a cursor storage wrapper must satisfy.
///
/// A mixin is constructible from the cursor it wraps and hands the cursor
/// back out by shared borrow, mutable borrow, and by value.
pub trait CursorMixin<C> {
    /// Wraps a cursor.
    fn from_cursor(cursor: C) -> Self;

    /// Borrows the wrapped cursor.
    fn get(&self) -> &C;

    /// Mutably borrows the wrapped cursor.
    fn get_mut(&mut self) -> &mut C;

    /// Unwraps into the cursor.
    fn into_cursor(self) -> C;
}

/// The transparent pass-through mixin.
///
/// Adds no state and no behavior; `Clone`, `Copy`, `Default`, equality,
/// and `Debug` are exactly those of the wrapped cursor.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::cursor::mixin::{CursorMixin, DefaultMixin};
/// let mixin = DefaultMixin::from_cursor(7_i32);
/// assert_eq!(*mixin.get(), 7);
/// assert_eq!(mixin.into_cursor(), 7);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct DefaultMixin<C> {
    cursor: C,
}

impl<C> CursorMixin<C> for DefaultMixin<C> {
    #[inline]
    fn from_cursor(cursor: C) -> Self {
        Self { cursor }
    }

    #[inline]
    fn get(&self) -> &C {
        &self.cursor
    }

    #[inline]
    fn get_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    #[inline]
    fn into_cursor(self) -> C {
        self.cursor
    }
}
