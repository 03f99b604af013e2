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

//! # Insert Cursors
//!
//! Write-only cursors that grow a container instead of overwriting
//! elements. Stepping is a no-op because insertion is the motion: every
//! write creates the position it fills. These are the minimal "weak
//! iterator" inhabitants of the protocol, implementing nothing beyond
//! `Writable` and a no-op `Steppable`.
//!
//! The container side is abstracted by two small traits so the cursors
//! work over `Vec`, `VecDeque`, `LinkedList`, and `String` alike.

use capstan_core::cursor::capability::{Cursor, Steppable, Writable};
use capstan_core::cursor::mixin::DefaultMixin;
use capstan_core::iter::facade::BasicIterator;
use std::collections::{LinkedList, VecDeque};

/// A container that grows at its back.
pub trait BackInsertable {
    /// The element type accepted by the container.
    type Item;

    /// Appends `item` after the last element.
    fn append(&mut self, item: Self::Item);
}

/// A container that grows at its front.
pub trait FrontInsertable {
    /// The element type accepted by the container.
    type Item;

    /// Prepends `item` before the first element.
    fn prepend(&mut self, item: Self::Item);
}

impl<T> BackInsertable for Vec<T> {
    type Item = T;

    #[inline]
    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> BackInsertable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> BackInsertable for LinkedList<T> {
    type Item = T;

    #[inline]
    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

impl BackInsertable for String {
    type Item = char;

    #[inline]
    fn append(&mut self, item: char) {
        self.push(item);
    }
}

impl<T> FrontInsertable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn prepend(&mut self, item: T) {
        self.push_front(item);
    }
}

impl<T> FrontInsertable for LinkedList<T> {
    type Item = T;

    #[inline]
    fn prepend(&mut self, item: T) {
        self.push_front(item);
    }
}

/// A write-only cursor appending into a container.
///
/// Accepts anything convertible into the container's element type, so
/// widening writes come for free.
///
/// # Examples
///
/// ```rust
/// # use capstan_cursors::insert::back_inserter;
/// let mut sink: Vec<i32> = Vec::new();
/// let mut out = back_inserter(&mut sink);
/// out.put(1_u8).put(2_u8);
/// out.step();
/// out.put(3_u8);
/// drop(out);
/// assert_eq!(sink, vec![1, 2, 3]);
/// ```
pub struct BackInsertCursor<'c, X: BackInsertable> {
    container: &'c mut X,
}

impl<'c, X: BackInsertable> BackInsertCursor<'c, X> {
    /// Builds a cursor appending into `container`.
    #[inline]
    pub fn new(container: &'c mut X) -> Self {
        Self { container }
    }
}

impl<'c, X: BackInsertable> std::fmt::Debug for BackInsertCursor<'c, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackInsertCursor")
    }
}

impl<'c, X: BackInsertable> Cursor for BackInsertCursor<'c, X> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<'c, X, T> Writable<T> for BackInsertCursor<'c, X>
where
    X: BackInsertable,
    T: Into<X::Item>,
{
    #[inline]
    fn write(&mut self, value: T) {
        self.container.append(value.into());
    }
}

impl<'c, X: BackInsertable> Steppable for BackInsertCursor<'c, X> {
    #[inline]
    fn next(&mut self) {}
}

/// A write-only cursor prepending into a container.
pub struct FrontInsertCursor<'c, X: FrontInsertable> {
    container: &'c mut X,
}

impl<'c, X: FrontInsertable> FrontInsertCursor<'c, X> {
    /// Builds a cursor prepending into `container`.
    #[inline]
    pub fn new(container: &'c mut X) -> Self {
        Self { container }
    }
}

impl<'c, X: FrontInsertable> std::fmt::Debug for FrontInsertCursor<'c, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FrontInsertCursor")
    }
}

impl<'c, X: FrontInsertable> Cursor for FrontInsertCursor<'c, X> {
    type Difference = isize;
    type Mixin = DefaultMixin<Self>;
}

impl<'c, X, T> Writable<T> for FrontInsertCursor<'c, X>
where
    X: FrontInsertable,
    T: Into<X::Item>,
{
    #[inline]
    fn write(&mut self, value: T) {
        self.container.prepend(value.into());
    }
}

impl<'c, X: FrontInsertable> Steppable for FrontInsertCursor<'c, X> {
    #[inline]
    fn next(&mut self) {}
}

/// Lifts a back-inserting cursor over `container` into an iterator.
#[inline]
pub fn back_inserter<X: BackInsertable>(
    container: &mut X,
) -> BasicIterator<BackInsertCursor<'_, X>> {
    BasicIterator::new(BackInsertCursor::new(container))
}

/// Lifts a front-inserting cursor over `container` into an iterator.
#[inline]
pub fn front_inserter<X: FrontInsertable>(
    container: &mut X,
) -> BasicIterator<FrontInsertCursor<'_, X>> {
    BasicIterator::new(FrontInsertCursor::new(container))
}
