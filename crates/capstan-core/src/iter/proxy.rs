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

//! # Proxy References
//!
//! Some cursors cannot hand out a plain `&mut T` to their current element:
//! a cursor that synthesizes values on read has no element in memory, and
//! a cursor that writes through a conversion has no single place a borrow
//! could point at. `ProxyRef` is the stand-in for those cursors: a small
//! view object that reads freshly on every access and writes through the
//! cursor's own `write`.
//!
//! The proxy never owns the cursor; it borrows it, so the borrow checker
//! guarantees the proxy cannot outlive the position it refers to. Whether
//! the referent is valid to read (the cursor is not past its end) remains
//! the caller's obligation, exactly as with the facade itself.

use crate::concept::common_ref::CommonReference;
use crate::cursor::capability::{Cursor, Readable, Writable};

/// A read/write stand-in for the element at a cursor's current position.
///
/// Created by [`BasicIterator::proxy`](crate::iter::facade::BasicIterator::proxy).
/// Reading goes through the cursor's `read` on every call (no caching);
/// writing is available exactly when the cursor is [`Writable`].
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::capability::{Cursor, Readable, Steppable, Writable};
/// use capstan_core::cursor::mixin::DefaultMixin;
/// use capstan_core::iter::facade::BasicIterator;
///
/// /// Stores percentages, clamping every write to 0..=100.
/// #[derive(Clone, Default)]
/// struct ClampCursor {
///     stored: i32,
/// }
///
/// impl Cursor for ClampCursor {
///     type Difference = isize;
///     type Mixin = DefaultMixin<Self>;
/// }
///
/// impl Readable for ClampCursor {
///     type Value = i32;
///     type Reference = i32;
///     fn read(&self) -> i32 {
///         self.stored
///     }
/// }
///
/// impl Writable<i32> for ClampCursor {
///     fn write(&mut self, value: i32) {
///         self.stored = value.clamp(0, 100);
///     }
/// }
///
/// impl Steppable for ClampCursor {
///     fn next(&mut self) {}
/// }
///
/// let mut it = BasicIterator::new(ClampCursor::default());
/// let mut proxy = it.proxy();
/// proxy.set(250);
/// assert_eq!(proxy.get(), 100);
/// assert!(proxy == 100);
/// ```
pub struct ProxyRef<'a, C: Cursor> {
    cursor: &'a mut C,
}

impl<'a, C: Cursor> ProxyRef<'a, C> {
    /// Wraps a borrowed cursor.
    #[inline]
    pub(crate) fn new(cursor: &'a mut C) -> Self {
        Self { cursor }
    }

    /// Borrows the cursor this proxy stands in for.
    #[inline]
    pub fn cursor(&self) -> &C {
        &*self.cursor
    }

    /// Reads the referent, returning the cursor's reference type.
    ///
    /// Every call performs a fresh read; the proxy caches nothing.
    #[inline]
    pub fn get(&self) -> C::Reference
    where
        C: Readable,
    {
        self.cursor.read()
    }

    /// Reads the referent as an owned value.
    #[inline]
    pub fn value(&self) -> C::Value
    where
        C: Readable,
        C::Value: Clone,
    {
        self.cursor.read().to_value()
    }

    /// Writes `value` through the cursor.
    #[inline]
    pub fn set<T>(&mut self, value: T)
    where
        C: Writable<T>,
    {
        self.cursor.write(value);
    }

    /// Writes `value` and returns what was stored before.
    ///
    /// The returned value reflects the cursor's read path, so for lossy
    /// writers it is the previously *stored* value, not the previously
    /// written one.
    #[inline]
    pub fn replace(&mut self, value: C::Value) -> C::Value
    where
        C: Readable + Writable<C::Value>,
        C::Value: Clone,
    {
        let before = self.value();
        self.set(value);
        before
    }

    /// Copies the referent of `source` into this proxy's referent.
    ///
    /// Available for any source cursor whose value type this cursor can
    /// accept, so assignment works across differently-typed proxies.
    #[inline]
    pub fn assign_from<D>(&mut self, source: &ProxyRef<'_, D>)
    where
        D: Readable,
        D::Value: Clone,
        C: Writable<D::Value>,
    {
        self.set(source.value());
    }

    /// Compares the referents of two proxies by reading both.
    pub fn proxy_eq<D>(&self, other: &ProxyRef<'_, D>) -> bool
    where
        C: Readable,
        D: Readable,
        C::Value: PartialEq<D::Value>,
    {
        self.get().as_common() == other.get().as_common()
    }
}

/// Equality against the cursor's value type, by comparing read results
/// rather than identity.
impl<'a, C> PartialEq<C::Value> for ProxyRef<'a, C>
where
    C: Readable,
    C::Value: PartialEq,
{
    #[inline]
    fn eq(&self, other: &C::Value) -> bool {
        self.get().as_common() == other
    }
}

impl<'a, C> std::fmt::Debug for ProxyRef<'a, C>
where
    C: Readable,
    C::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.get();
        f.debug_tuple("ProxyRef").field(current.as_common()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability::Steppable;
    use crate::cursor::mixin::DefaultMixin;
    use crate::iter::facade::BasicIterator;

    // Stores doubled values, exposing the halved reading.
    #[derive(Clone, Default, Debug)]
    struct HalvingCursor {
        doubled: i32,
    }

    impl Cursor for HalvingCursor {
        type Difference = isize;
        type Mixin = DefaultMixin<Self>;
    }

    impl Readable for HalvingCursor {
        type Value = i32;
        type Reference = i32;
        fn read(&self) -> i32 {
            self.doubled / 2
        }
    }

    impl Writable<i32> for HalvingCursor {
        fn write(&mut self, value: i32) {
            self.doubled = value * 2;
        }
    }

    impl Steppable for HalvingCursor {
        fn next(&mut self) {}
    }

    // A plain pass-through slot.
    #[derive(Clone, Default, Debug)]
    struct PlainCursor {
        stored: i32,
    }

    impl Cursor for PlainCursor {
        type Difference = isize;
        type Mixin = DefaultMixin<Self>;
    }

    impl Readable for PlainCursor {
        type Value = i32;
        type Reference = i32;
        fn read(&self) -> i32 {
            self.stored
        }
    }

    impl Writable<i32> for PlainCursor {
        fn write(&mut self, value: i32) {
            self.stored = value;
        }
    }

    impl Steppable for PlainCursor {
        fn next(&mut self) {}
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut it = BasicIterator::new(HalvingCursor::default());
        let mut proxy = it.proxy();
        proxy.set(21);
        assert_eq!(proxy.get(), 21);
        assert_eq!(proxy.value(), 21);
        // The cursor's storage really went through the write path.
        assert_eq!(proxy.cursor().doubled, 42);
    }

    #[test]
    fn test_fresh_read_per_access() {
        let mut it = BasicIterator::new(PlainCursor::default());
        let mut proxy = it.proxy();
        proxy.set(1);
        assert_eq!(proxy.get(), 1);
        proxy.set(2);
        // No caching: the second read observes the second write.
        assert_eq!(proxy.get(), 2);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut it = BasicIterator::new(PlainCursor { stored: 5 });
        let mut proxy = it.proxy();
        assert_eq!(proxy.replace(9), 5);
        assert_eq!(proxy.get(), 9);
    }

    #[test]
    fn test_compare_against_value() {
        let mut it = BasicIterator::new(PlainCursor { stored: 3 });
        let proxy = it.proxy();
        assert!(proxy == 3);
        assert!(!(proxy == 4));
    }

    #[test]
    fn test_assign_across_cursors() {
        let mut source_it = BasicIterator::new(PlainCursor { stored: 17 });
        let mut target_it = BasicIterator::new(HalvingCursor::default());

        let source = source_it.proxy();
        let mut target = target_it.proxy();
        target.assign_from(&source);

        assert!(target.proxy_eq(&source));
        assert_eq!(target.get(), 17);
    }

    #[test]
    fn test_debug_renders_current_value() {
        let mut it = BasicIterator::new(PlainCursor { stored: 8 });
        let proxy = it.proxy();
        assert_eq!(format!("{:?}", proxy), "ProxyRef(8)");
    }
}
