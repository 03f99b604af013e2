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

//! # Common Reference Witness
//!
//! A readable cursor exposes two associated types: the value type its
//! elements decay to and the reference type its `read` actually returns.
//! The two must agree on a common borrowed form, otherwise generic code
//! could not compare, hash, or print elements without knowing which
//! concrete cursor produced them. `CommonReference<V>` is that agreement,
//! stated as a trait bound so a violation is a compile error at the point
//! the cursor declares itself readable.

/// A witness that a reference-like type can be borrowed as the plain value
/// type `V`.
///
/// Implemented for `V` itself (cursors that synthesize values), for `&V`
/// and `&mut V` (cursors that hand out borrows of in-place storage), and
/// implementable by hand for custom proxy types.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::concept::common_ref::CommonReference;
/// fn shout<R: CommonReference<String>>(reference: R) -> String {
///     reference.as_common().to_uppercase()
/// }
///
/// let owned = String::from("heave");
/// assert_eq!(shout(owned.clone()), "HEAVE");
/// assert_eq!(shout(&owned), "HEAVE");
/// ```
pub trait CommonReference<V> {
    /// Borrows the referent as the plain value type.
    fn as_common(&self) -> &V;

    /// Lowers the reference into an owned value.
    fn to_value(&self) -> V
    where
        V: Clone,
    {
        self.as_common().clone()
    }
}

impl<V> CommonReference<V> for V {
    #[inline]
    fn as_common(&self) -> &V {
        self
    }
}

impl<V> CommonReference<V> for &V {
    #[inline]
    fn as_common(&self) -> &V {
        self
    }
}

impl<V> CommonReference<V> for &mut V {
    #[inline]
    fn as_common(&self) -> &V {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_value() {
        let reference: i32 = 42;
        assert_eq!(*CommonReference::<i32>::as_common(&reference), 42);
        assert_eq!(CommonReference::<i32>::to_value(&reference), 42);
    }

    #[test]
    fn test_shared_borrow() {
        let value = String::from("rope");
        let reference: &String = &value;
        assert_eq!(CommonReference::<String>::as_common(&reference), "rope");
        assert_eq!(CommonReference::<String>::to_value(&reference), "rope");
    }

    #[test]
    fn test_custom_proxy() {
        // A stand-in reference that decodes on demand.
        struct Doubled(i32);

        impl CommonReference<i32> for Doubled {
            fn as_common(&self) -> &i32 {
                &self.0
            }
        }

        let proxy = Doubled(21);
        assert_eq!(*CommonReference::<i32>::as_common(&proxy), 21);
    }
}
