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

/// A trait alias for types with ordinary value semantics: they can be
/// default-constructed, cloned, and dropped.
///
/// Multi-pass cursors must be `Semiregular`; a position that cannot be
/// copied cannot be revisited. Single-pass cursors (for example, cursors
/// holding a unique borrow of their underlying storage) are exempt and are
/// classified as input-tier only.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::concept::semiregular::Semiregular;
/// fn checkpoint<T: Semiregular>(value: &T) -> T {
///     value.clone()
/// }
///
/// assert_eq!(checkpoint(&7_i32), 7);
/// ```
pub trait Semiregular: Clone + Default {}

impl<T> Semiregular for T where T: Clone + Default {}

/// A trait alias for `Semiregular` types that are also equality-comparable.
pub trait Regular: Semiregular + PartialEq {}

impl<T> Regular for T where T: Semiregular + PartialEq {}

#[cfg(test)]
mod tests {
    use super::*;

    fn require_semiregular<T: Semiregular>() {}
    fn require_regular<T: Regular>() {}

    #[test]
    fn test_primitives_are_regular() {
        require_semiregular::<i64>();
        require_semiregular::<String>();
        require_regular::<i64>();
        require_regular::<Vec<u8>>();
    }

    #[test]
    fn test_semiregular_without_eq() {
        #[derive(Clone, Default)]
        struct Opaque;

        // Compiles because Semiregular does not demand PartialEq.
        require_semiregular::<Opaque>();
    }
}
