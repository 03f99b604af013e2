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

//! # Cursor Capabilities
//!
//! One narrow trait per primitive operation. A cursor implements exactly
//! the subset it supports; absence of a trait silently removes the
//! corresponding operation from the facade rather than causing an error.
//! This keeps the whole protocol resolvable at compile time with zero
//! runtime cost.
//!
//! ## Highlights
//!
//! - `Cursor` is the baseline: a difference type and a storage mixin.
//! - `Readable`/`Writable` cover element access; `Steppable`,
//!   `BidiSteppable`, and `RandomSteppable` cover motion.
//! - `Sentineled<S>`/`SizedSentineled<S>` cover end detection and distance
//!   measurement against a sentinel type `S`, which may be the cursor type
//!   itself or a dedicated marker such as
//!   [`DefaultSentinel`](crate::iter::sentinel::DefaultSentinel).
//! - The side facets (`Arrow`, `ArrowMut`, `IndirectlyMovable`,
//!   `IndirectlySwappable`) and the two opt-in markers (`MultiPass`,
//!   `ContiguousStorage`) refine the profile without changing the tier
//!   ladder's spine.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::cursor::capability::{Cursor, Readable, Sentineled, Steppable};
//! use capstan_core::cursor::mixin::DefaultMixin;
//! use capstan_core::iter::sentinel::DefaultSentinel;
//!
//! /// Counts down to zero, yielding the remaining count.
//! #[derive(Clone, Default)]
//! struct Countdown {
//!     remaining: i32,
//! }
//!
//! impl Cursor for Countdown {
//!     type Difference = i32;
//!     type Mixin = DefaultMixin<Self>;
//! }
//!
//! impl Readable for Countdown {
//!     type Value = i32;
//!     type Reference = i32;
//!
//!     fn read(&self) -> i32 {
//!         self.remaining
//!     }
//! }
//!
//! impl Steppable for Countdown {
//!     fn next(&mut self) {
//!         self.remaining -= 1;
//!     }
//! }
//!
//! impl Sentineled<DefaultSentinel> for Countdown {
//!     fn equal(&self, _: &DefaultSentinel) -> bool {
//!         self.remaining == 0
//!     }
//! }
//!
//! let mut cursor = Countdown { remaining: 2 };
//! assert_eq!(cursor.read(), 2);
//! cursor.next();
//! cursor.next();
//! assert!(cursor.equal(&DefaultSentinel));
//! ```

use crate::concept::common_ref::CommonReference;
use crate::concept::numeric::DifferenceType;
use crate::cursor::mixin::CursorMixin;

/// The baseline every cursor must satisfy.
///
/// A cursor declares the signed integer type its distances are measured in
/// and the storage mixin the facade embeds it through. Cursors with no
/// natural distance unit conventionally declare `isize`; cursors with no
/// need for custom storage declare
/// [`DefaultMixin<Self>`](crate::cursor::mixin::DefaultMixin).
///
/// Everything else about a cursor is optional and expressed through the
/// other traits in this module.
pub trait Cursor: Sized {
    /// The signed integer type measuring distances between positions.
    type Difference: DifferenceType;

    /// The storage wrapper the facade holds this cursor in.
    type Mixin: CursorMixin<Self>;
}

/// A cursor whose current element can be read.
///
/// `Reference` is exactly what `read` returns: a plain borrow (`&'a T`
/// carrying the cursor's own lifetime parameter) for cursors over in-place
/// storage, or the value type itself for cursors that synthesize elements
/// on demand. The [`CommonReference`] bound is the contract that both
/// forms can be borrowed as `&Value`; violating it is a compile error
/// here, at the cursor definition, rather than at some distant use site.
pub trait Readable: Cursor {
    /// The decayed element type.
    type Value;

    /// The exact type `read` returns.
    type Reference: CommonReference<Self::Value>;

    /// Reads the element at the current position.
    ///
    /// Reading a cursor that is past its last element is a precondition
    /// violation; implementations may panic.
    fn read(&self) -> Self::Reference;
}

/// A cursor whose current element can be overwritten with a `T`.
///
/// Writes are allowed to be lossy or converting (for example, a cursor
/// appending into a container may accept anything convertible into the
/// container's element type), so `Writable<T>` is parameterized over the
/// written type rather than tied to a single associated type.
pub trait Writable<T>: Cursor {
    /// Writes `value` at the current position.
    fn write(&mut self, value: T);
}

/// A cursor that can move one position forward.
pub trait Steppable: Cursor {
    /// Advances to the next position.
    fn next(&mut self);
}

/// A cursor that can also move one position backward.
pub trait BidiSteppable: Steppable {
    /// Retreats to the previous position.
    fn prev(&mut self);
}

/// A cursor that can jump by an arbitrary signed offset in one step.
pub trait RandomSteppable: BidiSteppable {
    /// Moves the position by `n`, which may be negative.
    fn advance(&mut self, n: Self::Difference);
}

/// A cursor comparable against a sentinel type `S` for end detection.
///
/// `S` may be the cursor type itself (making ordinary iterator equality
/// available) or a dedicated marker type.
pub trait Sentineled<S>: Cursor {
    /// Returns `true` if this cursor has reached `sentinel`.
    fn equal(&self, sentinel: &S) -> bool;

    /// Bounds on the number of forward steps remaining until `sentinel`,
    /// in `Iterator::size_hint` form.
    ///
    /// The default is the maximally conservative `(0, None)`. Cursors that
    /// also implement [`SizedSentineled<S>`] must override this to agree
    /// with `distance_to`.
    fn steps_hint(&self, sentinel: &S) -> (usize, Option<usize>) {
        let _ = sentinel;
        (0, None)
    }
}

/// A `Sentineled` cursor whose distance to the sentinel is known exactly.
pub trait SizedSentineled<S>: Sentineled<S> {
    /// Returns the number of forward steps from this cursor to `sentinel`.
    ///
    /// Negative results mean the sentinel lies behind this cursor. Both
    /// positions must belong to the same underlying sequence; measuring
    /// across unrelated sequences is a precondition violation.
    fn distance_to(&self, sentinel: &S) -> Self::Difference;
}

/// A readable cursor that can lend a plain borrow of its current element.
///
/// This is the member-access facet: the facade forwards `Deref` to
/// `arrow`, so `iterator.method()` reaches through to the element the way
/// `->` does on a pointer.
pub trait Arrow: Readable {
    /// Borrows the current element.
    fn arrow(&self) -> &Self::Value;
}

/// An `Arrow` cursor that can lend a mutable borrow of its current element.
pub trait ArrowMut: Arrow {
    /// Mutably borrows the current element.
    fn arrow_mut(&mut self) -> &mut Self::Value;
}

/// A readable cursor whose current element can be extracted by value.
///
/// The customization point behind the facade's `take_value`. Cursors over
/// storage they do not own typically implement this by cloning; cursors
/// over owned or replaceable storage can move the element out.
pub trait IndirectlyMovable: Readable {
    /// Extracts the element at the current position.
    fn indirect_move(&mut self) -> Self::Value;
}

/// A cursor that can exchange the elements at two positions.
///
/// The customization point behind the facade's `swap_with`. Both cursors
/// must refer into the same underlying sequence.
pub trait IndirectlySwappable: Cursor {
    /// Swaps the element at `self` with the element at `other`.
    fn indirect_swap(&mut self, other: &mut Self);
}

/// Opt-in marker: traversing this cursor twice yields the same elements.
///
/// Multi-pass support is what separates the forward tier from the input
/// tier. A cursor over a container can safely declare it; a cursor
/// draining a stream must not.
pub trait MultiPass: Cursor {}

/// Opt-in marker: the elements behind this cursor are laid out
/// contiguously in memory.
///
/// Requires [`Arrow`], which is the proof that `read` hands out plain
/// borrows of in-place storage rather than synthesized values.
pub trait ContiguousStorage: Arrow {
    /// Returns a raw pointer to the current element.
    fn storage_ptr(&self) -> *const Self::Value {
        self.arrow() as *const Self::Value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::mixin::DefaultMixin;

    // A cursor over an owned array, implementing the full capability set.
    #[derive(Clone, Default, Debug, PartialEq)]
    struct QuadCursor {
        data: [i32; 4],
        index: usize,
    }

    impl QuadCursor {
        fn new(data: [i32; 4]) -> Self {
            Self { data, index: 0 }
        }
    }

    impl Cursor for QuadCursor {
        type Difference = isize;
        type Mixin = DefaultMixin<Self>;
    }

    impl Readable for QuadCursor {
        type Value = i32;
        type Reference = i32;

        fn read(&self) -> i32 {
            self.data[self.index]
        }
    }

    impl Writable<i32> for QuadCursor {
        fn write(&mut self, value: i32) {
            self.data[self.index] = value;
        }
    }

    impl Steppable for QuadCursor {
        fn next(&mut self) {
            self.index += 1;
        }
    }

    impl BidiSteppable for QuadCursor {
        fn prev(&mut self) {
            self.index -= 1;
        }
    }

    impl RandomSteppable for QuadCursor {
        fn advance(&mut self, n: isize) {
            self.index = (self.index as isize + n) as usize;
        }
    }

    impl Sentineled<QuadCursor> for QuadCursor {
        fn equal(&self, other: &QuadCursor) -> bool {
            self.index == other.index
        }
    }

    impl SizedSentineled<QuadCursor> for QuadCursor {
        fn distance_to(&self, other: &QuadCursor) -> isize {
            other.index as isize - self.index as isize
        }
    }

    impl Arrow for QuadCursor {
        fn arrow(&self) -> &i32 {
            &self.data[self.index]
        }
    }

    impl MultiPass for QuadCursor {}

    #[test]
    fn test_read_write_round_trip() {
        let mut cursor = QuadCursor::new([1, 2, 3, 4]);
        assert_eq!(cursor.read(), 1);
        cursor.write(9);
        assert_eq!(cursor.read(), 9);
    }

    #[test]
    fn test_motion() {
        let mut cursor = QuadCursor::new([1, 2, 3, 4]);
        cursor.next();
        assert_eq!(cursor.read(), 2);
        cursor.prev();
        assert_eq!(cursor.read(), 1);
        cursor.advance(3);
        assert_eq!(cursor.read(), 4);
        cursor.advance(-3);
        assert_eq!(cursor.read(), 1);
    }

    #[test]
    fn test_distance_and_equality() {
        let begin = QuadCursor::new([1, 2, 3, 4]);
        let mut end = begin.clone();
        end.advance(4);
        assert!(!begin.equal(&end));
        assert_eq!(begin.distance_to(&end), 4);
        assert_eq!(end.distance_to(&begin), -4);
    }

    #[test]
    fn test_default_steps_hint_is_conservative() {
        let begin = QuadCursor::new([1, 2, 3, 4]);
        let end = begin.clone();
        assert_eq!(begin.steps_hint(&end), (0, None));
    }

    #[test]
    fn test_storage_ptr_tracks_arrow() {
        impl ContiguousStorage for QuadCursor {}

        let cursor = QuadCursor::new([5, 6, 7, 8]);
        assert_eq!(cursor.storage_ptr(), cursor.arrow() as *const i32);
        assert_eq!(unsafe { *cursor.storage_ptr() }, 5);
    }
}
