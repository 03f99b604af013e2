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

//! # Difference Type Bound
//!
//! Unified numeric bounds for cursor distance arithmetic. Every cursor
//! declares an associated `Difference` type; this module pins down what
//! that type must be able to do.

use num_traits::{PrimInt, Signed};

/// A trait alias for the signed primitive integers a cursor may use as its
/// difference type.
///
/// Distances between positions can be negative (a cursor may lie before a
/// sentinel or after it), so unsigned types are rejected by construction.
/// These are usually `i8`, `i16`, `i32`, `i64`, `i128`, and `isize`;
/// cursors with no better choice conventionally declare `isize`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::concept::numeric::DifferenceType;
/// fn midpoint<D: DifferenceType>(a: D, b: D) -> D {
///     a + (b - a) / (D::one() + D::one())
/// }
///
/// assert_eq!(midpoint(0_isize, 10), 5);
/// assert_eq!(midpoint(-4_i32, 4), 0);
/// ```
pub trait DifferenceType: PrimInt + Signed + Default + std::fmt::Debug {}

impl<T> DifferenceType for T where T: PrimInt + Signed + Default + std::fmt::Debug {}
