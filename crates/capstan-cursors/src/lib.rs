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

//! # Capstan Cursors
//!
//! A library of concrete cursor types for the `capstan-core` facade,
//! covering every capability tier from single-pass streams to contiguous
//! slices. Each cursor doubles as a worked example of the protocol: it
//! declares its difference type and mixin, implements exactly the
//! capabilities it supports, and lands on the tier those capabilities
//! imply.
//!
//! ## Modules
//!
//! - `slice`: `SliceCursor` (contiguous tier, the full ladder) and
//!   `SliceCursorMut` (single-pass in-place writer).
//! - `cell`: `CellSliceCursor`, a writable random access cursor over
//!   `&[Cell<T>]` with shared mutability and element swapping.
//! - `counted`: `CountedCursor`, wrapping any cursor with a countdown and
//!   forwarding its capabilities unchanged.
//! - `repeat`: `RepeatCursor`, an endless generator of one value.
//! - `insert`: write-only cursors appending or prepending into standard
//!   containers, with `back_inserter`/`front_inserter` helpers.
//! - `adapter`: `IterCursor`, the bridge from any `std::iter::Iterator`
//!   into the cursor world.
//! - `trace`: `TraceCursor`, an instrumentation wrapper logging every
//!   primitive call through the `log` facade.
//!
//! Refer to each module for detailed APIs and examples.

pub mod adapter;
pub mod cell;
pub mod counted;
pub mod insert;
pub mod repeat;
pub mod slice;
pub mod trace;
