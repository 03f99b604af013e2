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

//! # Capstan Core
//!
//! The cursor-to-iterator lifting machinery of the Capstan ecosystem. A
//! *cursor* is a minimal position type exposing whichever subset of
//! read/write/step/compare primitives it can honestly support; this crate
//! lifts any such cursor into a full iterator whose operation set is a pure
//! function of the cursor's declared capabilities, with zero runtime
//! overhead and no dynamic dispatch.
//!
//! ## Modules
//!
//! - `concept`: Foundational trait aliases and witnesses: `Semiregular` and
//!   `Regular` value-semantics bundles, the `DifferenceType` signed-integer
//!   bound, and the `CommonReference` relation between a cursor's value and
//!   reference types.
//! - `cursor`: The cursor protocol itself: the narrow capability traits
//!   (`Readable`, `Writable`, `Steppable`, ...), the ordered capability
//!   tiers (`InputCursor` through `ContiguousCursor`) with their category
//!   tags, and the mixin storage layer.
//! - `iter`: The consumer-facing surface: `BasicIterator` (the facade),
//!   `ProxyRef` (the write-through stand-in returned from mutable
//!   dereference), the `DefaultSentinel`/`Unreachable` end markers, and
//!   `CursorRange`, the bridge into `std::iter`.
//!
//! ## Purpose
//!
//! Container and generator authors implement a handful of small trait
//! methods on a cursor type and get a complete, correctly-classified
//! iterator for free. Algorithms stay generic over capability bounds and
//! pay nothing for capabilities they do not use.
//!
//! Refer to each module for detailed APIs and examples.

pub mod concept;
pub mod cursor;
pub mod iter;
