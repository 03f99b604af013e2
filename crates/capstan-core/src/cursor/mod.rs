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

//! # The Cursor Protocol
//!
//! A cursor is a minimal position type. It declares a difference type and a
//! storage mixin, and then implements whichever of the narrow capability
//! traits it can honestly support: reading, writing, stepping forward or
//! backward, random jumps, and comparison against sentinels. Nothing else
//! is required; the facade in `crate::iter` derives the complete iterator
//! interface from exactly this profile.
//!
//! ## Submodules
//!
//! - `capability`: The base `Cursor` trait and the capability traits
//!   (`Readable`, `Writable`, `Steppable`, `BidiSteppable`,
//!   `RandomSteppable`, `Sentineled`, `SizedSentineled`) plus the side
//!   facets (`Arrow`, `ArrowMut`, `IndirectlyMovable`,
//!   `IndirectlySwappable`, `MultiPass`, `ContiguousStorage`).
//! - `tier`: The ordered capability tiers (`InputCursor` through
//!   `ContiguousCursor`), blanket-derived from the capability traits, with
//!   the descriptive `Category` tag and compile-time tier witnesses.
//! - `mixin`: The storage layer the facade embeds a cursor through, with
//!   `DefaultMixin` as the thin pass-through and `CursorMixin` as the
//!   customization point.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod capability;
pub mod mixin;
pub mod tier;
