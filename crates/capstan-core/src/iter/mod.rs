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

//! # The Iterator Surface
//!
//! Everything a consumer of a cursor sees: the facade that lifts a cursor
//! into an iterator, the proxy returned from mutable dereference, the
//! sentinel markers, and the bridge into `std::iter`.
//!
//! ## Submodules
//!
//! - `facade`: `BasicIterator<C>`, the generic iterator whose operation
//!   set mirrors the wrapped cursor's capability profile exactly.
//! - `proxy`: `ProxyRef<'_, C>`, the read/write stand-in handed out when
//!   no plain reference can serve both roles.
//! - `sentinel`: `DefaultSentinel` and `Unreachable`, the two stock end
//!   markers, plus their facade interop.
//! - `range`: `CursorRange<C, S>`, a cursor/sentinel pair implementing the
//!   standard iterator traits so cursors plug into `for` loops, adapters,
//!   and `collect`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod facade;
pub mod proxy;
pub mod range;
pub mod sentinel;
