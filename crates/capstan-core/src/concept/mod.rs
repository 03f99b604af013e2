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

//! # Foundational Concepts
//!
//! Trait aliases and witnesses shared by the cursor protocol and the
//! iterator facade. These collect the recurring bounds of the crate into
//! named, documented concepts so that generic signatures stay readable.
//!
//! ## Submodules
//!
//! - `semiregular`: `Semiregular` (default-constructible and copyable) and
//!   `Regular` (additionally equality-comparable) blanket aliases.
//! - `numeric`: `DifferenceType`, the signed primitive integer bound every
//!   cursor difference type must satisfy.
//! - `common_ref`: `CommonReference<V>`, the witness that a cursor's
//!   reference type and its value type agree on a common borrowed form.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod common_ref;
pub mod numeric;
pub mod semiregular;
