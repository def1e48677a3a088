// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Typed handles for mesh elements.
//!
//! A handle is just an index into the host mesh's arenas, wrapped so that a
//! vertex index cannot be passed where a halfedge index is expected. Handles
//! become invalid the instant the element they name is removed; dereferencing
//! a stale handle is a caller bug.

use std::fmt;

/// Sentinel index used by all handle types for "no element".
pub const ABSENT: usize = usize::MAX;

macro_rules! define_handle {
    ($name:ident, $short:literal) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub(crate) usize);

        impl $name {
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(index)
            }

            #[inline]
            pub fn absent() -> Self {
                Self(ABSENT)
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0
            }

            #[inline]
            pub fn is_absent(self) -> bool {
                self.0 == ABSENT
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::absent()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_absent() {
                    write!(f, concat!($short, "(absent)"))
                } else {
                    write!(f, concat!($short, "({})"), self.0)
                }
            }
        }
    };
}

define_handle!(VertexId, "v");
define_handle!(HalfedgeId, "h");
define_handle!(EdgeId, "e");
define_handle!(FaceId, "f");

impl HalfedgeId {
    /// The paired halfedge of the same edge. Halfedges are allocated in
    /// pairs `2k`/`2k+1`, so the involution is a single bit flip and can
    /// never have a fixed point.
    #[inline]
    pub fn paired(self) -> HalfedgeId {
        HalfedgeId(self.0 ^ 1)
    }

    /// The edge this halfedge is one side of.
    #[inline]
    pub fn edge(self) -> EdgeId {
        EdgeId(self.0 >> 1)
    }
}

impl EdgeId {
    /// The canonical (even-indexed) halfedge of this edge.
    #[inline]
    pub fn halfedge(self) -> HalfedgeId {
        HalfedgeId(self.0 << 1)
    }
}
