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

//! Arena records for the connectivity elements.
//!
//! Halfedges live in pairs at indices `2k` and `2k + 1`, so the opposite
//! of a halfedge is its index with the low bit flipped and no twin link
//! is stored. Removal only sets the `removed` flag: the stale links of a
//! removed record stay readable, which the cascading operators depend
//! on, and the slot is never reused.

use crate::graph::{FaceId, HalfedgeId, VertexId};

/// A vertex record: its point and one incoming halfedge.
#[derive(Clone, Debug)]
pub struct Vertex<P> {
    pub point: P,
    /// A halfedge whose target is this vertex; absent while isolated.
    pub half_edge: HalfedgeId,
    pub removed: bool,
}

impl<P> Vertex<P> {
    pub fn new(point: P) -> Self {
        Self { point, half_edge: HalfedgeId::absent(), removed: false }
    }
}

/// A halfedge record. The opposite is implicit in the index pairing.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// The vertex this halfedge points at.
    pub vertex: VertexId,
    /// Incident face; `None` on the border.
    pub face: Option<FaceId>,
    pub next: HalfedgeId,
    pub prev: HalfedgeId,
    pub removed: bool,
}

impl HalfEdge {
    pub fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            face: None,
            next: HalfedgeId::absent(),
            prev: HalfedgeId::absent(),
            removed: false,
        }
    }

    pub fn is_border(&self) -> bool {
        self.face.is_none()
    }
}

/// A face record: one halfedge of its cycle.
#[derive(Clone, Debug)]
pub struct Face {
    pub half_edge: HalfedgeId,
    pub removed: bool,
}

impl Face {
    pub fn new(half_edge: HalfedgeId) -> Self {
        Self { half_edge, removed: false }
    }
}
