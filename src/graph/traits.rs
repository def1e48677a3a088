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

//! The halfedge-graph capability the Euler operators are written against.
//!
//! Any mesh container that can answer the six traversal queries and apply the
//! handful of link mutators below can be driven by every operator in
//! [`crate::euler`]. The contract mirrors a classic halfedge data structure:
//!
//! - `next` chains halfedges into closed face (or border) cycles;
//! - `opposite` is a fixed-point-free involution pairing the two sides of an
//!   edge;
//! - `target(h) == source(next(h))` along every cycle;
//! - a vertex's representative halfedge points *at* the vertex
//!   (`target(halfedge_of_vertex(v)) == v`);
//! - a face's representative halfedge lies on its cycle.
//!
//! `set_next(h, n)` must establish both `next(h) == n` and `prev(n) == h`;
//! operators never set `prev` separately.
//!
//! Removal invalidates handles immediately. Implementations are free to keep
//! the stale record readable until compaction (the arena in [`crate::mesh`]
//! does), which lets an operator finish reading links it captured before the
//! removal call. The operators rely on that, never on re-resolving a removed
//! handle.

use crate::graph::handles::{EdgeId, FaceId, HalfedgeId, VertexId};

/// Read-only traversal over a halfedge mesh.
pub trait HalfedgeGraph {
    /// Next halfedge around the face (or border) cycle of `h`.
    fn next(&self, h: HalfedgeId) -> HalfedgeId;

    /// Previous halfedge around the face (or border) cycle of `h`.
    fn prev(&self, h: HalfedgeId) -> HalfedgeId;

    /// The paired halfedge of the same edge.
    fn opposite(&self, h: HalfedgeId) -> HalfedgeId;

    /// The vertex `h` points at.
    fn target(&self, h: HalfedgeId) -> VertexId;

    /// The vertex `h` leaves from.
    #[inline]
    fn source(&self, h: HalfedgeId) -> VertexId {
        self.target(self.opposite(h))
    }

    /// The face incident to `h`, or `None` for a border halfedge.
    fn face(&self, h: HalfedgeId) -> Option<FaceId>;

    /// True when `h` bounds a hole rather than a face.
    #[inline]
    fn is_border(&self, h: HalfedgeId) -> bool {
        self.face(h).is_none()
    }

    /// The edge `h` is one side of.
    fn edge(&self, h: HalfedgeId) -> EdgeId;

    /// The canonical halfedge of `e`.
    fn halfedge_of_edge(&self, e: EdgeId) -> HalfedgeId;

    /// The representative *incoming* halfedge of `v`.
    fn halfedge_of_vertex(&self, v: VertexId) -> HalfedgeId;

    /// The representative halfedge on the cycle of `f`.
    fn halfedge_of_face(&self, f: FaceId) -> HalfedgeId;

    /// Upper bound on halfedge indices ever handed out, including removed
    /// slots. Used by circulators to bound cycle walks.
    fn halfedge_bound(&self) -> usize;
}

/// Mutation on top of [`HalfedgeGraph`]. Everything an Euler operator needs
/// from its host, and nothing more.
pub trait MutableHalfedgeGraph: HalfedgeGraph {
    /// Adds an isolated vertex with default payload.
    fn add_vertex(&mut self) -> VertexId;

    /// Adds an unlinked halfedge pair. Links, targets, and faces of both
    /// halfedges are unspecified until the caller wires them.
    fn add_edge(&mut self) -> EdgeId;

    /// Adds a face with no representative halfedge yet.
    fn add_face(&mut self) -> FaceId;

    fn remove_vertex(&mut self, v: VertexId);
    fn remove_edge(&mut self, e: EdgeId);
    fn remove_face(&mut self, f: FaceId);

    /// Links `n` after `h`, establishing `next(h) == n` and `prev(n) == h`.
    fn set_next(&mut self, h: HalfedgeId, n: HalfedgeId);

    /// Redirects `h` to point at `v`.
    fn set_target(&mut self, h: HalfedgeId, v: VertexId);

    /// Assigns the incident face of `h`; `None` marks it a border halfedge.
    fn set_face(&mut self, h: HalfedgeId, f: Option<FaceId>);

    /// Sets the representative incoming halfedge of `v`.
    fn set_vertex_halfedge(&mut self, v: VertexId, h: HalfedgeId);

    /// Sets the representative halfedge of `f`.
    fn set_face_halfedge(&mut self, f: FaceId, h: HalfedgeId);
}
