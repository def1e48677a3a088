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

//! Cycle circulators.
//!
//! Both iterators yield each halfedge of their cycle exactly once, starting
//! at the given halfedge and stopping when it recurs. They are bounded by the
//! host's halfedge count: a cycle that fails to close within that many steps
//! means the `next` links are corrupt, and the circulator panics rather than
//! spinning forever.

use crate::graph::handles::HalfedgeId;
use crate::graph::traits::HalfedgeGraph;

/// Halfedges around the face (or border) cycle of a starting halfedge,
/// linked via `next`.
pub struct FaceCirculator<'a, G: HalfedgeGraph> {
    graph: &'a G,
    start: HalfedgeId,
    current: HalfedgeId,
    steps: usize,
    done: bool,
}

impl<'a, G: HalfedgeGraph> FaceCirculator<'a, G> {
    pub fn new(graph: &'a G, start: HalfedgeId) -> Self {
        Self {
            graph,
            start,
            current: start,
            steps: 0,
            done: start.is_absent(),
        }
    }
}

impl<'a, G: HalfedgeGraph> Iterator for FaceCirculator<'a, G> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.steps += 1;
        if self.steps > self.graph.halfedge_bound() {
            panic!("face cycle at {:?} does not close", self.start);
        }
        self.current = self.graph.next(self.current);
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Halfedges incident to (pointing at) one vertex, linked via
/// `opposite(next(·))`. The starting halfedge determines the vertex.
pub struct VertexCirculator<'a, G: HalfedgeGraph> {
    graph: &'a G,
    start: HalfedgeId,
    current: HalfedgeId,
    steps: usize,
    done: bool,
}

impl<'a, G: HalfedgeGraph> VertexCirculator<'a, G> {
    pub fn new(graph: &'a G, start: HalfedgeId) -> Self {
        Self {
            graph,
            start,
            current: start,
            steps: 0,
            done: start.is_absent(),
        }
    }
}

impl<'a, G: HalfedgeGraph> Iterator for VertexCirculator<'a, G> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.steps += 1;
        if self.steps > self.graph.halfedge_bound() {
            panic!("vertex cycle at {:?} does not close", self.start);
        }
        self.current = self.graph.opposite(self.graph.next(self.current));
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Halfedges around the face cycle of `h`.
pub fn halfedges_around_face<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> FaceCirculator<'_, G> {
    FaceCirculator::new(g, h)
}

/// Halfedges around `target(h)`, beginning with `h` itself.
pub fn halfedges_around_target<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> VertexCirculator<'_, G> {
    VertexCirculator::new(g, h)
}

/// Number of edges on the face (or border) cycle of `h`.
pub fn face_degree<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> usize {
    halfedges_around_face(g, h).count()
}

/// Number of edges incident to `target(h)`.
pub fn target_degree<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> usize {
    halfedges_around_target(g, h).count()
}
