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

//! Full-mesh topology audit, for tests and debugging.
//!
//! [`PolyMesh::validate`] walks every live element and reports the first
//! broken invariant as a [`TopologyError`]. It is linear-ish in the mesh
//! size and meant for test harnesses, not hot paths.

use thiserror::Error;

use crate::graph::HalfedgeGraph;
use crate::mesh::PolyMesh;

/// A broken connectivity invariant, identified by arena index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("halfedge {h} is live but its opposite is removed")]
    HalfRemovedPair { h: usize },
    #[error("halfedge {h} has an absent or removed link")]
    DanglingLink { h: usize },
    #[error("halfedge {h}: next/prev are not reciprocal")]
    BrokenReciprocity { h: usize },
    #[error("halfedge {h}: target disagrees with the source of next")]
    TargetMismatch { h: usize },
    #[error("next-cycle through halfedge {h} does not close")]
    OpenCycle { h: usize },
    #[error("halfedge {h}: face label differs from the rest of its cycle")]
    MixedFaceCycle { h: usize },
    #[error("vertex cycle at vertex {v} does not close or leaves the vertex")]
    BrokenVertexCycle { v: usize },
    #[error("vertex {v}: representative halfedge is removed or mistargeted")]
    BadVertexRepresentative { v: usize },
    #[error("face {f}: representative halfedge is removed or mislabeled")]
    BadFaceRepresentative { f: usize },
}

impl<P> PolyMesh<P> {
    /// Checks every connectivity invariant over the live elements.
    pub fn validate(&self) -> Result<(), TopologyError> {
        self.check_halfedges()?;
        self.check_cycles()?;
        self.check_vertices()?;
        self.check_faces()?;
        Ok(())
    }

    fn check_halfedges(&self) -> Result<(), TopologyError> {
        for h in self.live_halfedges() {
            if self.is_removed_halfedge(h.paired()) {
                return Err(TopologyError::HalfRemovedPair { h: h.index() });
            }
            let n = self.next(h);
            let p = self.prev(h);
            if n.is_absent()
                || p.is_absent()
                || self.is_removed_halfedge(n)
                || self.is_removed_halfedge(p)
                || self.is_removed_vertex(self.target(h))
            {
                return Err(TopologyError::DanglingLink { h: h.index() });
            }
            if self.prev(n) != h || self.next(p) != h {
                return Err(TopologyError::BrokenReciprocity { h: h.index() });
            }
            if self.source(n) != self.target(h) {
                return Err(TopologyError::TargetMismatch { h: h.index() });
            }
            if let Some(f) = self.face(h)
                && self.is_removed_face(f)
            {
                return Err(TopologyError::DanglingLink { h: h.index() });
            }
        }
        Ok(())
    }

    // Every live halfedge sits on exactly one closed next-cycle whose
    // face labels all agree.
    fn check_cycles(&self) -> Result<(), TopologyError> {
        let bound = self.halfedge_bound();
        let mut seen = vec![false; bound];
        for h in self.live_halfedges() {
            if seen[h.index()] {
                continue;
            }
            let f = self.face(h);
            let mut cur = h;
            let mut steps = 0usize;
            loop {
                if self.face(cur) != f {
                    return Err(TopologyError::MixedFaceCycle { h: cur.index() });
                }
                seen[cur.index()] = true;
                cur = self.next(cur);
                steps += 1;
                if cur == h {
                    break;
                }
                if steps > bound {
                    return Err(TopologyError::OpenCycle { h: h.index() });
                }
            }
        }
        Ok(())
    }

    fn check_vertices(&self) -> Result<(), TopologyError> {
        let bound = self.halfedge_bound();
        for v in self.live_vertices() {
            let rep = self.halfedge_of_vertex(v);
            if rep.is_absent() {
                // Isolated vertices are legal.
                continue;
            }
            if self.is_removed_halfedge(rep) || self.target(rep) != v {
                return Err(TopologyError::BadVertexRepresentative { v: v.index() });
            }
            let mut cur = rep;
            let mut steps = 0usize;
            loop {
                if self.target(cur) != v {
                    return Err(TopologyError::BrokenVertexCycle { v: v.index() });
                }
                cur = self.opposite(self.next(cur));
                steps += 1;
                if cur == rep {
                    break;
                }
                if steps > bound {
                    return Err(TopologyError::BrokenVertexCycle { v: v.index() });
                }
            }
        }
        Ok(())
    }

    fn check_faces(&self) -> Result<(), TopologyError> {
        for f in self.live_faces() {
            let rep = self.halfedge_of_face(f);
            if rep.is_absent()
                || self.is_removed_halfedge(rep)
                || self.face(rep) != Some(f)
            {
                return Err(TopologyError::BadFaceRepresentative { f: f.index() });
            }
        }
        Ok(())
    }
}
