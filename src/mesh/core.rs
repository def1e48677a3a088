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

//! Arena-backed polygon mesh implementing the halfedge graph traits.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::graph::{EdgeId, FaceId, HalfedgeId, VertexId};
use crate::graph::{HalfedgeGraph, MutableHalfedgeGraph};
use crate::mesh::half_edge::{Face, HalfEdge, Vertex};

/// A polygon mesh with halfedge connectivity over `Vec` arenas.
///
/// `P` is the point payload attached to each vertex; the connectivity
/// layer never looks inside it. Construction goes through
/// [`add_vertex`](PolyMesh::add_vertex) and
/// [`add_polygon`](PolyMesh::add_polygon); all later surgery goes
/// through the operators in [`crate::euler`] via the graph traits.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh<P> {
    pub vertices: Vec<Vertex<P>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
    // Directed (from, to) -> halfedge, maintained by add_polygon only.
    // Euler operators bypass it, so it is stale once surgery starts and
    // lookups after that must go through find_halfedge.
    edge_map: AHashMap<(usize, usize), usize>,
}

impl<P> PolyMesh<P> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, point: P) -> VertexId {
        let v = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(point));
        v
    }

    /// Adds a face over existing vertices, given counterclockwise.
    ///
    /// Shared edges are stitched to previously added faces; free edges
    /// get a border halfedge threaded into the border loops around the
    /// corner vertices. Vertices with several fan blades are supported;
    /// the blade order is rearranged when a face reconnects two blades.
    /// Adding a face on an already claimed directed edge, or closing the
    /// last border gap at a vertex with free sides still attached, is a
    /// caller error.
    pub fn add_polygon(&mut self, verts: &[VertexId]) -> FaceId {
        assert!(verts.len() >= 3, "add_polygon: need at least 3 vertices");
        let n = verts.len();

        // Claim or create the directed halfedge of each side. During
        // construction every existing edge bounds exactly one face, so
        // a side is free exactly when it was created here.
        let mut sides: SmallVec<[HalfedgeId; 8]> = SmallVec::new();
        let mut is_new: SmallVec<[bool; 8]> = SmallVec::new();
        for k in 0..n {
            let from = verts[k];
            let to = verts[(k + 1) % n];
            debug_assert!(from != to, "add_polygon: repeated vertex");
            let h = match self.edge_map.get(&(from.index(), to.index())) {
                Some(&idx) => {
                    let h = HalfedgeId::new(idx);
                    assert!(
                        self.half_edges[h.index()].face.is_none(),
                        "add_polygon: directed edge already claimed (non-manifold input)"
                    );
                    is_new.push(false);
                    h
                }
                None => {
                    let h = HalfedgeId::new(self.half_edges.len());
                    self.half_edges.push(HalfEdge::new(to));
                    self.half_edges.push(HalfEdge::new(from));
                    self.edge_map.insert((from.index(), to.index()), h.index());
                    self.edge_map.insert((to.index(), from.index()), h.index() ^ 1);
                    is_new.push(true);
                    h
                }
            };
            sides.push(h);
        }

        let f = FaceId::new(self.faces.len());
        self.faces.push(Face::new(sides[0]));
        for k in 0..n {
            self.half_edges[sides[k].index()].face = Some(f);
        }

        // Fix the next links corner by corner. All writes go through
        // raw `next` only and are recorded; `prev` is rebuilt from the
        // final links afterwards, since intermediate states are not
        // reciprocal. At corner k the two outer halfedges are `incoming`
        // (twin of the side leaving the corner) and `outgoing` (twin of
        // the side arriving at it); the four cases branch on whether
        // each side pre-existed, i.e. on whether its twin bounds a face.
        let mut touched: SmallVec<[HalfedgeId; 16]> = SmallVec::new();
        for k in 0..n {
            let kp = (k + n - 1) % n;
            let v = verts[k];
            let incoming = sides[k].paired();
            let outgoing = sides[kp].paired();
            match (!is_new[k], !is_new[kp]) {
                (false, false) => {
                    let rep = self.vertices[v.index()].half_edge;
                    if rep.is_absent() {
                        // Both sides are fresh and the corner vertex has
                        // no other edges.
                        self.half_edges[incoming.index()].next = outgoing;
                        touched.push(incoming);
                    } else {
                        // The corner already carries fan blades; splice
                        // the new blade in after the end of one of them.
                        let end = self
                            .incoming_border_around(rep)
                            .expect("add_polygon: no border gap at vertex");
                        let start = self.half_edges[end.index()].next;
                        self.half_edges[incoming.index()].next = start;
                        self.half_edges[end.index()].next = outgoing;
                        touched.push(incoming);
                        touched.push(end);
                    }
                }
                (true, false) => {
                    // The halfedge that led into the claimed side on its
                    // old border loop must lead into the new border twin.
                    let before = self.link_prev(sides[k]);
                    self.half_edges[before.index()].next = outgoing;
                    touched.push(before);
                }
                (false, true) => {
                    self.half_edges[incoming.index()].next =
                        self.half_edges[sides[kp].index()].next;
                    touched.push(incoming);
                }
                (true, true) => {
                    // Two pre-existing sides meet here; unless they are
                    // already consecutive on their border loop, the blade
                    // between them is moved out of the gap first.
                    if self.half_edges[sides[kp].index()].next != sides[k] {
                        let extra_end = self.link_prev(sides[k]);
                        let blade_end = self
                            .incoming_border_around(incoming)
                            .expect("add_polygon: no border gap at vertex");
                        self.half_edges[extra_end.index()].next =
                            self.half_edges[blade_end.index()].next;
                        self.half_edges[blade_end.index()].next =
                            self.half_edges[sides[kp].index()].next;
                        touched.push(extra_end);
                        touched.push(blade_end);
                    }
                }
            }
        }

        for k in 0..n {
            self.half_edges[sides[k].index()].next = sides[(k + 1) % n];
            touched.push(sides[k]);
        }

        // Every halfedge whose successor changed is in `touched`, so
        // this restores prev reciprocity for the whole mesh.
        for &h in &touched {
            let nx = self.half_edges[h.index()].next;
            self.half_edges[nx.index()].prev = h;
        }

        for k in 0..n {
            let v = verts[(k + 1) % n];
            self.vertices[v.index()].half_edge = sides[k];
        }
        f
    }

    // Circulates the incoming halfedges around the target of `start`
    // and returns the first border one, `start` included.
    fn incoming_border_around(&self, start: HalfedgeId) -> Option<HalfedgeId> {
        let mut inc = start;
        loop {
            if self.half_edges[inc.index()].face.is_none() {
                return Some(inc);
            }
            let step = self.half_edges[inc.index()].next.paired();
            if step == start {
                return None;
            }
            inc = step;
        }
    }

    // The halfedge whose next link points at `h`, found by circulating
    // the incoming halfedges around its source vertex. Valid while prev
    // links are being rebuilt.
    fn link_prev(&self, h: HalfedgeId) -> HalfedgeId {
        let start = h.paired();
        let mut inc = start;
        loop {
            if self.half_edges[inc.index()].next == h {
                return inc;
            }
            inc = self.half_edges[inc.index()].next.paired();
            assert!(inc != start, "add_polygon: border around vertex cannot be resolved");
        }
    }

    /// Finds the live halfedge from `a` to `b` by scanning, valid even
    /// after the construction index has gone stale.
    pub fn find_halfedge(&self, a: VertexId, b: VertexId) -> Option<HalfedgeId> {
        for (idx, he) in self.half_edges.iter().enumerate() {
            if he.removed || he.vertex != b {
                continue;
            }
            let h = HalfedgeId::new(idx);
            if self.half_edges[h.paired().index()].vertex == a {
                return Some(h);
            }
        }
        None
    }

    pub fn point(&self, v: VertexId) -> &P {
        &self.vertices[v.index()].point
    }

    pub fn point_mut(&mut self, v: VertexId) -> &mut P {
        &mut self.vertices[v.index()].point
    }

    pub fn is_removed_vertex(&self, v: VertexId) -> bool {
        self.vertices[v.index()].removed
    }

    pub fn is_removed_halfedge(&self, h: HalfedgeId) -> bool {
        self.half_edges[h.index()].removed
    }

    pub fn is_removed_face(&self, f: FaceId) -> bool {
        self.faces[f.index()].removed
    }

    /// Number of vertices not flagged removed.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.removed).count()
    }

    /// Number of live edges (halfedge pairs).
    pub fn edge_count(&self) -> usize {
        self.half_edges.iter().step_by(2).filter(|h| !h.removed).count()
    }

    pub fn halfedge_count(&self) -> usize {
        self.half_edges.iter().filter(|h| !h.removed).count()
    }

    /// Number of faces not flagged removed.
    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.removed).count()
    }

    /// V - E + F over the live elements.
    pub fn euler_characteristic(&self) -> isize {
        self.vertex_count() as isize - self.edge_count() as isize + self.face_count() as isize
    }

    pub fn live_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.removed)
            .map(|(i, _)| VertexId::new(i))
    }

    pub fn live_halfedges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.removed)
            .map(|(i, _)| HalfedgeId::new(i))
    }

    pub fn live_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .step_by(2)
            .filter(|(_, h)| !h.removed)
            .map(|(i, _)| HalfedgeId::new(i).edge())
    }

    pub fn live_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.removed)
            .map(|(i, _)| FaceId::new(i))
    }
}

impl<P> HalfedgeGraph for PolyMesh<P> {
    fn next(&self, h: HalfedgeId) -> HalfedgeId {
        self.half_edges[h.index()].next
    }

    fn prev(&self, h: HalfedgeId) -> HalfedgeId {
        self.half_edges[h.index()].prev
    }

    fn opposite(&self, h: HalfedgeId) -> HalfedgeId {
        debug_assert!(!h.is_absent());
        h.paired()
    }

    fn target(&self, h: HalfedgeId) -> VertexId {
        self.half_edges[h.index()].vertex
    }

    fn face(&self, h: HalfedgeId) -> Option<FaceId> {
        self.half_edges[h.index()].face
    }

    fn edge(&self, h: HalfedgeId) -> EdgeId {
        h.edge()
    }

    fn halfedge_of_edge(&self, e: EdgeId) -> HalfedgeId {
        e.halfedge()
    }

    fn halfedge_of_vertex(&self, v: VertexId) -> HalfedgeId {
        self.vertices[v.index()].half_edge
    }

    fn halfedge_of_face(&self, f: FaceId) -> HalfedgeId {
        self.faces[f.index()].half_edge
    }

    fn halfedge_bound(&self) -> usize {
        self.half_edges.len()
    }
}

impl<P: Default> MutableHalfedgeGraph for PolyMesh<P> {
    fn add_vertex(&mut self) -> VertexId {
        PolyMesh::add_vertex(self, P::default())
    }

    fn add_edge(&mut self) -> EdgeId {
        let h = HalfedgeId::new(self.half_edges.len());
        self.half_edges.push(HalfEdge::new(VertexId::absent()));
        self.half_edges.push(HalfEdge::new(VertexId::absent()));
        h.edge()
    }

    fn add_face(&mut self) -> FaceId {
        let f = FaceId::new(self.faces.len());
        self.faces.push(Face::new(HalfedgeId::absent()));
        f
    }

    fn remove_vertex(&mut self, v: VertexId) {
        let rec = &mut self.vertices[v.index()];
        debug_assert!(!rec.removed, "vertex removed twice");
        rec.removed = true;
    }

    fn remove_edge(&mut self, e: EdgeId) {
        let h = e.halfedge();
        debug_assert!(!self.half_edges[h.index()].removed, "edge removed twice");
        self.half_edges[h.index()].removed = true;
        self.half_edges[h.paired().index()].removed = true;
    }

    fn remove_face(&mut self, f: FaceId) {
        let rec = &mut self.faces[f.index()];
        debug_assert!(!rec.removed, "face removed twice");
        rec.removed = true;
    }

    fn set_next(&mut self, h: HalfedgeId, n: HalfedgeId) {
        self.half_edges[h.index()].next = n;
        self.half_edges[n.index()].prev = h;
    }

    fn set_target(&mut self, h: HalfedgeId, v: VertexId) {
        self.half_edges[h.index()].vertex = v;
    }

    fn set_face(&mut self, h: HalfedgeId, f: Option<FaceId>) {
        self.half_edges[h.index()].face = f;
    }

    fn set_vertex_halfedge(&mut self, v: VertexId, h: HalfedgeId) {
        self.vertices[v.index()].half_edge = h;
    }

    fn set_face_halfedge(&mut self, f: FaceId, h: HalfedgeId) {
        self.faces[f.index()].half_edge = h;
    }
}
