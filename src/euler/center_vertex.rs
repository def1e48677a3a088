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

//! Star triangulation of a face and its inverse.

use crate::graph::HalfedgeId;
use crate::graph::circulators::halfedges_around_target;
use crate::graph::decorator::{
    close_tip, insert_tip, remove_tip, set_face_in_face_loop, set_vertex_halfedge_to,
};
use crate::graph::{HalfedgeGraph, MutableHalfedgeGraph};

/// Triangulates `face(h)` from a new vertex placed in its center.
///
/// Each corner of the face gets a spoke to the new vertex; a face of
/// degree `n` becomes `n` triangles. Returns the halfedge from
/// `target(h)` to the new vertex, which is `next(h)` afterwards.
pub fn add_center_vertex<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    debug_assert!(!g.is_border(h), "add_center_vertex: h is a border halfedge");

    let e = g.add_edge();
    let hnew = g.halfedge_of_edge(e);
    let vnew = g.add_vertex();
    close_tip(g, hnew, vnew);
    let hnewop = g.opposite(hnew);
    insert_tip(g, hnewop, h);
    let fh = g.face(h);
    g.set_face(hnew, fh);
    if let Some(f) = fh {
        g.set_face_halfedge(f, h);
    }

    // Fan out: one new spoke and one new triangle per remaining corner.
    let mut h2 = g.next(g.opposite(hnew));
    while g.next(h2) != hnew {
        let e2 = g.add_edge();
        let gnew = g.halfedge_of_edge(e2);
        insert_tip(g, gnew, hnew);
        let gnewop = g.opposite(gnew);
        insert_tip(g, gnewop, h2);
        let fnew = g.add_face();
        g.set_face(h2, Some(fnew));
        g.set_face(gnew, Some(fnew));
        let ng = g.next(gnew);
        g.set_face(ng, Some(fnew));
        g.set_face_halfedge(fnew, h2);
        h2 = g.next(g.opposite(gnew));
    }
    let nh = g.next(hnew);
    let fh = g.face(hnew);
    g.set_face(nh, fh);
    set_vertex_halfedge_to(g, hnew);
    hnew
}

// Removing the hub of a closed fan whose rim bounds a single other face
// would leave two faces glued along their whole boundary, as with the
// apex of a tetrahedron. Holes in the rim make the removal safe again.
fn center_vertex_removable<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> bool {
    let mut rim_face = None;
    let mut rim_uniform = true;
    for spoke in halfedges_around_target(g, h) {
        if g.is_border(spoke) {
            return false;
        }
        // The face of a spoke holds exactly two spokes, the incoming one
        // and its next; the rest of the cycle is rim. The faces across
        // those rim edges are the neighbors of the merged face.
        let mut x = g.next(g.next(spoke));
        while x != spoke {
            match g.face(g.opposite(x)) {
                None => rim_uniform = false,
                Some(f) => match rim_face {
                    None => rim_face = Some(f),
                    Some(seen) if seen != f => rim_uniform = false,
                    Some(_) => {}
                },
            }
            x = g.next(x);
        }
    }
    !(rim_uniform && rim_face.is_some())
}

/// Deletes `target(h)` together with all its incident edges, merging the
/// incident faces into the single face that `h` belonged to.
///
/// Returns `prev(h)`, which lies on the merged face. Inverse of
/// [`add_center_vertex`]. No face around the vertex may be a hole, and
/// the merged face must not end up glued to a single rim face along its
/// entire boundary.
pub fn remove_center_vertex<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    debug_assert!(
        center_vertex_removable(g, h),
        "remove_center_vertex: vertex is not removable"
    );

    let mut h2 = g.opposite(g.next(h));
    let hret = g.prev(h);
    while h2 != h {
        let gprev = g.prev(h2);
        set_vertex_halfedge_to(g, gprev);
        remove_tip(g, gprev);
        if let Some(f) = g.face(h2) {
            g.remove_face(f);
        }
        let gnext = g.opposite(g.next(h2));
        let e = g.edge(h2);
        g.remove_edge(e);
        h2 = gnext;
    }
    set_vertex_halfedge_to(g, hret);
    remove_tip(g, hret);
    let v = g.target(h);
    g.remove_vertex(v);
    let e = g.edge(h);
    g.remove_edge(e);
    let f = g.face(hret);
    set_face_in_face_loop(g, hret, f);
    if let Some(f) = f {
        g.set_face_halfedge(f, hret);
    }
    hret
}
