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

//! Growing a surface along its border.

use smallvec::SmallVec;

use crate::graph::HalfedgeId;
use crate::graph::circulators::halfedges_around_face;
use crate::graph::decorator::set_border;
use crate::graph::{HalfedgeGraph, MutableHalfedgeGraph};

fn on_same_border_loop<G: HalfedgeGraph>(g: &G, h1: HalfedgeId, h2: HalfedgeId) -> bool {
    let mut cur = h1;
    for _ in 0..=g.halfedge_bound() {
        if cur == h2 {
            return true;
        }
        cur = g.next(cur);
        if cur == h1 {
            return false;
        }
    }
    false
}

/// Closes a new face against the border, its boundary running from
/// `target(h1)` along the hole to `target(h2)` and back across one new
/// edge.
///
/// `h1` and `h2` must be distinct halfedges of the same border loop, in
/// that order along it, and not adjacent (`next(h1) != h2`). The segment
/// `next(h1) .. h2` leaves the hole and bounds the new face; the new edge
/// keeps a border halfedge on the shrunk hole. Returns the non-border
/// halfedge of the new edge, which lies on the new face.
pub fn add_face_to_border<G: MutableHalfedgeGraph>(
    g: &mut G,
    h1: HalfedgeId,
    h2: HalfedgeId,
) -> HalfedgeId {
    debug_assert!(g.is_border(h1), "add_face_to_border: h1 is not border");
    debug_assert!(g.is_border(h2), "add_face_to_border: h2 is not border");
    debug_assert!(h1 != h2, "add_face_to_border: h1 == h2");
    debug_assert!(g.next(h1) != h2, "add_face_to_border: h2 follows h1");
    debug_assert!(
        on_same_border_loop(g, h1, h2),
        "add_face_to_border: h1 and h2 lie on different border loops"
    );

    let f = g.add_face();
    let e = g.add_edge();
    let newh = g.halfedge_of_edge(e);
    let newhop = g.opposite(newh);

    let n2 = g.next(h2);
    g.set_next(newhop, n2);
    g.set_next(h2, newh);
    let n1 = g.next(h1);
    g.set_next(newh, n1);
    g.set_next(h1, newhop);

    let t1 = g.target(h1);
    g.set_target(newh, t1);
    let t2 = g.target(h2);
    g.set_target(newhop, t2);
    g.set_vertex_halfedge(t2, newhop);
    set_border(g, newhop);

    let cycle: SmallVec<[HalfedgeId; 8]> = halfedges_around_face(g, newh).collect();
    for hh in cycle {
        g.set_face(hh, Some(f));
    }
    g.set_face_halfedge(f, newh);
    newh
}

/// Closes a new face against the border, like [`add_face_to_border`],
/// but through a brand-new vertex: the face boundary runs from
/// `target(h1)` along the hole to `target(h2)` and back over the new
/// vertex across two new edges.
///
/// `h1` and `h2` must be distinct halfedges of the same border loop, in
/// that order along it (`next(h1) == h2` is allowed here). Returns the
/// non-border halfedge from `target(h2)` to the new vertex, which lies
/// on the new face.
pub fn add_vertex_and_face_to_border<G: MutableHalfedgeGraph>(
    g: &mut G,
    h1: HalfedgeId,
    h2: HalfedgeId,
) -> HalfedgeId {
    debug_assert!(g.is_border(h1), "add_vertex_and_face_to_border: h1 is not border");
    debug_assert!(g.is_border(h2), "add_vertex_and_face_to_border: h2 is not border");
    debug_assert!(h1 != h2, "add_vertex_and_face_to_border: h1 == h2");
    debug_assert!(
        on_same_border_loop(g, h1, h2),
        "add_vertex_and_face_to_border: h1 and h2 lie on different border loops"
    );

    let f = g.add_face();
    let ea = g.add_edge();
    let eb = g.add_edge();
    let v = g.add_vertex();
    // ha runs target(h2) -> v, hb runs v -> target(h1).
    let ha = g.halfedge_of_edge(ea);
    let haop = g.opposite(ha);
    let hb = g.halfedge_of_edge(eb);
    let hbop = g.opposite(hb);

    let n1 = g.next(h1);
    let n2 = g.next(h2);

    g.set_next(h2, ha);
    g.set_next(ha, hb);
    g.set_next(hb, n1);
    g.set_next(h1, hbop);
    g.set_next(hbop, haop);
    g.set_next(haop, n2);

    g.set_target(ha, v);
    let t2 = g.target(h2);
    g.set_target(haop, t2);
    let t1 = g.target(h1);
    g.set_target(hb, t1);
    g.set_target(hbop, v);

    g.set_vertex_halfedge(v, hbop);
    g.set_vertex_halfedge(t2, haop);
    set_border(g, haop);
    set_border(g, hbop);

    let cycle: SmallVec<[HalfedgeId; 8]> = halfedges_around_face(g, ha).collect();
    for hh in cycle {
        g.set_face(hh, Some(f));
    }
    g.set_face_halfedge(f, ha);
    ha
}
