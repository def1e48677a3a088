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

//! Edge-contraction and vertex-splitting operators.

use smallvec::SmallVec;

use crate::graph::HalfedgeId;
use crate::graph::MutableHalfedgeGraph;
use crate::graph::circulators::{face_degree, halfedges_around_target};
use crate::graph::decorator::{insert_halfedge, set_vertex_halfedge_to};

/// Contracts the edge of `h`, merging `source(h)` into `target(h)`.
///
/// The two faces incident to the edge each lose one side; `target(h)`
/// inherits every halfedge that pointed at the vanishing vertex. Returns
/// `prev(h)`, a halfedge into the surviving vertex.
///
/// The edge must not be a loop, and both endpoints must have degree at
/// least three so that neither incident face degenerates.
pub fn join_vertex<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    let hop = g.opposite(h);
    let hprev = g.prev(hop);
    let gprev = g.prev(h);
    let hnext = g.next(hop);
    let gnext = g.next(h);
    let v_to_remove = g.target(hop);
    let v = g.target(h);

    debug_assert!(v_to_remove != v, "join_vertex: edge is a loop");
    // Each incident cycle loses one edge, so a triangle would degenerate.
    debug_assert!(
        g.is_border(h) || face_degree(g, h) >= 4,
        "join_vertex: face of h would degenerate"
    );
    debug_assert!(
        g.is_border(hop) || face_degree(g, hop) >= 4,
        "join_vertex: face of opposite(h) would degenerate"
    );

    // Everything aimed at the vanishing vertex is re-aimed at the survivor.
    // Collected up front because the circulator borrows the graph.
    let incoming: SmallVec<[HalfedgeId; 16]> = halfedges_around_target(g, hop).collect();
    for ih in incoming {
        debug_assert_eq!(g.target(ih), v_to_remove);
        g.set_target(ih, v);
    }

    g.set_next(hprev, hnext);
    g.set_next(gprev, gnext);
    // target(gprev) was source(h), which the loop above just moved onto v.
    g.set_vertex_halfedge(v, gprev);
    // The removed pair may be a representative of either incident face.
    if let Some(f) = g.face(h) {
        g.set_face_halfedge(f, gprev);
    }
    if let Some(f) = g.face(hop) {
        g.set_face_halfedge(f, hprev);
    }

    let e = g.edge(h);
    g.remove_edge(e);
    g.remove_vertex(v_to_remove);

    hprev
}

/// Splits the vertex `target(h1) == target(h2)` in two, joining the halves
/// with a fresh edge.
///
/// All halfedges strictly between `h1` and `h2` in counterclockwise order
/// around the shared vertex keep the original vertex; the remainder move
/// onto the new one. Returns the new halfedge, whose target is the
/// original vertex. Inverse of [`join_vertex`].
pub fn split_vertex<G: MutableHalfedgeGraph>(
    g: &mut G,
    h1: HalfedgeId,
    h2: HalfedgeId,
) -> HalfedgeId {
    debug_assert!(h1 != h2, "split_vertex: h1 == h2");
    debug_assert_eq!(g.target(h1), g.target(h2), "split_vertex: targets differ");

    let e = g.add_edge();
    let hnew = g.halfedge_of_edge(e);
    let hnewopp = g.opposite(hnew);
    let vnew = g.add_vertex();
    insert_halfedge(g, hnew, h2);
    insert_halfedge(g, hnewopp, h1);
    let v_old = g.target(h1);
    g.set_target(hnew, v_old);

    // Walk the halfedges now pointing at the new vertex. The cycle from
    // hnewopp closes at hnewopp itself once h2's side has been rehomed.
    let end = hnewopp;
    let mut cur = hnewopp;
    loop {
        g.set_target(cur, vnew);
        cur = g.opposite(g.next(cur));
        if cur == end {
            break;
        }
    }

    set_vertex_halfedge_to(g, hnew);
    set_vertex_halfedge_to(g, hnewopp);
    hnew
}

/// Subdivides the edge of `h` with a new vertex of degree two.
///
/// Returns the halfedge pointing at the inserted vertex whose `next` is
/// `h`. A `split_vertex` where the split-off cycle is empty.
pub fn split_edge<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    let p = g.prev(h);
    let hop = g.opposite(h);
    let hnew = split_vertex(g, p, hop);
    g.opposite(hnew)
}
