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

//! Genus-changing surgery along a pair of edge loops.
//!
//! [`split_loop`] cuts the surface open along a cycle of three edges and
//! closes each side with a copy of the cycle, raising the Euler
//! characteristic by two. [`join_loop`] glues two such boundary cycles
//! back together. Neither operator is local to a face, and both change
//! the genus or the number of connected components.

use crate::graph::HalfedgeId;
use crate::graph::MutableHalfedgeGraph;
use crate::graph::decorator::{close_tip, copy_edge, insert_tip, set_vertex_halfedge_to};

/// Glues the cycle of `h1` onto the cycle of `h2`, edge by edge, deleting
/// the faces incident to both cycles, the edges of the second cycle, and
/// the vertices of the second cycle.
///
/// The two cycles must have the same length and must not share any
/// element; the reversed second cycle takes the place of the opposites of
/// the first. Returns `h1`. Inverse of [`split_loop`].
pub fn join_loop<G: MutableHalfedgeGraph>(g: &mut G, h1: HalfedgeId, h2: HalfedgeId) -> HalfedgeId {
    debug_assert!(
        g.is_border(h1) || g.face(h1) != g.face(h2),
        "join_loop: cycles bound the same face"
    );

    if let Some(f) = g.face(h1) {
        g.remove_face(f);
    }
    if let Some(f) = g.face(h2) {
        g.remove_face(f);
    }

    let limit = 2 * g.halfedge_bound() + 2;
    let mut guard = 0usize;
    let mut hi = h1;
    let mut gi = h2;
    loop {
        guard += 1;
        assert!(guard <= limit, "join_loop: cycle of h1 does not close");

        let hii = hi;
        hi = g.next(hi);
        let mut gii = gi;
        // The face across gii moves over to this side of the seam.
        let fop = g.face(g.opposite(gii));
        g.set_face(hii, fop);
        if let Some(f) = fop {
            g.set_face_halfedge(f, hii);
        }
        let v = g.target(g.opposite(gii));
        g.remove_vertex(v);
        if g.next(g.opposite(g.next(g.opposite(gii)))) == gii {
            // The vertex umbrella consists of the two loop edges only.
            gi = g.opposite(g.next(g.opposite(gii)));
        } else {
            g.set_next(hii, g.next(g.opposite(gii)));
            gii = g.opposite(g.next(g.opposite(gii)));
            let t = g.target(hii);
            g.set_target(gii, t);
            loop {
                guard += 1;
                assert!(guard <= limit, "join_loop: vertex cycle does not close");
                if g.next(g.opposite(g.next(gii))) == gi {
                    break;
                }
                gii = g.opposite(g.next(gii));
                g.set_target(gii, t);
            }
            gi = g.opposite(g.next(gii));
            g.set_next(gii, hi);
        }
        if hi == h1 {
            break;
        }
    }
    assert!(gi == h2, "join_loop: cycles have different lengths");

    // The second loop's own edges are no longer referenced by anything.
    loop {
        let gii = gi;
        gi = g.next(gi);
        let e = g.edge(gii);
        g.remove_edge(e);
        if gi == h2 {
            break;
        }
    }
    h1
}

// Reroutes the wedge of halfedges between next(h) and i at their shared
// vertex onto the copied rim, so that h..i stay on the original side and
// the wedge follows hnew..inew on the other.
fn split_loop_patch<G: MutableHalfedgeGraph>(
    g: &mut G,
    h: HalfedgeId,
    i: HalfedgeId,
    hnew: HalfedgeId,
    inew: HalfedgeId,
) {
    if g.next(h) == i {
        return;
    }
    let nh0 = g.next(h);
    g.set_next(h, i);
    g.set_next(hnew, nh0);
    let t = g.target(hnew);
    let mut nh = g.opposite(nh0);
    let limit = g.halfedge_bound();
    let mut guard = 0usize;
    while g.next(nh) != i {
        guard += 1;
        assert!(guard <= limit, "split_loop: vertex cycle does not close");
        g.set_target(nh, t);
        nh = g.opposite(g.next(nh));
    }
    g.set_target(nh, t);
    g.set_next(nh, inew);
}

/// Cuts the surface along the cycle `h -> i -> j` and closes both sides,
/// tripling the cycle's edges and vertices.
///
/// `h`, `i`, `j` must be distinct halfedges forming a cycle through three
/// distinct vertices that does not bound a face. The original halfedges
/// close one side as a new triangle; copies close the other. Returns the
/// halfedge of the second new triangle opposite to the copy of `h`.
/// Inverse of [`join_loop`].
pub fn split_loop<G: MutableHalfedgeGraph>(
    g: &mut G,
    h: HalfedgeId,
    i: HalfedgeId,
    j: HalfedgeId,
) -> HalfedgeId {
    debug_assert!(h != i && h != j && i != j, "split_loop: halfedges not distinct");
    debug_assert_eq!(g.target(h), g.target(g.opposite(i)), "split_loop: h, i not a chain");
    debug_assert_eq!(g.target(i), g.target(g.opposite(j)), "split_loop: i, j not a chain");
    debug_assert_eq!(g.target(j), g.target(g.opposite(h)), "split_loop: j, h not a chain");

    let hnew = copy_edge(g, h);
    let inew = copy_edge(g, i);
    let jnew = copy_edge(g, j);
    let vh = g.add_vertex();
    close_tip(g, hnew, vh);
    let vi = g.add_vertex();
    close_tip(g, inew, vi);
    let vj = g.add_vertex();
    close_tip(g, jnew, vj);
    let iop = g.opposite(inew);
    insert_tip(g, iop, hnew);
    let jop = g.opposite(jnew);
    insert_tip(g, jop, inew);
    let hop = g.opposite(hnew);
    insert_tip(g, hop, jnew);

    split_loop_patch(g, h, i, hnew, inew);
    split_loop_patch(g, i, j, inew, jnew);
    split_loop_patch(g, j, h, jnew, hnew);

    let f1 = g.add_face();
    g.set_face(h, Some(f1));
    g.set_face(i, Some(f1));
    g.set_face(j, Some(f1));
    g.set_face_halfedge(f1, h);

    let f2 = g.add_face();
    let hnewop = g.opposite(hnew);
    g.set_face(hnewop, Some(f2));
    let inewop = g.opposite(inew);
    g.set_face(inewop, Some(f2));
    let jnewop = g.opposite(jnew);
    g.set_face(jnewop, Some(f2));
    g.set_face_halfedge(f2, hnewop);

    for hc in [hnew, inew, jnew] {
        if let Some(f) = g.face(hc) {
            g.set_face_halfedge(f, hc);
        }
        set_vertex_halfedge_to(g, hc);
    }

    g.opposite(hnew)
}
