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

//! Face-level operators: diagonal insertion and removal, face deletion.

use smallvec::SmallVec;

use crate::graph::HalfedgeId;
use crate::graph::MutableHalfedgeGraph;
use crate::graph::circulators::{halfedges_around_face, halfedges_around_target};
use crate::graph::decorator::{
    insert_tip, remove_tip, set_border, set_face_in_face_loop, set_vertex_halfedge_to,
};

/// Removes the edge of `h`, merging the two incident faces.
///
/// `face(h)` absorbs the cycle of `face(opposite(h))`, which is deleted
/// together with the edge. If `h` is a border halfedge the surviving
/// "face" is the hole, and the real face on the opposite side is the one
/// deleted. Returns `prev(h)`, which lies on the surviving cycle.
///
/// Both endpoints of the edge must have degree at least three.
pub fn join_face<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    let hop = g.opposite(h);
    let hprev = g.prev(h);
    let gprev = g.prev(hop);
    let f = g.face(h);
    let f2 = g.face(hop);

    debug_assert!(
        halfedges_around_target(g, h).count() >= 3,
        "join_face: target(h) has degree < 3"
    );
    debug_assert!(
        halfedges_around_target(g, hop).count() >= 3,
        "join_face: source(h) has degree < 3"
    );

    remove_tip(g, hprev);
    remove_tip(g, gprev);

    if let Some(f2) = f2 {
        g.remove_face(f2);
    }

    // Relabel the halfedges taken over from the removed face's cycle.
    let mut h2 = hprev;
    while h2 != gprev {
        h2 = g.next(h2);
        g.set_face(h2, f);
    }

    if let Some(f) = f {
        g.set_face_halfedge(f, hprev);
    }
    set_vertex_halfedge_to(g, hprev);
    set_vertex_halfedge_to(g, gprev);

    let e = g.edge(h);
    g.remove_edge(e);
    hprev
}

/// Inserts a diagonal from `target(h1)` to `target(h2)` inside their
/// common face, splitting it in two.
///
/// `face(h1)` keeps the new halfedge `hnew` with `next(h1) == hnew`; a
/// fresh face takes the cycle of `opposite(hnew)`, which contains `h2`.
/// Returns `hnew`. Inverse of [`join_face`].
pub fn split_face<G: MutableHalfedgeGraph>(
    g: &mut G,
    h1: HalfedgeId,
    h2: HalfedgeId,
) -> HalfedgeId {
    debug_assert!(h1 != h2, "split_face: h1 == h2");
    debug_assert_eq!(g.face(h1), g.face(h2), "split_face: faces differ");
    debug_assert!(
        g.next(h1) != h2 && g.next(h2) != h1,
        "split_face: targets are adjacent along the face"
    );

    let e = g.add_edge();
    let hnew = g.halfedge_of_edge(e);
    let hnewop = g.opposite(hnew);
    let fnew = g.add_face();
    insert_tip(g, hnew, h2);
    insert_tip(g, hnewop, h1);
    let f = g.face(h1);
    g.set_face(hnew, f);
    set_face_in_face_loop(g, hnewop, Some(fnew));
    if let Some(f) = g.face(hnew) {
        g.set_face_halfedge(f, hnew);
    }
    g.set_face_halfedge(fnew, hnewop);
    hnew
}

/// Deletes `face(h)` together with every edge and vertex that has no
/// other incident face, splicing the remaining border loops shut.
///
/// Interior faces become holes; faces already touching the border may
/// take whole fans of edges and isolated vertices with them. `h` must
/// not be a border halfedge.
pub fn remove_face<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    debug_assert!(!g.is_border(h), "remove_face: h is a border halfedge");
    let f = g.face(h).expect("remove_face: h has no incident face");

    // Removed records keep their links readable, which this sweep relies
    // on: an edge removed on one round is still walked through on the next.
    let end = h;
    let mut h = h;
    loop {
        set_border(g, h);
        let nh = g.next(h);
        let h_free = g.is_border(g.opposite(h));
        let nh_free = g.is_border(g.opposite(nh));
        if h_free && nh_free && g.next(g.opposite(nh)) == g.opposite(h) {
            // target(h) loses its last two edges and goes with them.
            let v = g.target(h);
            g.remove_vertex(v);
            if h != end {
                let e = g.edge(h);
                g.remove_edge(e);
            }
        } else {
            if nh_free {
                set_vertex_halfedge_to(g, g.opposite(g.next(g.opposite(nh))));
                remove_tip(g, h);
            }
            if h_free {
                set_vertex_halfedge_to(g, g.opposite(g.next(h)));
                let pre = g.prev(g.opposite(h));
                remove_tip(g, pre);
                if h != end {
                    let e = g.edge(h);
                    g.remove_edge(e);
                }
            }
        }
        h = nh;
        if h == end {
            break;
        }
    }
    g.remove_face(f);
    if g.is_border(g.opposite(h)) {
        let e = g.edge(h);
        g.remove_edge(e);
    }
}

/// Deletes `face(h)` but keeps its full edge cycle as a hole.
///
/// Unlike [`remove_face`] nothing is spliced away, so no halfedge of the
/// face may already lie next to the border.
pub fn make_hole<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    debug_assert!(!g.is_border(h), "make_hole: h is a border halfedge");
    let f = g.face(h).expect("make_hole: h has no incident face");

    let cycle: SmallVec<[HalfedgeId; 8]> = halfedges_around_face(g, h).collect();
    for hh in cycle {
        debug_assert!(
            !g.is_border(g.opposite(hh)),
            "make_hole: face touches an existing border"
        );
        set_border(g, hh);
    }
    g.remove_face(f);
}
