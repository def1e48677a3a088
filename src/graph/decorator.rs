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

//! Low-level link surgery shared by the Euler operators: tip insertion and
//! removal around a vertex, border marking, and face-loop relabeling.
//!
//! These helpers leave the mesh in intermediate states that violate the
//! global invariants; only the operators in [`crate::euler`] compose them
//! back into invariant-preserving transactions.

use crate::graph::handles::{FaceId, HalfedgeId, VertexId};
use crate::graph::traits::MutableHalfedgeGraph;

/// Inserts `h` into the tip of `h2`: afterwards `h` points at
/// `target(h2)` and the vertex cycle there contains `h` right after `h2`.
pub(crate) fn insert_tip<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId, h2: HalfedgeId) {
    let n = g.next(h2);
    g.set_next(h, n);
    let hop = g.opposite(h);
    g.set_next(h2, hop);
    let v = g.target(h2);
    g.set_target(h, v);
}

/// Removes the edge following `h` from the vertex cycle at `target(h)` by
/// short-circuiting `next(h)` around it.
pub(crate) fn remove_tip<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    let n = g.next(h);
    let skip = g.next(g.opposite(n));
    g.set_next(h, skip);
}

/// Splices `h` into the face cycle right after `h2`, inheriting its face.
/// The target of `h` is left for the caller to set.
pub(crate) fn insert_halfedge<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId, h2: HalfedgeId) {
    let n = g.next(h2);
    g.set_next(h, n);
    g.set_next(h2, h);
    let f = g.face(h2);
    g.set_face(h, f);
}

/// Closes the tip of `h` onto a fresh vertex `v`: `h` and its opposite form
/// a two-halfedge loop with `v` at the tip, and `v`'s representative is set.
pub(crate) fn close_tip<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId, v: VertexId) {
    let hop = g.opposite(h);
    g.set_next(h, hop);
    g.set_target(h, v);
    g.set_vertex_halfedge(v, h);
}

/// Makes `h` the representative incoming halfedge of its target.
pub(crate) fn set_vertex_halfedge_to<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    let v = g.target(h);
    g.set_vertex_halfedge(v, h);
}

/// Marks `h` as a border halfedge.
pub(crate) fn set_border<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    g.set_face(h, None);
}

/// Relabels every halfedge on the cycle of `h` to face `f`.
pub(crate) fn set_face_in_face_loop<G: MutableHalfedgeGraph>(
    g: &mut G,
    h: HalfedgeId,
    f: Option<FaceId>,
) {
    let mut cur = h;
    let bound = g.halfedge_bound();
    let mut steps = 0usize;
    loop {
        g.set_face(cur, f);
        cur = g.next(cur);
        if cur == h {
            break;
        }
        steps += 1;
        assert!(steps <= bound, "face loop at {:?} does not close", h);
    }
}

/// Allocates a new edge copying the targets and faces of `h`'s edge.
/// Next links of the copy are unset.
pub(crate) fn copy_edge<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) -> HalfedgeId {
    let e = g.add_edge();
    let hnew = g.halfedge_of_edge(e);
    let hnewop = g.opposite(hnew);
    let hop = g.opposite(h);

    let t = g.target(h);
    g.set_target(hnew, t);
    let f = g.face(h);
    g.set_face(hnew, f);

    let top = g.target(hop);
    g.set_target(hnewop, top);
    let fop = g.face(hop);
    g.set_face(hnewop, fop);

    hnew
}
