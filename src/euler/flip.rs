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

//! Diagonal flip in a pair of triangles.

use crate::graph::HalfedgeId;
use crate::graph::MutableHalfedgeGraph;

/// Rotates the edge of `h` inside the quadrilateral formed by its two
/// incident triangles, so that it connects the two apexes instead.
///
/// Both incident faces must exist and be triangles. No element is
/// created or deleted; only links move.
pub fn flip_edge<G: MutableHalfedgeGraph>(g: &mut G, h: HalfedgeId) {
    let s = g.source(h);
    let t = g.target(h);
    let nh = g.next(h);
    let nnh = g.next(nh);
    let oh = g.opposite(h);
    let noh = g.next(oh);
    let nnoh = g.next(noh);
    let s2 = g.target(nh);
    let t2 = g.target(noh);
    let fh = g.face(h).expect("flip_edge: h is a border halfedge");
    let foh = g.face(oh).expect("flip_edge: opposite(h) is a border halfedge");

    debug_assert_eq!(g.next(nnh), h, "flip_edge: face of h is not a triangle");
    debug_assert_eq!(g.next(nnoh), oh, "flip_edge: face of opposite(h) is not a triangle");

    // The endpoints may lose the flipped halfedge as their representative.
    if g.halfedge_of_vertex(s) == oh {
        g.set_vertex_halfedge(s, nnh);
    }
    if g.halfedge_of_vertex(t) == h {
        g.set_vertex_halfedge(t, nnoh);
    }

    g.set_next(h, nnoh);
    g.set_next(oh, nnh);
    g.set_target(h, t2);
    g.set_target(oh, s2);
    g.set_next(nh, h);
    g.set_next(noh, oh);
    g.set_next(nnoh, nh);
    g.set_next(nnh, noh);
    g.set_face(nnoh, Some(fh));
    g.set_face(nnh, Some(foh));
    g.set_face_halfedge(fh, h);
    g.set_face_halfedge(foh, oh);
}
