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

use hemesh::euler::{join_loop, split_loop};
use hemesh::graph::{HalfedgeGraph, HalfedgeId, VertexId};
use hemesh::mesh::PolyMesh;

// The 7-vertex triangulation of the torus (the Moebius-Kantor style
// minimal one): vertices 0..7, faces (i, i+1, i+3) and (i, i+3, i+2)
// mod 7 for every i. Every vertex has degree 6 and there is no border.
fn torus7() -> (PolyMesh<[f64; 3]>, Vec<VertexId>) {
    let mut m = PolyMesh::new();
    let vs: Vec<VertexId> = (0..7)
        .map(|i| m.add_vertex([i as f64, 0.0, 0.0]))
        .collect();
    for i in 0..7 {
        m.add_polygon(&[vs[i], vs[(i + 1) % 7], vs[(i + 3) % 7]]);
        m.add_polygon(&[vs[i], vs[(i + 3) % 7], vs[(i + 2) % 7]]);
    }
    (m, vs)
}

fn cycle_012(m: &PolyMesh<[f64; 3]>, vs: &[VertexId]) -> [HalfedgeId; 3] {
    let h = m.find_halfedge(vs[0], vs[1]).expect("0->1");
    let i = m.find_halfedge(vs[1], vs[2]).expect("1->2");
    let j = m.find_halfedge(vs[2], vs[0]).expect("2->0");
    [h, i, j]
}

#[test]
fn torus_is_closed_with_zero_characteristic() {
    let (m, _vs) = torus7();
    assert_eq!(m.vertex_count(), 7);
    assert_eq!(m.edge_count(), 21);
    assert_eq!(m.face_count(), 14);
    assert_eq!(m.euler_characteristic(), 0);
    m.validate().expect("torus");
    assert!(m.live_halfedges().all(|h| !m.is_border(h)));
}

#[test]
fn split_loop_cuts_the_torus_into_a_sphere() {
    let (mut m, vs) = torus7();
    let [h, i, j] = cycle_012(&m, &vs);
    // 0 -> 1 -> 2 -> 0 is a non-facial cycle of this triangulation.
    assert!(m.next(h) != i || m.next(i) != j);

    let ret = split_loop(&mut m, h, i, j);

    // Cutting along the loop and closing both sides: +3 vertices,
    // +3 edges, +2 faces, characteristic rises from 0 to 2.
    assert_eq!(m.vertex_count(), 10);
    assert_eq!(m.edge_count(), 24);
    assert_eq!(m.face_count(), 16);
    assert_eq!(m.euler_characteristic(), 2);
    m.validate().expect("after split_loop");

    // ret bounds the second closing triangle, opposite the copy of h.
    assert!(!m.is_border(ret));
    assert_eq!(m.face(h), m.face(i));
    assert_eq!(m.face(h), m.face(j));
    assert_ne!(m.face(h), m.face(ret));
    assert!(m.live_halfedges().all(|hh| !m.is_border(hh)));
}

#[test]
fn join_loop_glues_the_sphere_back_into_a_torus() {
    let (mut m, vs) = torus7();
    let [h, i, j] = cycle_012(&m, &vs);

    let ret = split_loop(&mut m, h, i, j);
    let glued = join_loop(&mut m, h, ret);

    assert_eq!(glued, h);
    assert_eq!(m.vertex_count(), 7);
    assert_eq!(m.edge_count(), 21);
    assert_eq!(m.face_count(), 14);
    assert_eq!(m.euler_characteristic(), 0);
    m.validate().expect("after join_loop");
    assert!(m.live_halfedges().all(|hh| !m.is_border(hh)));
}
