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

use hemesh::graph::circulators::{face_degree, halfedges_around_face, target_degree};
use hemesh::graph::{HalfedgeGraph, VertexId};
use hemesh::mesh::PolyMesh;

fn quad() -> (PolyMesh<[f64; 2]>, [VertexId; 4]) {
    let mut m = PolyMesh::new();
    let a = m.add_vertex([0.0, 0.0]);
    let b = m.add_vertex([1.0, 0.0]);
    let c = m.add_vertex([1.0, 1.0]);
    let d = m.add_vertex([0.0, 1.0]);
    m.add_polygon(&[a, b, c, d]);
    (m, [a, b, c, d])
}

fn two_triangles() -> (PolyMesh<[f64; 2]>, [VertexId; 4]) {
    let mut m = PolyMesh::new();
    let a = m.add_vertex([0.0, 0.0]);
    let b = m.add_vertex([1.0, 0.0]);
    let c = m.add_vertex([1.0, 1.0]);
    let d = m.add_vertex([0.0, 1.0]);
    m.add_polygon(&[a, b, c]);
    m.add_polygon(&[a, c, d]);
    (m, [a, b, c, d])
}

fn tri_grid(nx: usize, ny: usize) -> (PolyMesh<[f64; 2]>, Vec<Vec<VertexId>>) {
    let mut m = PolyMesh::new();
    let mut vs = Vec::with_capacity(nx + 1);
    for i in 0..=nx {
        let mut col = Vec::with_capacity(ny + 1);
        for j in 0..=ny {
            col.push(m.add_vertex([i as f64, j as f64]));
        }
        vs.push(col);
    }
    for i in 0..nx {
        for j in 0..ny {
            let v00 = vs[i][j];
            let v10 = vs[i + 1][j];
            let v11 = vs[i + 1][j + 1];
            let v01 = vs[i][j + 1];
            m.add_polygon(&[v00, v10, v11]);
            m.add_polygon(&[v00, v11, v01]);
        }
    }
    (m, vs)
}

#[test]
fn quad_counts_and_links() {
    let (m, [a, b, c, d]) = quad();
    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.edge_count(), 4);
    assert_eq!(m.face_count(), 1);
    assert_eq!(m.euler_characteristic(), 1);
    m.validate().expect("fresh quad");

    let ab = m.find_halfedge(a, b).expect("a->b exists");
    assert_eq!(m.target(ab), b);
    assert_eq!(m.source(ab), a);
    assert!(!m.is_border(ab));
    assert!(m.is_border(m.opposite(ab)));
    assert_eq!(face_degree(&m, ab), 4);
    assert_eq!(face_degree(&m, m.opposite(ab)), 4);
    assert_eq!(m.target(m.next(ab)), c);
    assert_eq!(m.target(m.prev(ab)), a);
    assert_eq!(m.target(m.halfedge_of_vertex(d)), d);
}

#[test]
fn shared_edge_is_stitched() {
    let (m, [a, b, c, _d]) = two_triangles();
    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.edge_count(), 5);
    assert_eq!(m.face_count(), 2);
    m.validate().expect("two triangles");

    let ca = m.find_halfedge(c, a).expect("diagonal");
    assert!(!m.is_border(ca));
    assert!(!m.is_border(m.opposite(ca)));
    assert_ne!(m.face(ca), m.face(m.opposite(ca)));

    assert_eq!(target_degree(&m, ca), 3);
    assert_eq!(target_degree(&m, m.find_halfedge(a, b).expect("a->b")), 2);

    // The border loop runs over the four outer edges.
    let border = m
        .live_halfedges()
        .find(|&h| m.is_border(h))
        .expect("border exists");
    assert_eq!(halfedges_around_face(&m, border).count(), 4);
}

#[test]
fn grid_counts() {
    let (m, vs) = tri_grid(4, 3);
    assert_eq!(m.vertex_count(), 5 * 4);
    assert_eq!(m.face_count(), 2 * 4 * 3);
    assert_eq!(m.edge_count(), 3 * 4 * 3 + 4 + 3);
    assert_eq!(m.euler_characteristic(), 1);
    m.validate().expect("grid");

    // Interior vertices of the diagonal triangulation have degree 6.
    assert_eq!(target_degree(&m, m.halfedge_of_vertex(vs[2][2])), 6);
}

#[test]
fn closed_surface_has_no_border() {
    let mut m: PolyMesh<[f64; 3]> = PolyMesh::new();
    let p0 = m.add_vertex([0.0, 0.0, 0.0]);
    let p1 = m.add_vertex([1.0, 0.0, 0.0]);
    let p2 = m.add_vertex([0.0, 1.0, 0.0]);
    let p3 = m.add_vertex([0.0, 0.0, 1.0]);
    m.add_polygon(&[p0, p1, p2]);
    m.add_polygon(&[p0, p2, p3]);
    m.add_polygon(&[p0, p3, p1]);
    m.add_polygon(&[p1, p3, p2]);

    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.edge_count(), 6);
    assert_eq!(m.face_count(), 4);
    assert_eq!(m.euler_characteristic(), 2);
    m.validate().expect("tetrahedron");
    assert!(m.live_halfedges().all(|h| !m.is_border(h)));
}

#[test]
fn small_strip_has_one_border_loop() {
    let (m, _vs) = tri_grid(2, 1);
    assert_eq!(m.vertex_count(), 6);
    assert_eq!(m.edge_count(), 9);
    assert_eq!(m.face_count(), 4);
    m.validate().expect("2x1 strip");

    let border = m
        .live_halfedges()
        .find(|&h| m.is_border(h))
        .expect("border exists");
    assert_eq!(halfedges_around_face(&m, border).count(), 6);
}

#[test]
fn fan_blades_reconnect_out_of_order() {
    let mut m: PolyMesh<[f64; 2]> = PolyMesh::new();
    let x = m.add_vertex([0.0, 0.0]);
    let a = m.add_vertex([1.0, 0.0]);
    let b = m.add_vertex([1.0, 1.0]);
    let c = m.add_vertex([0.0, 1.0]);
    let d = m.add_vertex([-1.0, 1.0]);
    let e = m.add_vertex([-1.0, 0.0]);
    let f = m.add_vertex([-1.0, -1.0]);
    let g = m.add_vertex([0.0, -1.0]);
    // Three separate fan blades around x.
    m.add_polygon(&[x, a, b]);
    m.add_polygon(&[x, c, d]);
    m.add_polygon(&[x, e, f]);
    // Bridging the first and third blade forces the second one to
    // rotate out of their border gap.
    m.add_polygon(&[a, x, f, g]);

    assert_eq!(m.vertex_count(), 8);
    assert_eq!(m.edge_count(), 11);
    assert_eq!(m.face_count(), 4);
    assert_eq!(m.euler_characteristic(), 1);
    m.validate().expect("reconnected blades");
    assert_eq!(target_degree(&m, m.halfedge_of_vertex(x)), 6);

    let border = m
        .live_halfedges()
        .find(|&h| m.is_border(h))
        .expect("border exists");
    assert_eq!(halfedges_around_face(&m, border).count(), 9);
}

#[test]
fn find_halfedge_misses_absent_edges() {
    let (m, [a, b, _c, d]) = two_triangles();
    assert!(m.find_halfedge(b, d).is_none());
    assert!(m.find_halfedge(d, b).is_none());
    assert!(m.find_halfedge(a, b).is_some());
}
