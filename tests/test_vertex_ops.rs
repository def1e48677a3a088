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

use hemesh::euler::{join_vertex, split_edge, split_vertex};
use hemesh::graph::circulators::{face_degree, target_degree};
use hemesh::graph::{HalfedgeGraph, VertexId};
use hemesh::mesh::PolyMesh;

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
fn split_edge_subdivides_the_diagonal() {
    let (mut m, [a, _b, c, _d]) = two_triangles();
    let h = m.find_halfedge(c, a).expect("diagonal");
    let f_before = m.face(h);

    let hnew = split_edge(&mut m, h);

    assert_eq!(m.vertex_count(), 5);
    assert_eq!(m.edge_count(), 6);
    assert_eq!(m.face_count(), 2);
    m.validate().expect("after split_edge");

    // hnew points at the inserted vertex and leads straight into h.
    let mid = m.target(hnew);
    assert!(mid != a && mid != c);
    assert_eq!(m.next(hnew), h);
    assert_eq!(m.source(hnew), c);
    assert_eq!(m.target(h), a);
    assert_eq!(target_degree(&m, hnew), 2);

    // Both incident triangles grew into quads.
    assert_eq!(m.face(hnew), f_before);
    assert_eq!(face_degree(&m, hnew), 4);
    assert_eq!(face_degree(&m, m.opposite(hnew)), 4);
}

#[test]
fn join_vertex_undoes_split_edge() {
    let (mut m, [a, _b, c, _d]) = two_triangles();
    let h = m.find_halfedge(c, a).expect("diagonal");

    split_edge(&mut m, h);
    // After the split h runs from the midpoint to a; contracting it
    // merges the midpoint back into a.
    let ret = join_vertex(&mut m, h);

    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.edge_count(), 5);
    assert_eq!(m.face_count(), 2);
    m.validate().expect("after join_vertex");
    assert_eq!(m.target(ret), a);
    assert!(m.find_halfedge(c, a).is_some());
    assert_eq!(target_degree(&m, m.halfedge_of_vertex(a)), 3);
}

#[test]
fn split_vertex_divides_the_umbrella() {
    let (mut m, vs) = tri_grid(2, 2);
    let center = vs[1][1];
    let h1 = m.find_halfedge(vs[0][1], center).expect("west spoke");
    let h2 = m.find_halfedge(vs[2][1], center).expect("east spoke");
    assert_eq!(target_degree(&m, h1), 6);

    let hnew = split_vertex(&mut m, h1, h2);

    assert_eq!(m.vertex_count(), 10);
    assert_eq!(m.edge_count(), 17);
    assert_eq!(m.face_count(), 8);
    m.validate().expect("after split_vertex");

    assert_eq!(m.target(hnew), center);
    let vnew = m.target(m.opposite(hnew));
    assert!(vnew != center);
    // The six original spokes are shared out between the two halves,
    // and each half gains one side of the new edge.
    assert_eq!(
        target_degree(&m, hnew) + target_degree(&m, m.opposite(hnew)),
        8
    );

    // Contracting the new edge merges the vertex back together.
    let ret = join_vertex(&mut m, hnew);
    assert_eq!(m.target(ret), center);
    assert_eq!(m.vertex_count(), 9);
    assert_eq!(m.edge_count(), 16);
    m.validate().expect("after join_vertex");
    assert_eq!(target_degree(&m, m.halfedge_of_vertex(center)), 6);
}
