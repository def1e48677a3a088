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

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hemesh::euler::{
    collapse_edge, flip_edge, join_face, satisfies_link_condition, split_face,
};
use hemesh::graph::circulators::halfedges_around_target;
use hemesh::graph::{EdgeId, HalfedgeGraph, VertexId};
use hemesh::mesh::PolyMesh;

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

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build 32x32 grid", |b| {
        b.iter(|| {
            let (m, _) = tri_grid(black_box(32), black_box(32));
            black_box(m.face_count())
        })
    });
}

fn bench_split_join_churn(c: &mut Criterion) {
    c.bench_function("split_face + join_face round trip", |b| {
        let (m0, vs) = tri_grid(16, 16);
        b.iter(|| {
            let mut m = m0.clone();
            for i in 1..15 {
                let h = m.find_halfedge(vs[i][8], vs[i + 1][8]).expect("row edge");
                let joined = join_face(&mut m, h);
                let h1 = joined;
                let h2 = m.next(m.next(h1));
                split_face(&mut m, h1, h2);
            }
            black_box(m.edge_count())
        })
    });
}

fn bench_flip(c: &mut Criterion) {
    c.bench_function("flip_edge across a row", |b| {
        let (m0, vs) = tri_grid(16, 16);
        b.iter(|| {
            let mut m = m0.clone();
            for i in 1..15 {
                let h = m.find_halfedge(vs[i][8], vs[i + 1][8]).expect("row edge");
                flip_edge(&mut m, h);
            }
            black_box(m.halfedge_count())
        })
    });
}

fn bench_collapse_cascade(c: &mut Criterion) {
    c.bench_function("collapse 100 interior edges", |b| {
        let (m0, _) = tri_grid(24, 24);
        b.iter(|| {
            let mut m = m0.clone();
            let mut done = 0usize;
            let edges: Vec<EdgeId> = m.live_edges().collect();
            for e in edges {
                if done == 100 {
                    break;
                }
                if m.is_removed_halfedge(m.halfedge_of_edge(e)) {
                    continue;
                }
                let pq = m.halfedge_of_edge(e);
                if m.is_border(pq) || m.is_border(m.opposite(pq)) {
                    continue;
                }
                let interior = halfedges_around_target(&m, pq)
                    .chain(halfedges_around_target(&m, m.opposite(pq)))
                    .all(|hh| !m.is_border(hh) && !m.is_border(m.opposite(hh)));
                if !interior || !satisfies_link_condition(&m, e) {
                    continue;
                }
                collapse_edge(&mut m, e);
                done += 1;
            }
            black_box(done)
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_split_join_churn,
    bench_flip,
    bench_collapse_cascade
);
criterion_main!(benches);
