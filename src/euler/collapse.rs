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

//! Edge collapse for triangle meshes, with the topological guard that
//! makes it safe.

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::euler::center_vertex::remove_center_vertex;
use crate::euler::face_ops::{join_face, remove_face};
use crate::euler::vertex_ops::join_vertex;
use crate::graph::circulators::{halfedges_around_target, target_degree};
use crate::graph::{EdgeId, HalfedgeId, VertexId};
use crate::graph::{HalfedgeGraph, MutableHalfedgeGraph};

/// Marks edges that an edge collapse must not delete.
pub trait EdgeConstraintMap {
    fn is_constrained(&self, e: EdgeId) -> bool;
}

impl EdgeConstraintMap for AHashSet<EdgeId> {
    fn is_constrained(&self, e: EdgeId) -> bool {
        self.contains(&e)
    }
}

fn has_border_halfedge<G: HalfedgeGraph>(g: &G, h: HalfedgeId) -> bool {
    halfedges_around_target(g, h).any(|hh| g.is_border(hh))
}

/// Checks the link condition of the edge `v0v1 = e`: the vertices
/// adjacent to both endpoints must be exactly the apexes of the incident
/// triangles, and an interior edge may not run between two border
/// vertices.
///
/// Collapsing an edge that fails this test would pinch the surface into
/// something that is no longer a manifold mesh; [`collapse_edge`] calls
/// on a failing edge are undefined.
pub fn satisfies_link_condition<G: HalfedgeGraph>(g: &G, e: EdgeId) -> bool {
    let pq = g.halfedge_of_edge(e);
    let qp = g.opposite(pq);
    let p = g.target(qp);
    let q = g.target(pq);

    let ring_p: AHashSet<VertexId> = halfedges_around_target(g, qp).map(|h| g.source(h)).collect();
    let ring_q: AHashSet<VertexId> = halfedges_around_target(g, pq).map(|h| g.source(h)).collect();

    let mut apexes: SmallVec<[VertexId; 2]> = SmallVec::new();
    if !g.is_border(pq) {
        apexes.push(g.target(g.next(pq)));
    }
    if !g.is_border(qp) {
        apexes.push(g.target(g.next(qp)));
    }

    let mut shared = 0usize;
    for v in ring_p.intersection(&ring_q) {
        if *v == p || *v == q {
            continue;
        }
        if !apexes.contains(v) {
            return false;
        }
        shared += 1;
    }
    if shared != apexes.len() {
        return false;
    }

    // An interior edge between two border vertices would weld two
    // boundary pieces into a non-manifold vertex pair.
    if !g.is_border(pq)
        && !g.is_border(qp)
        && has_border_halfedge(g, pq)
        && has_border_halfedge(g, qp)
    {
        return false;
    }
    true
}

/// Collapses the edge `pq = e` into its target vertex `q`, deleting the
/// edge, one of its endpoints, and both incident triangles.
///
/// Returns the surviving vertex, which keeps the union of both stars.
/// This routine does NOT verify the link condition; run
/// [`satisfies_link_condition`] first on any edge that is not already
/// known to be collapsible. Incident faces must be triangles.
pub fn collapse_edge<G: MutableHalfedgeGraph>(g: &mut G, e: EdgeId) -> VertexId {
    let pq = g.halfedge_of_edge(e);
    let qp = g.opposite(pq);
    let pt = g.opposite(g.prev(pq));
    let qb = g.opposite(g.prev(qp));

    let top_exists = !g.is_border(pq);
    let bottom_exists = !g.is_border(qp);
    let top_left = top_exists && !g.is_border(pt);
    let bottom_right = bottom_exists && !g.is_border(qb);

    debug_assert!(
        !top_exists || target_degree(g, pt) > 2,
        "collapse_edge: top apex has degree 2"
    );
    debug_assert!(
        !bottom_exists || target_degree(g, qb) > 2,
        "collapse_edge: bottom apex has degree 2"
    );

    let q = g.target(pq);
    let p = g.source(pq);

    let mut p_erased = false;
    let mut q_erased = false;

    if top_exists {
        debug_assert!(!g.is_border(g.opposite(pt)), "collapse_edge: degenerate top wing");
        if top_left {
            join_face(g, pt);
        } else {
            remove_face(g, g.opposite(pt));
            if !bottom_exists {
                p_erased = true;
            }
        }
    }
    if bottom_exists {
        debug_assert!(!g.is_border(g.opposite(qb)), "collapse_edge: degenerate bottom wing");
        if bottom_right {
            join_face(g, qb);
        } else {
            remove_face(g, g.opposite(qb));
            if !top_exists {
                q_erased = true;
            }
        }
    }
    debug_assert!(!(p_erased && q_erased));

    if !p_erased && !q_erased {
        join_vertex(g, pq);
        p_erased = true;
    }
    if p_erased { q } else { p }
}

/// [`collapse_edge`] that spares constrained edges: where the plain
/// collapse would dissolve a wing edge that the map marks, the wing's
/// other edge is dissolved instead. `e` itself must not be constrained,
/// and at most one edge per wing may be.
pub fn collapse_edge_with_constraints<G, M>(g: &mut G, e: EdgeId, constraints: &M) -> VertexId
where
    G: MutableHalfedgeGraph,
    M: EdgeConstraintMap,
{
    debug_assert!(
        !constraints.is_constrained(e),
        "collapse_edge_with_constraints: e is constrained"
    );

    let pq = g.halfedge_of_edge(e);
    let qp = g.opposite(pq);
    let pt = g.opposite(g.prev(pq));
    let qb = g.opposite(g.prev(qp));
    let tq = g.opposite(g.next(pq));
    let bp = g.opposite(g.next(qp));
    let top_exists = !g.is_border(pq);
    let bottom_exists = !g.is_border(qp);
    let q = g.target(pq);
    let p = g.source(pq);

    let mut to_erase: SmallVec<[HalfedgeId; 2]> = SmallVec::new();
    if top_exists {
        let pick = if constraints.is_constrained(g.edge(pt)) { tq } else { pt };
        debug_assert!(!constraints.is_constrained(g.edge(pick)), "both top wing edges constrained");
        to_erase.push(pick);
    }
    if bottom_exists {
        let pick = if constraints.is_constrained(g.edge(qb)) { bp } else { qb };
        debug_assert!(!constraints.is_constrained(g.edge(pick)), "both bottom wing edges constrained");
        to_erase.push(pick);
    }

    if top_exists && bottom_exists {
        if g.face(to_erase[0]) == g.face(to_erase[1]) && !g.is_border(to_erase[0]) {
            // Both wings dissolve into the same triangle: a valence-3
            // endpoint whose whole umbrella goes at once.
            let spoke = if g.next(to_erase[0]) == to_erase[1] { to_erase[0] } else { to_erase[1] };
            let p_goes = g.target(spoke) == p;
            remove_center_vertex(g, spoke);
            return if p_goes { q } else { p };
        }
        for h in to_erase {
            if !g.is_border(h) {
                join_face(g, h);
            } else {
                remove_face(g, g.opposite(h));
            }
        }
        join_vertex(g, pq);
        q
    } else if top_exists {
        if !g.is_border(to_erase[0]) {
            join_face(g, to_erase[0]);
            join_vertex(g, pq);
            return q;
        }
        let q_goes = g.is_border(g.opposite(g.next(pq)));
        remove_face(g, g.opposite(to_erase[0]));
        if q_goes { p } else { q }
    } else if bottom_exists {
        if !g.is_border(to_erase[0]) {
            join_face(g, to_erase[0]);
            join_vertex(g, qp);
            return p;
        }
        let p_goes = g.is_border(g.opposite(g.next(qp)));
        remove_face(g, g.opposite(to_erase[0]));
        if p_goes { q } else { p }
    } else {
        // Isolated edge strip with no face on either side.
        join_vertex(g, pq);
        q
    }
}
