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

//! The Euler operator suite.
//!
//! Every operator is a stateless free function over
//! [`MutableHalfedgeGraph`](crate::graph::MutableHalfedgeGraph): an atomic
//! combinatorial transaction that takes handles in and returns handles out.
//! Preconditions are `debug_assert!`-only; a release build trusts the caller
//! completely and a violated precondition leaves the mesh in an unspecified
//! state. There is no rollback.

pub mod border;
pub mod center_vertex;
pub mod collapse;
pub mod face_ops;
pub mod flip;
pub mod loops;
pub mod vertex_ops;

pub use border::{add_face_to_border, add_vertex_and_face_to_border};
pub use center_vertex::{add_center_vertex, remove_center_vertex};
pub use collapse::{
    EdgeConstraintMap, collapse_edge, collapse_edge_with_constraints, satisfies_link_condition,
};
pub use face_ops::{join_face, make_hole, remove_face, split_face};
pub use flip::flip_edge;
pub use loops::{join_loop, split_loop};
pub use vertex_ops::{join_vertex, split_edge, split_vertex};
