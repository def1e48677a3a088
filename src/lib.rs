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

//! Combinatorial mesh-editing primitives ("Euler operators") over
//! halfedge-based polygon meshes.
//!
//! The crate is split in three layers:
//!
//! - [`graph`]: the abstract halfedge-graph capability ([`graph::HalfedgeGraph`]
//!   and [`graph::MutableHalfedgeGraph`]) through which every operator talks to
//!   its host mesh, plus cycle circulators over face and vertex rings.
//! - [`euler`]: the operator suite itself, fourteen stateless and purely
//!   combinatorial transformations (vertex/edge/face split and join, edge
//!   collapse and flip, center-vertex insertion/removal, border stitching,
//!   genus-changing loop surgery). No operator touches geometry; vertex
//!   positions are opaque payload.
//! - [`mesh`]: [`mesh::PolyMesh`], a concrete arena-backed mesh implementing
//!   the graph traits, usable directly or as a reference host.
//!
//! Preconditions are checked with `debug_assert!` only; violating one in a
//! release build leaves the mesh in an unspecified state. [`validate`] offers
//! a full structural audit for tests and debugging.

pub mod euler;
pub mod graph;
pub mod mesh;
pub mod validate;
