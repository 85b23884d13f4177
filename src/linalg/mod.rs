// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! Dense linear algebra primitives shared by the geometry and coupling
//! kernels. Every routine here is `O(n^3)` or cheaper and allocates only
//! scratch buffers local to the call, per the "acquire, copy, release"
//! concurrency rule.

mod determinant;
mod index;
mod inverse;
mod norm;

pub use determinant::det;
pub use index::{christoffel_index, square_index};
pub use inverse::inv;
pub use norm::vector_norm;
