// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use std::error::Error;
use std::fmt;

/// Returned by [`crate::linalg::inv`] when a pivot stays below `pivot_eps`
/// even after Tikhonov regularization has been applied to the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularMatrixError(pub String);

impl Error for SingularMatrixError {}

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SingularMatrixError: {}", self.0)
    }
}
