// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::errors::{DimensionMismatchError, MissingInputError, SingularMatrixError, StoreError};
use std::error::Error;
use std::fmt;

/// Umbrella error returned by geometry- and coupling-kernel routines.
///
/// Detectors and analytic aggregates never propagate this type: they catch
/// `MissingInput` (and per-row `Store`) failures and skip, per the error
/// handling policy in the specification.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    SingularMatrix(SingularMatrixError),
    DimensionMismatch(DimensionMismatchError),
    MissingInput(MissingInputError),
    Store(StoreError),
    /// A cooperative deadline elapsed mid-computation. Carries whatever
    /// partial record count the caller had already finalized.
    DeadlineExceeded { completed: usize },
}

impl Error for KernelError {}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KernelError::SingularMatrix(e) => write!(f, "{e}"),
            KernelError::DimensionMismatch(e) => write!(f, "{e}"),
            KernelError::MissingInput(e) => write!(f, "{e}"),
            KernelError::Store(e) => write!(f, "{e}"),
            KernelError::DeadlineExceeded { completed } => {
                write!(f, "KernelError: deadline exceeded after {completed} completed records")
            }
        }
    }
}

impl From<SingularMatrixError> for KernelError {
    fn from(e: SingularMatrixError) -> Self {
        KernelError::SingularMatrix(e)
    }
}

impl From<DimensionMismatchError> for KernelError {
    fn from(e: DimensionMismatchError) -> Self {
        KernelError::DimensionMismatch(e)
    }
}

impl From<MissingInputError> for KernelError {
    fn from(e: MissingInputError) -> Self {
        KernelError::MissingInput(e)
    }
}

impl From<StoreError> for KernelError {
    fn from(e: StoreError) -> Self {
        KernelError::Store(e)
    }
}
