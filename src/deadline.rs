// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! Cooperative cancellation, per 5. Concurrency & Resource Model: every
//! public call accepts a deadline, and inner loops check it at each outer
//! index rather than yielding mid-computation. A `Deadline` never aborts a
//! loop body partway through a record; it is only ever consulted between
//! whole units of work.

use std::time::Instant;

/// An optional point in time past which a long-running call should stop
/// starting new units of work and report [`crate::errors::KernelError::DeadlineExceeded`]
/// with whatever it had already finished.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No deadline: `is_expired` never reports true.
    pub fn none() -> Self {
        Self(None)
    }

    /// A deadline `duration` from now.
    pub fn after(duration: std::time::Duration) -> Self {
        Self(Instant::now().checked_add(duration))
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
