// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

mod fragmentation_tests;
mod inflation_tests;
mod rigidity_tests;
