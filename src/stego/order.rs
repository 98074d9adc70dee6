// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! The visiting order shared by encoder and decoder.
//!
//! Both directions walk the pixel grid in one pinned enumeration: the column
//! index `x` advances in the outer loop, the row index `y` in the inner loop.
//! So for a 3×2 image the order is (0,0), (0,1), (1,0), (1,1), (2,0), (2,1).
//!
//! This order is part of the wire protocol. A mismatch between encode and
//! decode does not fail loudly — it silently scrambles the recovered message —
//! which is why the enumeration lives here as the single source of truth
//! instead of as loop structure repeated at each call site.

/// Enumerate all `(x, y)` positions of a `width × height` grid in the pinned
/// visiting order: columns outer, rows inner.
///
/// Yields exactly `width × height` positions, each exactly once.
pub fn visit_positions(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}
