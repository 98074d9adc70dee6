// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Carrier capacity.
//!
//! One visited pixel carries one message byte in its designated channel, and
//! one more sample is consumed by the terminator. Capacity is therefore a
//! function of the pixel count alone — it does not depend on which channel
//! is selected.

use crate::carrier::buffer::PixelBuffer;
use crate::stego::frame::TERMINATOR_OVERHEAD;

/// Maximum message length (in bytes) the given carrier can hold.
///
/// `width × height` samples minus the terminator overhead, saturating at
/// zero for degenerate carriers.
pub fn message_capacity(buffer: &PixelBuffer) -> usize {
    buffer.pixel_count().saturating_sub(TERMINATOR_OVERHEAD)
}
