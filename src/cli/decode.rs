// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! `steganos decode` implementation.

use std::path::Path;

use crate::carrier::load_pixels;
use crate::stego::{decode_message_in_channel, Channel, StegoError};

/// Load `source` and recover the message embedded in `channel`.
pub fn decode_image(source: &Path, channel: Channel) -> Result<String, StegoError> {
    let payload = load_pixels(source)?;
    log::info!(
        "payload {}x{}, reading {} channel",
        payload.width(),
        payload.height(),
        channel
    );
    decode_message_in_channel(&payload, channel)
}
