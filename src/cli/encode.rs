// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! `steganos encode` implementation.

use std::path::Path;

use crate::carrier::{load_pixels, save_pixels, OutputFormat};
use crate::stego::{encode_message_in_channel, message_capacity, Channel, StegoError};

/// What a successful encode run produced, for the caller to report.
pub struct EncodeOutcome {
    /// Message bytes embedded (one per character).
    pub embedded_bytes: usize,
    /// Message capacity of the carrier in bytes.
    pub capacity: usize,
}

/// Load `source`, embed `message` into `channel`, write the payload image to
/// `target` in a lossless format inferred from its extension.
///
/// The output format is resolved before any decoding work so that a lossy
/// target path fails immediately.
pub fn encode_image(
    source: &Path,
    target: &Path,
    message: &str,
    channel: Channel,
) -> Result<EncodeOutcome, StegoError> {
    let format = OutputFormat::from_path(target).map_err(StegoError::Carrier)?;

    let carrier = load_pixels(source)?;
    let capacity = message_capacity(&carrier);
    log::info!(
        "carrier {}x{}, {} bytes capacity, embedding into {} channel",
        carrier.width(),
        carrier.height(),
        capacity,
        channel
    );

    let payload = encode_message_in_channel(&carrier, message, channel)?;
    save_pixels(&payload, target, format)?;

    Ok(EncodeOutcome {
        embedded_bytes: message.chars().count(),
        capacity,
    })
}
