// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Encode/decode pipeline for channel-substitution embedding.
//!
//! Encoding:
//! 1. Validate the message and map it to one byte per character
//! 2. Check capacity against the carrier's pixel count
//! 3. Clone the carrier and overwrite the designated channel of the visited
//!    pixels with the message bytes, then the terminator
//!
//! Decoding mirrors it: walk the same visiting order, collect channel bytes
//! until the terminator, and map them back to characters. Neither direction
//! performs I/O or keeps state between calls.

use crate::carrier::buffer::PixelBuffer;
use crate::stego::channel::Channel;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, TERMINATOR, TERMINATOR_OVERHEAD};
use crate::stego::order::visit_positions;

/// Embed a message into a carrier using the default channel (red).
///
/// Returns a new buffer; `source` is never mutated.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] if the message has no characters.
/// - [`StegoError::UnsupportedCharacter`] if any character needs more than
///   one byte, or is the terminator value.
/// - [`StegoError::CapacityExceeded`] if the message plus terminator does not
///   fit in `width × height` samples.
pub fn encode_message(source: &PixelBuffer, message: &str) -> Result<PixelBuffer, StegoError> {
    encode_message_in_channel(source, message, Channel::default())
}

/// Embed a message into a carrier, writing into the given channel.
///
/// See [`encode_message`] for the error contract. The channel is part of the
/// protocol: decoding must use the same one.
pub fn encode_message_in_channel(
    source: &PixelBuffer,
    message: &str,
    channel: Channel,
) -> Result<PixelBuffer, StegoError> {
    // 1. Validate and map the message before touching any pixel data.
    let bytes = frame::message_to_bytes(message)?;

    // 2. Capacity check. Fail-closed: no output buffer unless everything fits.
    let required = bytes.len() + TERMINATOR_OVERHEAD;
    let available = source.pixel_count();
    if required > available {
        return Err(StegoError::CapacityExceeded { required, available });
    }

    // 3. Write the stream along the visiting order on a copy of the carrier.
    let mut out = source.clone();
    let stream = bytes.iter().copied().chain(std::iter::once(TERMINATOR));
    let positions = visit_positions(source.width(), source.height());
    for ((x, y), byte) in positions.zip(stream) {
        out.set_sample(x, y, channel.sample_index(), byte);
    }

    Ok(out)
}

/// Recover a message from a payload image using the default channel (red).
///
/// # Errors
/// - [`StegoError::MalformedStream`] if no terminator exists anywhere in the
///   stream — the image was never encoded by this scheme, or was corrupted.
/// - [`StegoError::EmptyResult`] if the terminator is the very first sample.
pub fn decode_message(stego: &PixelBuffer) -> Result<String, StegoError> {
    decode_message_in_channel(stego, Channel::default())
}

/// Recover a message from a payload image, reading the given channel.
pub fn decode_message_in_channel(
    stego: &PixelBuffer,
    channel: Channel,
) -> Result<String, StegoError> {
    let mut bytes = Vec::new();
    let mut terminated = false;

    for (x, y) in visit_positions(stego.width(), stego.height()) {
        let sample = stego.sample(x, y, channel.sample_index());
        if sample == TERMINATOR {
            terminated = true;
            break;
        }
        bytes.push(sample);
    }

    if !terminated {
        return Err(StegoError::MalformedStream);
    }
    if bytes.is_empty() {
        return Err(StegoError::EmptyResult);
    }

    Ok(frame::bytes_to_message(&bytes))
}
