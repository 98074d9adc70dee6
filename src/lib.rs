// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! # steganos-core
//!
//! Channel-substitution steganography for raster images. Hides a text message
//! by overwriting one colour channel of the carrier's pixels, one byte per
//! pixel, and recovers it later from the modified image.
//!
//! Two layers:
//!
//! - **Carrier adapter** (`carrier` module): decodes image files into an
//!   A/R/G/B [`PixelBuffer`] and writes buffers back to disk. Output is
//!   restricted to lossless formats — the scheme stores whole byte values in
//!   channel samples, so any lossy re-encode destroys the message.
//! - **Codec** (`stego` module): pure transformations between a pixel buffer
//!   and a message. Encoding never mutates its input; decoding needs nothing
//!   but the buffer itself, because the embedded stream carries its own
//!   terminator.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use steganos_core::{load_pixels, save_pixels, encode_message, decode_message, OutputFormat};
//!
//! let carrier = load_pixels("photo.png".as_ref()).unwrap();
//! let payload = encode_message(&carrier, "meet at dawn").unwrap();
//! save_pixels(&payload, "payload.png".as_ref(), OutputFormat::Png).unwrap();
//!
//! let reloaded = load_pixels("payload.png".as_ref()).unwrap();
//! assert_eq!(decode_message(&reloaded).unwrap(), "meet at dawn");
//! ```

pub mod carrier;
pub mod cli;
pub mod stego;

pub use carrier::error::{CarrierError, Result as CarrierResult};
pub use carrier::{load_pixels, save_pixels, OutputFormat, Pixel, PixelBuffer};
pub use stego::{
    decode_message, decode_message_in_channel, encode_message, encode_message_in_channel,
    message_capacity, Channel, StegoError,
};
