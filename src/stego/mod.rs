// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Steganographic codec: channel-substitution embedding and extraction.
//!
//! The scheme writes one message byte into one channel sample of each visited
//! pixel, in a fixed visiting order shared by encoder and decoder, and marks
//! the end of the message with a single terminator sample. Everything outside
//! the written prefix is left byte-for-byte identical to the carrier.
//!
//! Both directions are pure functions over [`PixelBuffer`](crate::carrier::PixelBuffer):
//! no I/O, no shared state, no partial output on failure. Encoding clones the
//! carrier and edits the copy; the caller's buffer is never touched.
//!
//! The payload survives only lossless persistence. The carrier adapter
//! enforces that on the write path; tests cover the failure mode explicitly.

pub mod capacity;
pub mod channel;
pub mod error;
pub mod frame;
pub mod order;
mod pipeline;

pub use capacity::message_capacity;
pub use channel::Channel;
pub use error::StegoError;
pub use pipeline::{
    decode_message, decode_message_in_channel, encode_message, encode_message_in_channel,
};
