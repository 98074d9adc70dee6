// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Message framing: byte mapping, validation, and the stream terminator.
//!
//! The embedded stream is as small as the scheme allows:
//!
//! ```text
//! [N samples] message bytes, one per visited pixel, designated channel
//! [1 sample ] terminator 0x00
//! ```
//!
//! A trailing sentinel was chosen over a length prefix so that the first
//! message byte lands on the first visited pixel — the carrier's content
//! starts carrying payload immediately, and the overhead is exactly one
//! sample. The trade-off: `0x00` can never appear inside a message, so
//! validation rejects it along with anything that does not fit in one byte.
//!
//! Characters are mapped through their Unicode codepoint, which for values
//! up to `U+00FF` coincides with Latin-1. The reverse mapping is total:
//! every byte decodes to a character, so extraction cannot fail on content.

use crate::stego::error::StegoError;

/// Sentinel sample written immediately after the last message byte.
pub const TERMINATOR: u8 = 0x00;

/// Samples of overhead the terminator adds on top of the message itself.
pub const TERMINATOR_OVERHEAD: usize = 1;

/// Validate a message and map it to its single-byte-per-character form.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] if the message has no characters.
/// - [`StegoError::UnsupportedCharacter`] for any character above `U+00FF`
///   or equal to the terminator value.
pub fn message_to_bytes(message: &str) -> Result<Vec<u8>, StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }
    let mut bytes = Vec::with_capacity(message.len());
    for ch in message.chars() {
        let code = ch as u32;
        if code == TERMINATOR as u32 || code > 0xFF {
            return Err(StegoError::UnsupportedCharacter(ch));
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}

/// Reconstruct a message from extracted bytes (the inverse of
/// [`message_to_bytes`]).
pub fn bytes_to_message(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_roundtrip() {
        let bytes = message_to_bytes("Hello, world!").unwrap();
        assert_eq!(bytes, b"Hello, world!");
        assert_eq!(bytes_to_message(&bytes), "Hello, world!");
    }

    #[test]
    fn latin1_roundtrip() {
        let msg = "café: naïve façade, ß and ü";
        let bytes = message_to_bytes(msg).unwrap();
        assert_eq!(bytes.len(), msg.chars().count());
        assert_eq!(bytes_to_message(&bytes), msg);
    }

    #[test]
    fn one_byte_per_character() {
        // 'é' is two bytes in UTF-8 but one in this mapping.
        let bytes = message_to_bytes("é").unwrap();
        assert_eq!(bytes, vec![0xE9]);
    }

    #[test]
    fn empty_message_rejected() {
        assert!(matches!(message_to_bytes(""), Err(StegoError::EmptyMessage)));
    }

    #[test]
    fn terminator_character_rejected() {
        assert!(matches!(
            message_to_bytes("a\0b"),
            Err(StegoError::UnsupportedCharacter('\0'))
        ));
    }

    #[test]
    fn multibyte_characters_rejected() {
        for msg in ["€", "日本語", "🎉"] {
            assert!(
                matches!(message_to_bytes(msg), Err(StegoError::UnsupportedCharacter(_))),
                "{msg} should be rejected"
            );
        }
    }

    #[test]
    fn every_byte_decodes() {
        let bytes: Vec<u8> = (1..=255).collect();
        let msg = bytes_to_message(&bytes);
        assert_eq!(msg.chars().count(), 255);
        assert_eq!(message_to_bytes(&msg).unwrap(), bytes);
    }
}
