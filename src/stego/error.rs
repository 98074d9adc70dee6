// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Error types for the steganographic codec.
//!
//! [`StegoError`] covers all failure modes from message validation through
//! embedding, extraction, and the carrier I/O it wraps.

use core::fmt;

use crate::carrier::error::CarrierError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The message to embed is empty.
    EmptyMessage,
    /// The message contains a character that does not fit in one byte,
    /// or the terminator value itself.
    UnsupportedCharacter(char),
    /// The message (plus terminator) needs more samples than the carrier has.
    CapacityExceeded {
        /// Samples needed: message bytes plus the terminator.
        required: usize,
        /// Samples the carrier provides: `width × height`.
        available: usize,
    },
    /// No terminator found anywhere in the stream — the image was never
    /// encoded by this scheme, or was corrupted (e.g. by lossy re-encoding).
    MalformedStream,
    /// The stream terminates before its first byte.
    EmptyResult,
    /// The carrier adapter failed to load or save an image.
    Carrier(CarrierError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::UnsupportedCharacter(c) => {
                write!(f, "character {c:?} cannot be encoded as a single byte")
            }
            Self::CapacityExceeded { required, available } => {
                write!(f, "message needs {required} samples but the carrier has {available}")
            }
            Self::MalformedStream => write!(f, "no embedded message found (missing terminator)"),
            Self::EmptyResult => write!(f, "embedded message is empty"),
            Self::Carrier(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carrier(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CarrierError> for StegoError {
    fn from(e: CarrierError) -> Self {
        Self::Carrier(e)
    }
}
