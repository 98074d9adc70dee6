// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Error types for carrier image loading and saving.

use std::fmt;

/// Errors that can occur while reading or writing carrier images.
#[derive(Debug)]
pub enum CarrierError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// The image data could not be decoded or encoded.
    Image(image::ImageError),
    /// The requested output format is lossy and would destroy embedded samples.
    LossyFormat(String),
    /// The output path has no recognized lossless image extension.
    UnknownFormat(String),
    /// A raw sample vector does not match `width × height × 4`.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for CarrierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "carrier I/O error: {e}"),
            Self::Image(e) => write!(f, "carrier image error: {e}"),
            Self::LossyFormat(ext) => {
                write!(f, "'{ext}' is a lossy format; use a lossless one (png, bmp)")
            }
            Self::UnknownFormat(ext) => {
                write!(f, "unrecognized output format '{ext}' (expected png or bmp)")
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "sample buffer has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for CarrierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CarrierError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for CarrierError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

pub type Result<T> = std::result::Result<T, CarrierError>;
