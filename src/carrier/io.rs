// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Reading and writing carrier image files.
//!
//! Loading accepts anything the `image` crate decodes and normalizes it to
//! 8-bit RGBA before building the A/R/G/B [`PixelBuffer`]. Saving goes the
//! other way and is restricted to [`OutputFormat`] — the lossless subset.
//! There is deliberately no way to persist a buffer through a lossy encoder
//! from this module: one JPEG quantization pass is enough to shred the
//! embedded channel bytes.

use std::path::Path;

use crate::carrier::buffer::{PixelBuffer, SAMPLES_PER_PIXEL};
use crate::carrier::error::{CarrierError, Result};

/// Lossless on-disk formats the adapter will write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
}

impl OutputFormat {
    /// Infer the output format from a path's extension.
    ///
    /// Known lossy extensions are rejected with [`CarrierError::LossyFormat`]
    /// rather than falling back to anything; everything else unrecognized is
    /// [`CarrierError::UnknownFormat`]. GIF is treated as lossy here because
    /// its palette quantization does not preserve arbitrary channel bytes.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "jpg" | "jpeg" | "webp" | "gif" | "avif" => Err(CarrierError::LossyFormat(ext)),
            _ => Err(CarrierError::UnknownFormat(ext)),
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Decode an image file into a [`PixelBuffer`].
///
/// The on-disk format is sniffed from the file content, not the extension.
/// Any decodable format is accepted as a carrier source — only the *output*
/// side is restricted to lossless formats.
pub fn load_pixels(path: &Path) -> Result<PixelBuffer> {
    let img = image::io::Reader::open(path)?.with_guessed_format()?.decode()?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let raw = rgba.into_raw();

    // Reorder RGBA file samples into the buffer's ARGB layout.
    let mut samples = vec![0u8; raw.len()];
    for (argb, rgba) in samples
        .chunks_exact_mut(SAMPLES_PER_PIXEL)
        .zip(raw.chunks_exact(SAMPLES_PER_PIXEL))
    {
        argb[0] = rgba[3];
        argb[1] = rgba[0];
        argb[2] = rgba[1];
        argb[3] = rgba[2];
    }

    log::debug!("loaded {width}x{height} carrier from {}", path.display());
    PixelBuffer::from_raw(width, height, samples)
}

/// Encode a [`PixelBuffer`] to disk in the given lossless format.
pub fn save_pixels(buffer: &PixelBuffer, path: &Path, format: OutputFormat) -> Result<()> {
    let samples = buffer.samples();
    let mut raw = vec![0u8; samples.len()];
    for (rgba, argb) in raw
        .chunks_exact_mut(SAMPLES_PER_PIXEL)
        .zip(samples.chunks_exact(SAMPLES_PER_PIXEL))
    {
        rgba[0] = argb[1];
        rgba[1] = argb[2];
        rgba[2] = argb[3];
        rgba[3] = argb[0];
    }

    let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), raw)
        .expect("PixelBuffer guarantees width * height * 4 samples");
    img.save_with_format(path, format.image_format())?;

    log::debug!(
        "wrote {}x{} payload image to {} as {format:?}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
