//! Image files as pixel grids.
//!
//! Decoding lives outside the preview core: the core only sees the
//! [`PixelGrid`](crate::pixels::PixelGrid) produced here.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::error::MarqueeError;

/// Decodes an image file into 8-bit RGB, discarding any alpha channel.
pub fn load_pixels(path: &Path) -> Result<RgbImage, MarqueeError> {
    let decoded = image::open(path).map_err(|source| MarqueeError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    info!(
        "decoded {} ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(rgb)
}

/// Reads an image's dimensions from its header without decoding pixels.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), MarqueeError> {
    let size = imagesize::size(path).map_err(|source| MarqueeError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    let to_u32 = |value: usize| {
        u32::try_from(value).map_err(|_| MarqueeError::ImageTooLarge {
            path: path.to_path_buf(),
            value,
        })
    };

    Ok((to_u32(size.width)?, to_u32(size.height)?))
}
