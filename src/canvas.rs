//! Canvas expansion
//!
//! Every effect grows detail outside the sprite's original bounds, so the
//! first step of a transformation copies the source into the center of a
//! larger transparent canvas.

use crate::error::TransformError;
use crate::pixels::PixelBuffer;

/// Largest padding accepted by [`expand`]. Catalog entries stay far below it.
pub const MAX_PADDING: u32 = 256;

/// Placement of the source sprite inside an expanded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    /// Coordinates of every pixel in the region, row-major.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.y + self.height as i32)
            .flat_map(move |y| (self.x..self.x + self.width as i32).map(move |x| (x, y)))
    }
}

/// Copy `source` into a transparent canvas with `padding` pixels on every side.
///
/// The input is never modified.
pub fn expand(source: &PixelBuffer, padding: u32) -> Result<PixelBuffer, TransformError> {
    expand_with_region(source, padding).map(|(canvas, _)| canvas)
}

/// Like [`expand`], also returning where the source landed.
pub fn expand_with_region(
    source: &PixelBuffer,
    padding: u32,
) -> Result<(PixelBuffer, Region), TransformError> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(TransformError::EmptyImage { width, height });
    }
    if padding > MAX_PADDING {
        return Err(TransformError::InvalidPadding { padding, max: MAX_PADDING });
    }

    let new_width = width + padding * 2;
    let new_height = height + padding * 2;
    let mut canvas = PixelBuffer::new(new_width, new_height);

    let row_bytes = width as usize * 4;
    let src = source.as_bytes();
    let dst = canvas.as_bytes_mut();
    for y in 0..height as usize {
        let si = y * row_bytes;
        let di = ((y + padding as usize) * new_width as usize + padding as usize) * 4;
        dst[di..di + row_bytes].copy_from_slice(&src[si..si + row_bytes]);
    }

    let region = Region { x: padding as i32, y: padding as i32, width, height };
    Ok((canvas, region))
}
