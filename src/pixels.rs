//! RGBA pixel buffer used by every transformation
//!
//! A [`PixelBuffer`] is a `width x height` grid stored as one flat byte
//! vector addressed by `(y * width + x) * 4`. Reads outside the grid return
//! fully transparent black, which lets effect code probe neighbours without
//! bounds checks of its own.

use image::RgbaImage;

use crate::error::TransformError;

/// Alpha at or below this value counts as empty.
///
/// Fixed for the whole engine: sampling, tinting and every effect use it.
pub const OPACITY_THRESHOLD: u8 = 20;

/// A flat RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, data: vec![0; width as usize * height as usize * 4] }
    }

    /// Wrap raw RGBA bytes, checking that the length matches the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TransformError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(TransformError::BufferSize { width, height, expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = width as usize * height as usize * 4;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes in row-major order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of `(x, y)`, or `None` when outside the grid.
    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Read a pixel. Out-of-range reads return `[0, 0, 0, 0]`.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> [u8; 4] {
        match self.index(x, y) {
            Some(i) => [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]],
            None => [0, 0, 0, 0],
        }
    }

    #[inline]
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.data[i + 3])
    }

    /// Alpha strictly above [`OPACITY_THRESHOLD`].
    #[inline]
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.alpha(x, y) > OPACITY_THRESHOLD
    }

    /// Out-of-range coordinates count as empty.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        !self.is_opaque(x, y)
    }

    /// Replace the RGB channels of an in-range pixel, keeping its alpha.
    #[inline]
    pub(crate) fn set_rgb(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 3].copy_from_slice(&rgb);
        }
    }

    /// Number of pixels whose alpha is above the threshold.
    pub fn opaque_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] > OPACITY_THRESHOLD).count()
    }

    /// Whether every pixel has alpha 0.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Convert into an `image` crate buffer for encoding.
    pub fn into_image(self) -> RgbaImage {
        let (width, height) = (self.width, self.height);
        RgbaImage::from_raw(width, height, self.data)
            .unwrap_or_else(|| RgbaImage::new(width, height))
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height, data: image.into_raw() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.as_bytes().len(), 24);
        assert!(buf.is_fully_transparent());
    }

    #[test]
    fn test_index_layout() {
        let mut data = vec![0u8; 3 * 2 * 4];
        // (x=2, y=1) -> (1 * 3 + 2) * 4 = 20
        data[20..24].copy_from_slice(&[1, 2, 3, 4]);
        let buf = PixelBuffer::from_rgba(3, 2, data).unwrap();
        assert_eq!(buf.get(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_range_read_is_transparent_black() {
        let buf = PixelBuffer::filled(2, 2, [255, 255, 255, 255]);
        assert_eq!(buf.get(-1, 0), [0, 0, 0, 0]);
        assert_eq!(buf.get(0, 2), [0, 0, 0, 0]);
        assert_eq!(buf.get(2, 0), [0, 0, 0, 0]);
        assert!(buf.is_empty(-1, -1));
    }

    #[test]
    fn test_opacity_threshold_boundary() {
        let mut data = vec![0u8; 2 * 4];
        data[3] = 20;
        data[7] = 21;
        let buf = PixelBuffer::from_rgba(2, 1, data).unwrap();
        assert!(buf.is_empty(0, 0));
        assert!(buf.is_opaque(1, 0));
    }

    #[test]
    fn test_from_rgba_rejects_wrong_length() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            TransformError::BufferSize { width: 2, height: 2, expected: 16, actual: 15 }
        );
    }

    #[test]
    fn test_image_round_trip_preserves_bytes() {
        let buf = PixelBuffer::filled(4, 3, [10, 20, 30, 40]);
        let image = buf.clone().into_image();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(PixelBuffer::from(image), buf);
    }

    #[test]
    fn test_opaque_count() {
        let mut buf = PixelBuffer::new(3, 1);
        buf.as_bytes_mut()[3] = 255;
        buf.as_bytes_mut()[7] = 20;
        assert_eq!(buf.opaque_count(), 1);
    }
}
