use crate::effects::composite::{Rgba8, over_in_place};
use crate::foundation::error::{BannerError, BannerResult};

/// Pixel value of a freshly created canvas: fully transparent white.
pub const CLEAR_PIXEL: Rgba8 = [255, 255, 255, 0];

/// Owned straight-alpha RGBA8 pixel buffer, row-major, 4 bytes per pixel.
///
/// A canvas belongs to exactly one pipeline run; layers and effects mutate it in place and the
/// finished buffer is handed to the caller by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// A `width` x `height` canvas filled with [`CLEAR_PIXEL`].
    ///
    /// Size limits are enforced by the pipeline before this is called.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, CLEAR_PIXEL)
    }

    /// A canvas with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: px.repeat(n),
        }
    }

    /// Wrap an existing RGBA8 buffer; `data.len()` must equal `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> BannerResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| BannerError::validation("canvas buffer size overflow"))?;
        if data.len() != expected {
            return Err(BannerError::validation(format!(
                "canvas buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(x, y)?;
        let p = &self.data[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up ownership of the raw RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Fail with [`BannerError::DimensionMismatch`] unless `other` has this canvas's size.
    pub fn ensure_same_size(&self, other: &Canvas) -> BannerResult<()> {
        if self.size() != other.size() {
            return Err(BannerError::DimensionMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        Ok(())
    }

    /// Composite `top` over this canvas with the source-over law.
    pub fn composite_over(&mut self, top: &Canvas) -> BannerResult<()> {
        self.ensure_same_size(top)?;
        over_in_place(&mut self.data, &top.data, self.width as usize)
    }

    /// Row stride in bytes.
    pub(crate) fn stride(&self) -> usize {
        self.width as usize * 4
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/canvas.rs"]
mod tests;
