use crate::foundation::core::{Affine, BezPath, Rgb8};
use crate::foundation::error::ChromaResult;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value of pixel `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// The immediate-mode drawing primitives a host provides.
///
/// Fills are solid and unstroked. The transform maps shape-local coordinates to canvas pixels.
pub trait DrawSurface {
    /// Fill the whole canvas with an opaque gray.
    fn clear(&mut self, gray: u8) -> ChromaResult<()>;

    /// Fill `path` with `color` under `transform`.
    fn fill_path(&mut self, transform: Affine, path: &BezPath, color: Rgb8) -> ChromaResult<()>;
}
