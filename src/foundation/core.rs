use crate::foundation::error::{ChromaError, ChromaResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Frame number; the `k`-th tick of a session produces frame `k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames `start..end` of a session's tick stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRange {
    /// First frame rendered.
    pub start: FrameIndex,
    /// One past the last frame rendered.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Fails when `end` comes before `start`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ChromaResult<Self> {
        if end.0 < start.0 {
            return Err(ChromaError::validation(format!(
                "frame range {}..{} ends before it starts",
                start.0, end.0
            )));
        }
        Ok(Self { start, end })
    }

    /// Frame count.
    pub fn len_frames(self) -> u64 {
        self.end.0 - self.start.0
    }

    /// No frames to render.
    pub fn is_empty(self) -> bool {
        self.len_frames() == 0
    }
}

/// Output frame rate as `num / den` frames per second.
///
/// Handed to sinks; the animation itself advances per tick, not per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Seconds.
    pub den: u32,
}

impl Fps {
    /// Both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> ChromaResult<Self> {
        if num == 0 || den == 0 {
            return Err(ChromaError::validation(format!(
                "fps {num}/{den} must have non-zero parts"
            )));
        }
        Ok(Self { num, den })
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas midpoint, used as the layout origin.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 800,
        }
    }
}

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with all channels equal to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels as an opaque RGBA8 quadruple.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
