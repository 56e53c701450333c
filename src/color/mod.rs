//! Perceptual color mapping.

/// CIE LCh to display sRGB conversion with bounded gamut clipping.
pub mod lch;
