//! Drawing: shape geometry, the host surface trait and the CPU surface.

/// CPU raster surface powered by `vello_cpu`.
pub mod cpu;
/// Scene drawing through a scoped-transform painter.
pub mod draw;
/// Local-space outlines for each shape kind.
pub mod geometry;
/// Host drawing interface and frame readback type.
pub mod surface;
