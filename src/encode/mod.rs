//! Frame sinks.
//!
//! Sinks consume rendered frames in tick order and are driven by `SketchSession::render_range`.

/// Numbered PNG sequence output.
pub mod png;
/// Frame sink trait and the in-memory sink.
pub mod sink;
