//! Index to placement mapping for the four layout modes.

/// Spiral and wave-grid placement.
pub mod engine;
