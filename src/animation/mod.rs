//! Per-frame animation: background fade and shadow phase.

/// Fade oscillator and smoothed shadow phase.
pub mod state;
