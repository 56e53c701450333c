//! Scene model and full-collection regeneration.

/// Scene regeneration and pointer picking.
pub mod builder;
/// Generation parameters and their control ranges.
pub mod params;
/// Shape kinds and immutable shape descriptors.
pub mod shape;
