//! Single-threaded sketch driver.

/// `SketchSession`: parameters, scene, animation and selection behind one owner.
pub mod sketch;
