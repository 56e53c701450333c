use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, check_frame_size, flatten_over_bg};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ChromaError, ChromaResult};
use crate::render::surface::FrameRGBA;

/// Sink writing one PNG per frame into a directory.
///
/// Files are named `<prefix>_<index>.png` with the index zero-padded to five digits.
/// Existing files are replaced unless overwriting is turned off.
#[derive(Debug)]
pub struct PngSequenceSink {
    out_dir: PathBuf,
    prefix: String,
    overwrite: bool,
    cfg: Option<SinkConfig>,
    scratch: Vec<u8>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Write frames into `out_dir` with the `frame` prefix.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(out_dir, "frame")
    }

    /// Write frames into `out_dir` with a custom file prefix.
    pub fn with_prefix(out_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            prefix: prefix.into(),
            overwrite: true,
            cfg: None,
            scratch: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Refuse to replace existing frame files when `overwrite` is `false`.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Path a given frame index is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.out_dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written since the last `begin`.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> ChromaResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ChromaError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("failed to create output directory '{}'", self.out_dir.display())
        })?;
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.written.clear();
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ChromaResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| ChromaError::encode("png sink not started"))?;
        check_frame_size(cfg, frame)?;
        let path = self.frame_path(idx);
        if !self.overwrite && path.exists() {
            return Err(ChromaError::validation(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        flatten_over_bg(&mut self.scratch, &frame.data, frame.premultiplied, [0, 0, 0])?;
        write_png(&path, &self.scratch, frame.width, frame.height)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ChromaResult<()> {
        if self.cfg.take().is_none() {
            return Err(ChromaError::encode("png sink not started"));
        }
        tracing::debug!(
            frames = self.written.len(),
            dir = %self.out_dir.display(),
            "png sequence complete"
        );
        Ok(())
    }
}

/// Write opaque RGBA8 bytes as a PNG, creating parent directories.
pub fn write_png(path: &Path, rgba: &[u8], width: u32, height: u32) -> ChromaResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    }
    image::save_buffer_with_format(
        path,
        rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
