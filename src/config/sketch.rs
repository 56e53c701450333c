use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::state::AnimationSettings;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ChromaError, ChromaResult};
use crate::scene::params::GenerationParams;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 1;

/// JSON-facing sketch configuration.
///
/// Every field is optional; `{}` yields the default 1500x800 sketch at 60 fps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Canvas size in pixels.
    pub canvas: Canvas,
    /// Frame rate used by video and sequence output.
    pub fps: Fps,
    /// Seed of the random hue stream.
    pub seed: u64,
    /// Scene generation parameters.
    pub params: GenerationParams,
    /// Background fade settings.
    pub animation: AnimationSettings,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            seed: DEFAULT_SEED,
            params: GenerationParams::default(),
            animation: AnimationSettings::default(),
        }
    }
}

impl SketchConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChromaResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChromaError::serde(format!("parse sketch config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> ChromaResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChromaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChromaError::validation(format!("open sketch config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON rendering of this config.
    pub fn to_json_pretty(&self) -> ChromaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChromaError::serde(format!("serialize sketch config: {e}")))
    }

    /// Reject configs no surface or sink can honor.
    pub fn validate(&self) -> ChromaResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ChromaError::validation("canvas width/height must be > 0"));
        }
        let max = u32::from(u16::MAX);
        if self.canvas.width > max || self.canvas.height > max {
            return Err(ChromaError::validation(format!(
                "canvas {}x{} exceeds {max}x{max}",
                self.canvas.width, self.canvas.height
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.animation.fade_speed.is_finite() {
            return Err(ChromaError::validation(
                "animation.fade_speed must be finite",
            ));
        }
        self.params.validate()
    }

    /// Validate, then clamp every control into its range.
    pub fn resolved(self) -> ChromaResult<Self> {
        self.validate()?;
        Ok(Self {
            params: self.params.clamped(),
            animation: self.animation.clamped(),
            ..self
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/sketch.rs"]
mod tests;
