use crate::foundation::math::lerp;

/// Upper bound of the background brightness oscillator.
pub const MAX_BRIGHTNESS: f64 = 255.0;
/// Exponential smoothing factor of the shadow phase, per frame.
pub const SHADOW_SMOOTHING: f64 = 0.05;
/// Pixel distance between a shape and its shadow copies at full phase.
pub const SHADOW_OFFSET_PX: f64 = 2.0;
/// Upper bound of the fade speed control.
pub const MAX_FADE_SPEED: f64 = 10.0;

/// Background fade controls. Changing these never rebuilds the scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Whether the background brightness oscillates.
    pub background_fading: bool,
    /// Brightness change per frame, `[0, 10]`.
    pub fade_speed: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            background_fading: false,
            fade_speed: 1.0,
        }
    }
}

impl AnimationSettings {
    /// Return a copy with the fade speed clamped to the control range.
    pub fn clamped(self) -> Self {
        Self {
            fade_speed: self.fade_speed.clamp(0.0, MAX_FADE_SPEED),
            ..self
        }
    }
}

/// Values the draw step needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Gray level used to clear the canvas.
    pub background: u8,
    /// Horizontal (or vertical, per shape kind) offset of the left shadow copy.
    pub left_offset: f64,
    /// Offset of the right shadow copy.
    pub right_offset: f64,
}

/// Process-wide animation state, advanced once per frame.
///
/// Independent of the generation parameters: a scene rebuild reads it but never resets it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    brightness: f64,
    fade_direction: f64,
    shadow_phase: f64,
    shadow_increasing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Startup state: black background fading up, shadows fully shifted.
    pub fn new() -> Self {
        Self {
            brightness: 0.0,
            fade_direction: 1.0,
            shadow_phase: 1.0,
            shadow_increasing: true,
        }
    }

    /// Advance one frame.
    ///
    /// Returns `true` when the fade bounced off a bound this frame.
    pub fn update(&mut self, settings: &AnimationSettings) -> bool {
        let mut bounced = false;
        if settings.background_fading {
            self.brightness += self.fade_direction * settings.fade_speed;
            if self.brightness > MAX_BRIGHTNESS || self.brightness < 0.0 {
                self.fade_direction = -self.fade_direction;
                self.brightness = self.brightness.clamp(0.0, MAX_BRIGHTNESS);
                self.shadow_increasing = !self.shadow_increasing;
                bounced = true;
                tracing::debug!(
                    brightness = self.brightness,
                    direction = self.fade_direction,
                    "background fade bounced"
                );
            }
        }

        let target = if self.shadow_increasing { 1.0 } else { -1.0 };
        self.shadow_phase = lerp(self.shadow_phase, target, SHADOW_SMOOTHING);
        bounced
    }

    /// Background brightness in `[0, 255]`.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Smoothed shadow phase in `[-1, 1]`.
    pub fn shadow_phase(&self) -> f64 {
        self.shadow_phase
    }

    /// `true` while the fade runs downwards; flips shadow sides on the next rebuild.
    pub fn is_inverted(&self) -> bool {
        self.fade_direction < 0.0
    }

    /// Shadow target direction.
    pub fn shadow_increasing(&self) -> bool {
        self.shadow_increasing
    }

    /// Derive the draw inputs for the current frame.
    pub fn frame_state(&self) -> FrameState {
        let offset = SHADOW_OFFSET_PX * self.shadow_phase;
        FrameState {
            background: self.brightness.round().clamp(0.0, MAX_BRIGHTNESS) as u8,
            left_offset: -offset,
            right_offset: offset,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
