//! Live control values shared by every particle.

use ratatui::style::Color;

use crate::color::ColorPreset;
use crate::error::{CoreError, Result};
use crate::text::TextPreset;

/// Slowest allowed base velocity, in logical pixels per frame.
pub const VELOCITY_MIN: f32 = 0.5;
/// Fastest allowed base velocity, in logical pixels per frame.
pub const VELOCITY_MAX: f32 = 20.0;
/// Increment applied by one press of the velocity control.
pub const VELOCITY_STEP: f32 = 0.5;
/// Base velocity used when nothing else is configured.
pub const DEFAULT_VELOCITY: f32 = 2.0;

/// Current velocity, color and text.
///
/// Particles copy the color and text at spawn and reset time and derive their
/// velocity from `velocity`. Changing a field here does not touch live
/// particles; the field driver does that explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base speed magnitude.
    pub velocity: f32,
    /// Fill color for new and reset particles.
    pub color: Color,
    /// Text drawn by new and reset particles.
    pub text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            color: ColorPreset::default().color(),
            text: TextPreset::default().text().to_string(),
        }
    }
}

impl Settings {
    /// Build settings, clamping the velocity into range.
    pub fn new(velocity: f32, color: Color, text: impl Into<String>) -> Result<Self> {
        let mut settings = Self {
            velocity: DEFAULT_VELOCITY,
            color,
            text: text.into(),
        };
        settings.set_velocity(velocity)?;
        Ok(settings)
    }

    /// Set the base velocity, clamped to [`VELOCITY_MIN`]..=[`VELOCITY_MAX`].
    ///
    /// Returns the velocity actually stored.
    pub fn set_velocity(&mut self, velocity: f32) -> Result<f32> {
        if !velocity.is_finite() {
            return Err(CoreError::InvalidVelocity(velocity));
        }
        self.velocity = velocity.clamp(VELOCITY_MIN, VELOCITY_MAX);
        Ok(self.velocity)
    }

    /// Velocity one step faster than the current one, clamped.
    pub fn faster(&self) -> f32 {
        (self.velocity + VELOCITY_STEP).min(VELOCITY_MAX)
    }

    /// Velocity one step slower than the current one, clamped.
    pub fn slower(&self) -> f32 {
        (self.velocity - VELOCITY_STEP).max(VELOCITY_MIN)
    }
}
