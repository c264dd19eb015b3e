//! Core types for the starglyph particle field.
//!
//! Holds the user-adjustable [`Settings`] read by every particle at spawn
//! time, along with the color and text presets the controls cycle through.

mod color;
mod error;
mod settings;
mod text;

pub use color::{ColorPreset, parse_color};
pub use error::{CoreError, Result};
pub use settings::{
    DEFAULT_VELOCITY, Settings, VELOCITY_MAX, VELOCITY_MIN, VELOCITY_STEP,
};
pub use text::TextPreset;
