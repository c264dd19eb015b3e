//! Text particle field for starglyph.
//!
//! This crate provides the particle simulation (drift, fade, edge respawn
//! with a radial push away from the centre, click bursts) and a
//! [`TerminalCanvas`] that draws it into a ratatui buffer. The simulation
//! only talks to the [`Surface`] trait, so it runs without a terminal.

mod canvas;
mod color;
mod field;
mod particle;
mod surface;

pub use canvas::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, TerminalCanvas};
pub use color::{blend, to_rgb};
pub use field::{
    EXPLOSION_LIFETIME, EXPLOSION_PARTICLE_COUNT, EXPLOSION_SPEED, Field, FieldEvent,
};
pub use particle::{
    EDGE_PADDING, FONT_SIZE_MAX, FONT_SIZE_MIN, MAX_LIFETIME_MAX, MAX_LIFETIME_MIN, Particle,
    RADIAL_MIN_DISTANCE, RADIAL_PUSH, Viewport,
};
pub use surface::Surface;
