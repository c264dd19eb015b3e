//! A single drifting text particle.

use std::f32::consts::TAU;

use rand::Rng;
use ratatui::style::Color;
use starglyph_core::Settings;

use crate::surface::Surface;

/// Distance outside the viewport where particles respawn and are culled.
pub const EDGE_PADDING: f32 = 50.0;
/// Smallest font size, inclusive.
pub const FONT_SIZE_MIN: f32 = 10.0;
/// Largest font size, exclusive.
pub const FONT_SIZE_MAX: f32 = 25.0;
/// Shortest randomized lifetime in frames, inclusive.
pub const MAX_LIFETIME_MIN: f32 = 100.0;
/// Longest randomized lifetime in frames, exclusive.
pub const MAX_LIFETIME_MAX: f32 = 300.0;
/// Respawns closer to the centre than this get no radial push.
pub const RADIAL_MIN_DISTANCE: f32 = 10.0;
/// Radial push as a fraction of the base velocity.
pub const RADIAL_PUSH: f32 = 0.05;

/// Logical size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre point of the surface.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether `(x, y)` lies inside the padded bounds.
    pub fn contains_padded(&self, x: f32, y: f32) -> bool {
        x >= -EDGE_PADDING
            && x <= self.width + EDGE_PADDING
            && y >= -EDGE_PADDING
            && y <= self.height + EDGE_PADDING
    }
}

/// Edge a particle respawns beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }
}

/// State for a single text particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in logical pixels.
    pub x: f32,
    /// Vertical position in logical pixels.
    pub y: f32,
    /// Horizontal delta per frame.
    pub vx: f32,
    /// Vertical delta per frame.
    pub vy: f32,
    /// Text drawn at the particle position.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Opacity (0.0-1.0), fades linearly over the lifetime.
    pub opacity: f32,
    /// Frames lived since the last reset.
    pub lifetime: u32,
    /// Frames to live before the next reset.
    pub max_lifetime: f32,
}

impl Particle {
    /// Create a particle at `(x, y)` moving in a random direction.
    ///
    /// Each velocity axis is `velocity` scaled by its own jitter in
    /// `[0.5, 1.0)`.
    pub fn new(
        x: f32,
        y: f32,
        text: impl Into<String>,
        color: Color,
        velocity: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let (vx, vy) = random_velocity(velocity, rng);
        Self {
            x,
            y,
            vx,
            vy,
            text: text.into(),
            color,
            font_size: random_font_size(rng),
            opacity: 1.0,
            lifetime: 0,
            max_lifetime: random_max_lifetime(rng),
        }
    }

    /// Create a particle with an explicit velocity and lifetime.
    pub fn with_motion(
        x: f32,
        y: f32,
        text: impl Into<String>,
        color: Color,
        (vx, vy): (f32, f32),
        max_lifetime: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            text: text.into(),
            color,
            font_size: random_font_size(rng),
            opacity: 1.0,
            lifetime: 0,
            max_lifetime,
        }
    }

    /// Current speed magnitude.
    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }

    /// Draw the particle. Does not change any particle state.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_global_alpha(self.opacity);
        surface.set_fill_color(self.color);
        surface.set_font(self.font_size);
        surface.fill_text(&self.text, self.x, self.y);
    }

    /// Advance one frame, respawning when out of bounds or expired.
    pub fn update(&mut self, viewport: Viewport, settings: &Settings, rng: &mut impl Rng) {
        self.x += self.vx;
        self.y += self.vy;

        self.opacity = (self.opacity - 1.0 / self.max_lifetime).max(0.0);
        self.lifetime += 1;

        if !viewport.contains_padded(self.x, self.y) || self.lifetime as f32 > self.max_lifetime {
            self.reset(viewport, settings, rng);
        }
    }

    /// Respawn just outside a random edge with fresh appearance and motion.
    ///
    /// The new velocity gets a push along the direction from the viewport
    /// centre to the spawn point, which makes the field drift outward.
    pub fn reset(&mut self, viewport: Viewport, settings: &Settings, rng: &mut impl Rng) {
        let (x, y) = match Edge::random(rng) {
            Edge::Top => (rng.random::<f32>() * viewport.width, -EDGE_PADDING),
            Edge::Right => (
                viewport.width + EDGE_PADDING,
                rng.random::<f32>() * viewport.height,
            ),
            Edge::Bottom => (
                rng.random::<f32>() * viewport.width,
                viewport.height + EDGE_PADDING,
            ),
            Edge::Left => (-EDGE_PADDING, rng.random::<f32>() * viewport.height),
        };
        self.x = x;
        self.y = y;

        self.text.clone_from(&settings.text);
        self.color = settings.color;
        self.font_size = random_font_size(rng);
        self.opacity = 1.0;
        self.lifetime = 0;
        self.max_lifetime = random_max_lifetime(rng);

        let (vx, vy) = random_velocity(settings.velocity, rng);
        self.vx = vx;
        self.vy = vy;

        let (cx, cy) = viewport.center();
        let dx = self.x - cx;
        let dy = self.y - cy;
        let distance = dx.hypot(dy);
        if distance > RADIAL_MIN_DISTANCE {
            let push = RADIAL_PUSH * settings.velocity;
            self.vx += dx / distance * push;
            self.vy += dy / distance * push;
        }
    }
}

fn random_velocity(velocity: f32, rng: &mut impl Rng) -> (f32, f32) {
    let angle = rng.random::<f32>() * TAU;
    let vx = angle.cos() * velocity * (rng.random::<f32>() * 0.5 + 0.5);
    let vy = angle.sin() * velocity * (rng.random::<f32>() * 0.5 + 0.5);
    (vx, vy)
}

fn random_font_size(rng: &mut impl Rng) -> f32 {
    rng.random_range(FONT_SIZE_MIN..FONT_SIZE_MAX)
}

fn random_max_lifetime(rng: &mut impl Rng) -> f32 {
    rng.random_range(MAX_LIFETIME_MIN..MAX_LIFETIME_MAX)
}
