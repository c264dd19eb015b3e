//! Particle field: owns the particles and drives one frame at a time.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::style::Color;
use starglyph_core::Settings;

use crate::particle::{Particle, Viewport};
use crate::surface::Surface;

/// Particles added by one click burst.
pub const EXPLOSION_PARTICLE_COUNT: usize = 50;
/// Top speed of burst particles.
pub const EXPLOSION_SPEED: f32 = 5.0;
/// Lifetime of burst particles in frames.
pub const EXPLOSION_LIFETIME: f32 = 60.0;

/// Input that changes the field between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// New base velocity; live particles keep their heading.
    Velocity(f32),
    /// New color, applied to every live particle.
    Color(Color),
    /// New text, applied to every live particle.
    Text(String),
    /// Pointer activation at a logical position.
    Click { x: f32, y: f32 },
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
}

/// Particle field state.
#[derive(Debug)]
pub struct Field {
    /// Live particles, base population first then any bursts.
    particles: Vec<Particle>,
    /// Logical size of the drawing surface.
    viewport: Viewport,
    /// Size of the base population.
    particle_count: usize,
    rng: StdRng,
}

impl Field {
    /// Create an empty field seeded from the OS.
    ///
    /// Call [`init_particles`](Self::init_particles) to populate it.
    pub fn new(viewport: Viewport, particle_count: usize) -> Self {
        Self::from_rng(viewport, particle_count, StdRng::from_os_rng())
    }

    /// Create an empty field with a reproducible random sequence.
    pub fn with_seed(viewport: Viewport, particle_count: usize, seed: u64) -> Self {
        Self::from_rng(viewport, particle_count, StdRng::seed_from_u64(seed))
    }

    fn from_rng(viewport: Viewport, particle_count: usize, rng: StdRng) -> Self {
        Self {
            particles: Vec::with_capacity(particle_count),
            viewport,
            particle_count,
            rng,
        }
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Logical size of the drawing surface.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Size of the base population.
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Replace every particle with a fresh base population.
    ///
    /// Particles are built at a random position and then reset, so they all
    /// start just outside an edge.
    pub fn init_particles(&mut self, settings: &Settings) {
        let viewport = self.viewport;
        self.particles.clear();
        for _ in 0..self.particle_count {
            let x = self.rng.random::<f32>() * viewport.width;
            let y = self.rng.random::<f32>() * viewport.height;
            let mut particle = Particle::new(
                x,
                y,
                settings.text.as_str(),
                settings.color,
                settings.velocity,
                &mut self.rng,
            );
            particle.reset(viewport, settings, &mut self.rng);
            self.particles.push(particle);
        }
        log::debug!(
            "initialized {} particles in {}x{}",
            self.particles.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Append a burst of short-lived particles flying out from `(x, y)`.
    pub fn create_explosion(&mut self, x: f32, y: f32, settings: &Settings) {
        self.particles.reserve(EXPLOSION_PARTICLE_COUNT);
        for _ in 0..EXPLOSION_PARTICLE_COUNT {
            let angle = self.rng.random::<f32>() * TAU;
            let vx = angle.cos() * EXPLOSION_SPEED * self.rng.random::<f32>();
            let vy = angle.sin() * EXPLOSION_SPEED * self.rng.random::<f32>();
            self.particles.push(Particle::with_motion(
                x,
                y,
                settings.text.as_str(),
                settings.color,
                (vx, vy),
                EXPLOSION_LIFETIME,
                &mut self.rng,
            ));
        }
        log::debug!(
            "explosion at ({x:.1}, {y:.1}), {} particles live",
            self.particles.len()
        );
    }

    /// Advance every particle one frame without drawing.
    pub fn step(&mut self, settings: &Settings) {
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.update(viewport, settings, &mut self.rng);
        }
    }

    /// Render one frame: clear, then update and draw each particle in turn.
    pub fn animate(&mut self, surface: &mut impl Surface, settings: &Settings) {
        surface.clear();
        surface.set_global_alpha(1.0);

        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.update(viewport, settings, &mut self.rng);
            particle.draw(surface);
        }
    }

    /// Apply a control change, pointer click, or resize.
    pub fn handle(
        &mut self,
        settings: &mut Settings,
        event: FieldEvent,
    ) -> starglyph_core::Result<()> {
        match event {
            FieldEvent::Velocity(velocity) => {
                let velocity = settings.set_velocity(velocity)?;
                self.rescale_velocities(velocity);
            }
            FieldEvent::Color(color) => {
                settings.color = color;
                for particle in &mut self.particles {
                    particle.color = color;
                }
            }
            FieldEvent::Text(text) => {
                for particle in &mut self.particles {
                    particle.text.clone_from(&text);
                }
                settings.text = text;
            }
            FieldEvent::Click { x, y } => self.create_explosion(x, y, settings),
            FieldEvent::Resize { width, height } => {
                self.resize(Viewport::new(width, height), settings)
            }
        }
        Ok(())
    }

    /// Change the surface size and rebuild the base population.
    ///
    /// Burst particles are discarded along with the old population.
    pub fn resize(&mut self, viewport: Viewport, settings: &Settings) {
        log::info!(
            "resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.init_particles(settings);
    }

    /// Scale every particle to `target` speed keeping its heading.
    ///
    /// A particle with no usable heading gets a random one.
    fn rescale_velocities(&mut self, target: f32) {
        for particle in &mut self.particles {
            let speed = particle.speed();
            if speed.is_finite() && speed > f32::EPSILON {
                let ratio = target / speed;
                particle.vx *= ratio;
                particle.vy *= ratio;
            } else {
                let angle = self.rng.random::<f32>() * TAU;
                particle.vx = angle.cos() * target;
                particle.vy = angle.sin() * target;
            }
        }
    }
}
