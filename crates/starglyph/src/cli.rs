//! Command line arguments for starglyph.

use std::path::PathBuf;

use clap::Parser;
use starglyph_config::Config;

#[derive(Debug, Parser)]
#[command(name = "starglyph")]
#[command(about = "A radial field of drifting text particles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of particles in the base population
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Base particle velocity
    #[arg(long)]
    pub velocity: Option<f32>,

    /// Particle color (#rgb, #rrggbb or a color name)
    #[arg(long)]
    pub color: Option<String>,

    /// Text each particle displays
    #[arg(short, long)]
    pub text: Option<String>,

    /// Seed for a reproducible field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overlay the values given on the command line onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(count) = self.count {
            config.particle_count = count;
        }
        if let Some(velocity) = self.velocity {
            config.velocity = velocity;
        }
        if let Some(color) = &self.color {
            config.color.clone_from(color);
        }
        if let Some(text) = &self.text {
            config.text.clone_from(text);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.log_file.is_some() {
            config.log_file.clone_from(&self.log_file);
        }
    }
}
