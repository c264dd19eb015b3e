mod app;
mod cli;
mod logging;

use std::io::stdout;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use starglyph_config::Config;

use crate::app::App;
use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (mut config, source) = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    logging::init(config.log_path().as_deref(), cli.verbose)?;
    match &source {
        Some(path) => log::info!("loaded config from {}", path.display()),
        None => log::info!("no config file, using defaults"),
    }
    for warning in config.validate() {
        log::warn!("config: {warning}");
    }

    let settings = config.settings()?;
    log::info!(
        "starting with {} particles, velocity {}, text {:?}",
        config.particle_count,
        settings.velocity,
        settings.text
    );
    let app = App::new(&config, settings);

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| app.run(terminal));
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
