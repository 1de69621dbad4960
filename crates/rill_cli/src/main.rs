//! `rill [settings.json]`: render a demo scene to a PNG file.

mod scenes;
mod settings;

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::scenes::build_scene;
use crate::settings::RenderSettings;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = match env::args_os().nth(1) {
        Some(path) => RenderSettings::load(path)?,
        None => {
            log::info!("No settings file given; using defaults");
            RenderSettings::default()
        }
    };
    log::debug!("Settings: {:?}", settings);

    let start = Instant::now();
    let world = build_scene(&settings)?;
    log::info!("Scene built in {:.2?}", start.elapsed());

    let mut film = world.new_film();
    log::info!(
        "Rendering {}x{} ({})",
        film.width,
        film.height,
        if settings.parallel { "parallel" } else { "serial" }
    );
    if settings.parallel {
        world.render_parallel(&mut film, settings.bucket_size);
    } else {
        world.render(&mut film);
    }

    film.save_png(&settings.output)
        .with_context(|| format!("failed to write {}", settings.output.display()))?;
    log::info!("Saved to {}", settings.output.display());

    Ok(())
}
