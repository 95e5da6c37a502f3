//! Hypercube4D - headless animation driver
//!
//! Loads the configuration, instantiates the shape catalog and rotates the
//! shown shapes for the configured number of frames, logging the projected
//! geometry along the way.

use std::process::ExitCode;

use hypercube4d::config::AppConfig;
use hypercube4d::systems::AnimationSystem;

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Hypercube4D");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut animation = match AnimationSystem::from_config(&config) {
        Ok(animation) => animation,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let reallocations = animation.run(config.animation.frames);
    log::info!(
        "Finished after {} frames: {} vertices in {} ranges ({} buffer reallocations)",
        animation.frame(),
        animation.geometry().vertex_count(),
        animation.geometry().range_count(),
        reallocations
    );
    ExitCode::SUCCESS
}
