/// Native entry point: `huewheel-native [CONFIG.json] [OUTPUT.png]`
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use huewheel::{AppConfig, ConfigError, Session, raster};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_override = args.next().map(PathBuf::from);

    // Parse first so the logger gets the configured level; version checks
    // and load messages come after it is installed.
    let parsed = match &config_path {
        Some(path) => AppConfig::read(path),
        None => Ok(AppConfig::default()),
    };

    let level = parsed
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default()
        .to_level_filter();
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(parsed, config_path.as_deref(), output_override) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    parsed: Result<AppConfig, ConfigError>,
    config_path: Option<&Path>,
    output_override: Option<PathBuf>,
) -> huewheel::Result<()> {
    let mut config = match config_path {
        Some(path) => parsed?.loaded_from(path)?,
        None => parsed?,
    };
    if let Some(output) = output_override {
        config.output = output;
    }

    let mut session = Session::new(&config);
    for &[x, y] in &config.taps {
        if let Some(color) = session.tap(x, y) {
            println!("{}", color);
        }
    }
    log::info!("Final color {}", session.color());

    let commands = session.render();
    let pixmap = raster::rasterize(
        &commands,
        config.canvas.width,
        config.canvas.height,
        config.background,
    )?;
    raster::save_png(&pixmap, &config.output)
}
