use std::process::ExitCode;

use engine::{AppError, Engine, EngineConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::gameplay::{RogueScene, GRID_HEIGHT, GRID_WIDTH, TILE_SIZE_PX};

const WINDOW_TITLE: &str = "Rogue";
const TARGET_FPS: u32 = 60;

pub(crate) fn run() -> ExitCode {
    init_tracing();
    info!("=== Rogue Startup ===");

    let config = EngineConfig {
        window_title: WINDOW_TITLE.to_string(),
        window_width: (GRID_WIDTH * TILE_SIZE_PX) as u32,
        window_height: (GRID_HEIGHT * TILE_SIZE_PX) as u32,
        target_fps: TARGET_FPS,
        ..EngineConfig::default()
    };

    if let Err(err) = build_and_run(config) {
        error!(error = %err, "startup_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn build_and_run(config: EngineConfig) -> Result<(), AppError> {
    let mut engine = Engine::new(config)?;
    engine.push_scene(Box::new(RogueScene::new(&mut rand::thread_rng())));
    engine.run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
