use engine::{LoopConfig, Scene};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay;

const WORLD_SEED_ENV_VAR: &str = "PROPHECY_WORLD_SEED";
const DEFAULT_WORLD_SEED: i64 = 1337;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene_a: Box<dyn Scene>,
    pub(crate) scene_b: Box<dyn Scene>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Dark Prophecy Startup ===");

    let world_seed = parse_world_seed_from_env();
    info!(world_seed, "world_seed_selected");

    let (scene_a, scene_b) = gameplay::build_scene_pair(world_seed);
    let config = LoopConfig {
        window_title: "Тёмное Пророчество".to_string(),
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        scene_a,
        scene_b,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn parse_world_seed_from_env() -> i64 {
    match std::env::var(WORLD_SEED_ENV_VAR) {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(seed) => seed,
            Err(_) => {
                warn!(
                    env_var = WORLD_SEED_ENV_VAR,
                    value = raw.as_str(),
                    "invalid world seed env var value; using default"
                );
                DEFAULT_WORLD_SEED
            }
        },
        Err(_) => DEFAULT_WORLD_SEED,
    }
}
