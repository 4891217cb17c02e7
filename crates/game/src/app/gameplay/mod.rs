use std::collections::HashMap;

use engine::{
    screen_to_world_px, DrawItem, FramePlan, InputAction, InputSnapshot, Rgba, Scene, SceneCommand,
    SceneKey, Vec2, Viewport, PIXELS_PER_WORLD,
};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Deserialize;
use tracing::{debug, info, warn};

const WORLD_BOUND: f64 = 20.0;
const MOVE_SPEED_UNITS_PER_SECOND: f64 = 9.0;
const MOVE_ARRIVAL_THRESHOLD: f64 = 0.1;

const PAN_SENSITIVITY: f32 = 0.5;
const PAN_DECAY_PER_TICK: f32 = 0.95;
const DRAG_DISTANCE_THRESHOLD_PX: f32 = 4.0;
const DOUBLE_CLICK_WINDOW_SECONDS: f64 = 0.3;

const TREE_SPACING: f64 = 4.0;
const TREE_TRUNK_HALF_WIDTH_PX: f32 = 5.0;
const TREE_TRUNK_HEIGHT_PX: f32 = 30.0;
const TREE_CROWN_HALF_WIDTH_PX: f32 = 20.0;
const TREE_CROWN_PEAK_PX: f32 = 70.0;
const TREE_PRESENCE_THRESHOLD: f64 = 0.85;
const TREE_VIEW_RANGE_CELLS: i64 = 8;
const TREE_CULL_MARGIN_PX: i32 = 50;
const RUIN_SPACING: f64 = 20.0;
const RUIN_PRESENCE_THRESHOLD: f64 = 0.70;
const RUIN_VIEW_RANGE_CELLS: i64 = 3;
const RUIN_CULL_MARGIN_PX: i32 = 100;

const SALT_TREE_PRESENCE: i64 = 1;
const SALT_TREE_JITTER_X: i64 = 2;
const SALT_TREE_JITTER_Z: i64 = 3;
const SALT_TREE_SIZE: i64 = 4;
const SALT_RUIN_PRESENCE: i64 = 5;
const SALT_RUIN_WIDTH: i64 = 6;
const SALT_RUIN_HEIGHT: i64 = 7;

const MAX_HEALTH: i32 = 100;
const PLAYER_DAMAGE_MIN: i32 = 15;
const PLAYER_DAMAGE_MAX: i32 = 35;
const ENEMY_DAMAGE_MIN: i32 = 10;
const ENEMY_DAMAGE_MAX: i32 = 25;
const ENEMY_COUNTER_DELAY_SECONDS: f64 = 0.8;
const VICTORY_IDLE_DELAY_SECONDS: f64 = 1.5;
const DEFEAT_IDLE_DELAY_SECONDS: f64 = 2.0;
const HUNT_QUEST_ID: u32 = 2;
const HUNT_QUEST_PROGRESS_PER_KILL: u32 = 20;
const QUEST_PROGRESS_CAP: u32 = 100;
const COMBAT_LOG_VISIBLE_LINES: usize = 5;

const CLEAR_COLOR_NIGHT: Rgba = [15, 15, 26, 255];
const GRID_MINOR_COLOR: Rgba = [30, 34, 44, 255];
const GRID_MAJOR_COLOR: Rgba = [44, 50, 64, 255];
const GRID_MAJOR_EVERY_UNITS: i64 = 5;
const TREE_TRUNK_COLOR: Rgba = [139, 69, 19, 255];
const TREE_CROWN_COLOR: Rgba = [34, 139, 34, 255];
const RUIN_FILL_COLOR: Rgba = [105, 105, 105, 255];
const RUIN_EDGE_COLOR: Rgba = [74, 74, 74, 255];
const TARGET_MARKER_COLOR: Rgba = [255, 255, 255, 200];
const HUD_FRAME_COLOR: Rgba = [220, 220, 230, 255];
const HUD_PLAYER_BAR_COLOR: Rgba = [74, 222, 128, 255];
const HUD_ENEMY_BAR_COLOR: Rgba = [248, 113, 113, 255];
const PLAYER_GLOW_RADIUS_PX: i32 = 40;
const PLAYER_GLYPH_RADIUS_PX: i32 = 15;
const PLAYER_FACING_DOT_OFFSET_PX: i32 = 20;
const PLAYER_FACING_DOT_RADIUS_PX: i32 = 3;

include!("worldgen.rs");
include!("camera.rs");
include!("movement.rs");
include!("combat.rs");
include!("characters.rs");
include!("scene_state.rs");
include!("scene_impl.rs");
include!("util.rs");

pub(crate) fn build_scene_pair(world_seed: i64) -> (Box<dyn Scene>, Box<dyn Scene>) {
    let roster = load_roster().unwrap_or_else(|err| {
        warn!(path = %err.path(), error = %err, "character_roster_invalid");
        Vec::new()
    });

    let scene_a = ExplorationScene::new(
        "A",
        SceneKey::B,
        ControlScheme::Keyboard,
        character_or_default(&roster, "warrior"),
        world_seed,
    );
    let scene_b = ExplorationScene::new(
        "B",
        SceneKey::A,
        ControlScheme::Pointer,
        character_or_default(&roster, "mage"),
        world_seed,
    );
    (Box::new(scene_a), Box::new(scene_b))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
