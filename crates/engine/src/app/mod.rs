mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{
    screen_to_world_px, world_to_screen_px, DrawItem, FramePlan, Renderer, Rgba, Viewport,
    PIXELS_PER_WORLD,
};
pub use scene::{InputSnapshot, Scene, SceneCommand, SceneKey, Vec2};
