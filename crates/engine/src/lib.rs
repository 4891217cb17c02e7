pub mod app;

pub use app::{
    run_app, screen_to_world_px, world_to_screen_px, AppError, DrawItem, FramePlan, InputAction,
    InputSnapshot, LoopConfig, LoopMetricsSnapshot, Renderer, Rgba, Scene, SceneCommand, SceneKey,
    Vec2, Viewport, PIXELS_PER_WORLD,
};
