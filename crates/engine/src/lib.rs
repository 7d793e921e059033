pub mod app;

pub use app::{
    ActionStates, AppError, Engine, EngineConfig, Event, Font, Frame, InputAction,
    LoopMetricsSnapshot, Rect, Renderer, Rgba, Scene, SceneStack, Vec2,
};
