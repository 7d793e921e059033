mod clock;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::{ActionStates, Event, InputAction};
pub use loop_runner::{AppError, Engine, EngineConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Font, Frame, Renderer, Rgba};
pub use scene::{Rect, Scene, SceneStack, Vec2};
