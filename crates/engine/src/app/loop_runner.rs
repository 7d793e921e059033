use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event as WinitEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use super::clock::{clamp_frame_delta, FrameClock};
use super::input::{action_for_physical_key, is_stop_event, Event, InputAction};
use super::metrics::MetricsAccumulator;
use super::rendering::Renderer;
use super::scene::{Scene, SceneStack};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub max_frame_delta: Duration,
    pub metrics_log_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Engine".to_string(),
            window_width: 1280,
            window_height: 720,
            target_fps: 60,
            max_frame_delta: Duration::from_millis(250),
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Owns the window, the fixed-rate clock, the event pump, and the scene
/// stack. The display resource lives from construction until `run` returns;
/// it is never reacquired.
pub struct Engine {
    config: EngineConfig,
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    scenes: SceneStack,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.window_title.clone())
                .with_inner_size(LogicalSize::new(
                    config.window_width as f64,
                    config.window_height as f64,
                ))
                .with_resizable(false)
                .build(&event_loop)
                .map_err(AppError::CreateWindow)?,
        );

        Ok(Self {
            config,
            event_loop,
            window,
            scenes: SceneStack::new(),
        })
    }

    pub fn push_scene(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
    }

    pub fn pop_scene(&mut self) -> Option<Box<dyn Scene>> {
        self.scenes.pop()
    }

    pub fn current_scene(&self) -> Option<&dyn Scene> {
        self.scenes.current()
    }

    /// Drives the loop until a quit request or escape press. Per iteration:
    /// block on the clock, drain input events in arrival order into the
    /// current scene, update, render, present.
    pub fn run(self) -> Result<(), AppError> {
        let Engine {
            config,
            event_loop,
            window,
            mut scenes,
        } = self;

        let mut renderer = Renderer::new(
            Arc::clone(&window),
            config.window_width,
            config.window_height,
        )
        .map_err(AppError::CreateRenderer)?;

        event_loop.set_control_flow(ControlFlow::Poll);

        let target_fps = config.target_fps.max(1);
        let max_frame_delta =
            normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
        let metrics_log_interval =
            normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
        let mut clock = FrameClock::new(target_fps);
        let mut input_collector = InputCollector::default();
        let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
        let mut stop_requested = false;

        info!(
            target_fps,
            window_width = config.window_width,
            window_height = config.window_height,
            max_frame_delta_ms = max_frame_delta.as_millis() as u64,
            metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
            scene_count = scenes.len(),
            "loop_config"
        );

        let window_for_loop = Arc::clone(&window);
        event_loop
            .run(move |event, window_target| match event {
                WinitEvent::WindowEvent { window_id, event }
                    if window_id == window_for_loop.id() =>
                {
                    match event {
                        WindowEvent::CloseRequested => {
                            input_collector.push_quit();
                        }
                        WindowEvent::Resized(new_size) => {
                            if let Err(error) =
                                renderer.resize_surface(new_size.width, new_size.height)
                            {
                                warn!(error = %error, "renderer_resize_failed");
                                window_target.exit();
                            }
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            input_collector.push_key(event.physical_key, event.state);
                        }
                        WindowEvent::RedrawRequested => {
                            let raw_frame_dt = clock.tick();
                            let dt_seconds =
                                clamp_frame_delta(raw_frame_dt, max_frame_delta).as_secs_f32();

                            // A stop event ends the loop only after the
                            // whole drain reaches the scene.
                            for engine_event in input_collector.drain() {
                                if is_stop_event(&engine_event) && !stop_requested {
                                    stop_requested = true;
                                    info!(
                                        reason = stop_reason(&engine_event),
                                        "shutdown_requested"
                                    );
                                }
                                if let Some(scene) = scenes.current_mut() {
                                    scene.handle_event(&engine_event);
                                }
                            }

                            if let Some(scene) = scenes.current_mut() {
                                scene.update(dt_seconds);
                                let mut frame = renderer.frame();
                                scene.render(&mut frame);
                            }

                            if let Err(error) = renderer.present() {
                                warn!(error = %error, "renderer_present_failed");
                                window_target.exit();
                            }

                            metrics_accumulator.record_frame(raw_frame_dt);
                            if let Some(snapshot) = metrics_accumulator.maybe_snapshot(Instant::now())
                            {
                                info!(
                                    fps = snapshot.fps,
                                    frame_time_ms = snapshot.frame_time_ms,
                                    scene_count = scenes.len(),
                                    "loop_metrics"
                                );
                            }

                            if stop_requested {
                                window_target.exit();
                            }
                        }
                        _ => {}
                    }
                }
                WinitEvent::AboutToWait => {
                    window_for_loop.request_redraw();
                }
                WinitEvent::LoopExiting => {
                    scenes.clear();
                    info!("shutdown");
                }
                _ => {}
            })
            .map_err(AppError::EventLoopRun)
    }
}

/// Translates window events into engine events, preserving arrival order
/// until the loop drains them at the next tick.
#[derive(Debug, Default)]
struct InputCollector {
    pending: VecDeque<Event>,
}

impl InputCollector {
    fn push_quit(&mut self) {
        self.pending.push_back(Event::Quit);
    }

    fn push_key(&mut self, key: PhysicalKey, state: ElementState) {
        let Some(action) = action_for_physical_key(key) else {
            return;
        };
        let event = match state {
            ElementState::Pressed => Event::KeyDown(action),
            ElementState::Released => Event::KeyUp(action),
        };
        self.pending.push_back(event);
    }

    fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, Event> {
        self.pending.drain(..)
    }
}

fn stop_reason(event: &Event) -> &'static str {
    match event {
        Event::Quit => "window_close",
        Event::KeyDown(InputAction::Quit) => "escape_key",
        _ => "input",
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;

    #[test]
    fn collector_preserves_arrival_order() {
        let mut collector = InputCollector::default();
        collector.push_key(PhysicalKey::Code(KeyCode::KeyD), ElementState::Pressed);
        collector.push_key(PhysicalKey::Code(KeyCode::KeyS), ElementState::Pressed);
        collector.push_quit();
        collector.push_key(PhysicalKey::Code(KeyCode::KeyD), ElementState::Released);

        let drained: Vec<Event> = collector.drain().collect();
        assert_eq!(
            drained,
            vec![
                Event::KeyDown(InputAction::MoveRight),
                Event::KeyDown(InputAction::MoveDown),
                Event::Quit,
                Event::KeyUp(InputAction::MoveRight),
            ]
        );
    }

    #[test]
    fn collector_drops_unmapped_keys() {
        let mut collector = InputCollector::default();
        collector.push_key(PhysicalKey::Code(KeyCode::F5), ElementState::Pressed);
        collector.push_key(PhysicalKey::Code(KeyCode::Space), ElementState::Released);
        assert!(collector.drain().next().is_none());
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut collector = InputCollector::default();
        collector.push_quit();
        assert_eq!(collector.drain().count(), 1);
        assert_eq!(collector.drain().count(), 0);
    }

    #[test]
    fn stop_reason_distinguishes_close_and_escape() {
        assert_eq!(stop_reason(&Event::Quit), "window_close");
        assert_eq!(
            stop_reason(&Event::KeyDown(InputAction::Quit)),
            "escape_key"
        );
    }

    #[test]
    fn normalize_non_zero_duration_replaces_zero() {
        let fallback = Duration::from_secs(1);
        assert_eq!(normalize_non_zero_duration(Duration::ZERO, fallback), fallback);
        assert_eq!(
            normalize_non_zero_duration(Duration::from_millis(5), fallback),
            Duration::from_millis(5)
        );
    }

    #[test]
    fn default_config_targets_sixty_fps() {
        let config = EngineConfig::default();
        assert_eq!(config.target_fps, 60);
        assert!(!config.max_frame_delta.is_zero());
        assert!(!config.metrics_log_interval.is_zero());
    }
}
