use std::thread;
use std::time::{Duration, Instant};

/// Blocking fixed-rate clock. `tick` sleeps out the remainder of the target
/// frame and reports the wall-clock time since the previous tick, so the
/// delta is approximately `1 / target_fps` whenever the loop keeps up.
pub(crate) struct FrameClock {
    frame_target: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub(crate) fn new(target_fps: u32) -> Self {
        Self {
            frame_target: target_frame_duration(target_fps),
            last_tick: Instant::now(),
        }
    }

    pub(crate) fn tick(&mut self) -> Duration {
        let elapsed = Instant::now().saturating_duration_since(self.last_tick);
        let sleep = compute_frame_sleep(elapsed, self.frame_target);
        if sleep > Duration::ZERO {
            thread::sleep(sleep);
        }

        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        delta
    }
}

fn target_frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

fn compute_frame_sleep(elapsed: Duration, frame_target: Duration) -> Duration {
    if elapsed < frame_target {
        frame_target - elapsed
    } else {
        Duration::ZERO
    }
}

pub(crate) fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}
