use log::trace;
use serde::{Deserialize, Serialize};

/// Redraw policy knobs. With `extra_frame_mode` on, rendering continues for
/// `extra_frame_budget` ticks after the last observed change so multi-buffered
/// GPU state settles before the loop goes quiet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub extra_frame_mode: bool,
    pub extra_frame_budget: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            extra_frame_mode: false,
            extra_frame_budget: 4,
        }
    }
}

/// Decides, tick by tick, whether the render pass needs to run.
///
/// The query (`has_changes`) never mutates state; the extra-frame counter is
/// reloaded or decremented only in `frame_rendered`, which the host calls
/// once per frame it actually drew. This keeps the observable redraw count
/// independent of how many times the host polls the query in a tick.
#[derive(Debug)]
pub struct FrameScheduler {
    config: SchedulerConfig,
    changed: bool,
    extra_frames_remaining: u32,
    force_next: bool,
}

impl FrameScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            changed: false,
            extra_frames_remaining: 0,
            force_next: false,
        }
    }

    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    /// Record that geometry, camera, or scene content mutated since the last
    /// rendered frame
    pub fn notify_changed(&mut self) {
        self.changed = true;
    }

    /// Guarantee the next `has_changes` answers true, regardless of actual
    /// scene state. Used around snapshot captures.
    pub fn force_next_frame(&mut self) {
        self.force_next = true;
    }

    /// Whether the render pass must run this tick
    pub fn has_changes(&self) -> bool {
        if self.force_next || self.changed {
            return true;
        }
        self.config.extra_frame_mode && self.extra_frames_remaining > 0
    }

    /// Account for a frame the host actually rendered. A fresh change
    /// reloads the extra-frame budget; a frame drawn purely on residual
    /// budget decrements it.
    pub fn frame_rendered(&mut self) {
        let fresh = self.changed || self.force_next;
        self.changed = false;
        self.force_next = false;

        if self.config.extra_frame_mode {
            if fresh {
                self.extra_frames_remaining = self.config.extra_frame_budget;
            } else {
                self.extra_frames_remaining = self.extra_frames_remaining.saturating_sub(1);
            }
            trace!(
                "frame rendered, {} extra frames remaining",
                self.extra_frames_remaining
            );
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
