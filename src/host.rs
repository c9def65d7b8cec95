use std::sync::{Arc, Mutex};

use log::warn;

use crate::animator::{UpdateOutcome, ViewAnimator};
use crate::error::NavError;
use crate::scheduler::{FrameScheduler, SchedulerConfig};
use crate::traits::SceneRenderer;
use crate::view::ViewState;

/// What one host tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Whether a frame was drawn this tick
    pub rendered: bool,
    /// What the animator did to the view this tick
    pub animation: UpdateOutcome,
}

/// Couples the animator and scheduler to a shared renderer slot and runs the
/// per-tick control flow: animator update, pending-change poll, redraw gate,
/// draw.
///
/// The renderer lives behind `Arc<Mutex<Option<R>>>` so teardown serializes
/// against an in-flight draw: `detach_renderer` takes the same lock the draw
/// holds, and a tick that finds the slot empty is a graceful no-op. The host
/// owns the renderer's lifetime; this core only borrows it per tick.
#[derive(Debug)]
pub struct NavHost<R: SceneRenderer> {
    animator: ViewAnimator,
    scheduler: FrameScheduler,
    renderer: Arc<Mutex<Option<R>>>,
}

impl<R: SceneRenderer> NavHost<R> {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            animator: ViewAnimator::new(),
            scheduler: FrameScheduler::new(config),
            renderer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn animator(&self) -> &ViewAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ViewAnimator {
        &mut self.animator
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    /// Handle to the shared renderer slot, for hosts that tear down the
    /// renderer from another call path
    pub fn renderer_slot(&self) -> Arc<Mutex<Option<R>>> {
        Arc::clone(&self.renderer)
    }

    pub fn attach_renderer(&self, renderer: R) -> Result<(), NavError> {
        let mut slot = self
            .renderer
            .lock()
            .map_err(|_| NavError::RendererPoisoned)?;
        *slot = Some(renderer);
        Ok(())
    }

    /// Remove the renderer, waiting out any draw in progress
    pub fn detach_renderer(&self) -> Result<Option<R>, NavError> {
        let mut slot = self
            .renderer
            .lock()
            .map_err(|_| NavError::RendererPoisoned)?;
        Ok(slot.take())
    }

    /// Run one tick of the host loop. `now` is monotonic loop time in
    /// seconds, `dt` the delta handed to the renderer.
    pub fn tick(&mut self, now: f64, dt: f64, view: &mut ViewState) -> Result<TickReport, NavError> {
        let animation = self.animator.update(now, view)?;
        match animation {
            UpdateOutcome::Moved | UpdateOutcome::Finished => self.scheduler.notify_changed(),
            UpdateOutcome::Idle | UpdateOutcome::Held => {}
        }

        // One scoped lock covers the change poll and the draw, so a
        // concurrent detach cannot pull the renderer mid-frame
        let mut slot = self
            .renderer
            .lock()
            .map_err(|_| NavError::RendererPoisoned)?;

        let Some(renderer) = slot.as_mut() else {
            if self.scheduler.has_changes() {
                warn!("redraw wanted but no renderer attached");
            }
            return Ok(TickReport {
                rendered: false,
                animation,
            });
        };

        if renderer.has_pending_scene_changes() {
            self.scheduler.notify_changed();
        }

        let rendered = self.scheduler.has_changes();
        if rendered {
            renderer.draw(dt);
            self.scheduler.frame_rendered();
        }

        Ok(TickReport {
            rendered,
            animation,
        })
    }
}
