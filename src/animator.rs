use glam::{DVec2, DVec3};
use log::debug;

use crate::bounds::gesture_within_bounds;
use crate::error::NavError;
use crate::view::ViewState;

/// Animator lifecycle. `Completed` and `Cancelled` are resting states with
/// no active session; a new `begin` leaves any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Animating,
    Completed,
    Cancelled,
}

/// What a single `update` tick did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No active session
    Idle,
    /// View moved to an interpolated (possibly clamped) position
    Moved,
    /// Clamping failed; the view held its previous position for this tick
    Held,
    /// Session reached its end time; view snapped to the end position and
    /// the session terminated
    Finished,
}

/// One timed camera translation. Times are host-loop seconds; the boundary
/// is fixed for the life of the session.
#[derive(Debug, Clone)]
struct AnimationSession {
    start_loc: DVec3,
    end_loc: DVec3,
    start_time: f64,
    end_time: f64,
    boundary: Vec<DVec2>,
}

/// Drives at most one animation session, writing interpolated positions into
/// a shared [`ViewState`] each tick. The animator never owns the view; it
/// records the view's id at `begin` and refuses to write through any other.
#[derive(Debug)]
pub struct ViewAnimator {
    state: AnimState,
    session: Option<AnimationSession>,
    view_id: u64,
}

impl ViewAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimState::Idle,
            session: None,
            view_id: 0,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == AnimState::Animating
    }

    /// Start a session from the view's current position to `target`.
    /// Replaces any in-flight session. A zero or negative duration is
    /// normalized to an immediate snap on the first `update`. An empty
    /// boundary means unconstrained; a non-empty boundary needs at least
    /// 3 vertices.
    pub fn begin(
        &mut self,
        view: &ViewState,
        target: DVec3,
        now: f64,
        duration: f64,
        boundary: Vec<DVec2>,
    ) -> Result<(), NavError> {
        if !boundary.is_empty() && boundary.len() < 3 {
            return Err(NavError::DegenerateBoundary {
                vertices: boundary.len(),
            });
        }

        debug!(
            "begin fly-to {:?} -> {target:?} over {duration}s",
            view.loc()
        );
        self.session = Some(AnimationSession {
            start_loc: view.loc(),
            end_loc: target,
            start_time: now,
            end_time: now + duration.max(0.0),
            boundary,
        });
        self.view_id = view.id();
        self.state = AnimState::Animating;
        Ok(())
    }

    /// Start a session constrained to a four-corner boundary quad
    pub fn begin_bounded(
        &mut self,
        view: &ViewState,
        target: DVec3,
        now: f64,
        duration: f64,
        quad: [DVec2; 4],
    ) -> Result<(), NavError> {
        self.begin(view, target, now, duration, quad.to_vec())
    }

    /// Advance the session. `now` values must be monotonically
    /// non-decreasing across calls.
    ///
    /// Past the end time the view snaps to the end position exactly and the
    /// session terminates; further calls are no-ops. Mid-flight, the
    /// linearly interpolated candidate goes through boundary clamping: on
    /// success the corrected position is written, on failure the view holds
    /// its previous position for this tick.
    pub fn update(&mut self, now: f64, view: &mut ViewState) -> Result<UpdateOutcome, NavError> {
        if self.state != AnimState::Animating {
            return Ok(UpdateOutcome::Idle);
        }
        let Some(session) = self.session.as_ref() else {
            return Ok(UpdateOutcome::Idle);
        };
        if view.id() != self.view_id {
            return Err(NavError::StaleView {
                expected: self.view_id,
                actual: view.id(),
            });
        }

        let span = session.end_time - session.start_time;
        let remain = session.end_time - now;
        if remain < 0.0 || span <= 0.0 {
            // All done, snap to the end
            let end_loc = session.end_loc;
            view.set_loc(end_loc);
            self.session = None;
            self.state = AnimState::Completed;
            debug!("fly-to completed at {end_loc:?}");
            return Ok(UpdateOutcome::Finished);
        }

        // remain >= 0 and span > 0, so t stays in [0, 1]
        let t = (span - remain) / span;
        let candidate = if t >= 1.0 {
            session.end_loc
        } else {
            session.start_loc.lerp(session.end_loc, t)
        };

        let outcome = gesture_within_bounds(&session.boundary, candidate, &*view)?;
        if outcome.valid {
            view.set_loc(outcome.position);
            Ok(UpdateOutcome::Moved)
        } else {
            Ok(UpdateOutcome::Held)
        }
    }

    /// Drop the in-flight session without touching the view. Used when a new
    /// user gesture takes over the camera.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("fly-to cancelled");
            self.state = AnimState::Cancelled;
        }
    }
}

impl Default for ViewAnimator {
    fn default() -> Self {
        Self::new()
    }
}
