use glam::{DVec2, DVec3};
use log::trace;

use crate::error::NavError;
use crate::math::{closest_point_on_polygon, point_in_polygon};
use crate::traits::GroundProjector;

/// Correction attempts before the clamper gives up. Bounds the per-tick cost
/// regardless of boundary complexity.
pub const MAX_CLAMP_ATTEMPTS: usize = 4;

/// Pushes corrections strictly past the boundary so a corrected corner does
/// not re-fail the containment test on floating-point noise.
const CORRECTION_OVERSHOOT: f64 = 1.001;

/// Result of a boundary clamp: `position` is the accepted (possibly
/// corrected) camera location when `valid`, otherwise the last attempted one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampOutcome {
    pub valid: bool,
    pub position: DVec3,
}

/// Check a candidate camera location against a boundary polygon, nudging it
/// inward until the whole projected viewport fits.
///
/// The four framebuffer corners are projected onto the ground plane with the
/// camera at the candidate location. On the first corner that lands outside
/// the boundary, the correction vector toward the closest boundary point is
/// accumulated into the candidate and the viewport is re-tested, up to
/// [`MAX_CLAMP_ATTEMPTS`] times.
///
/// An empty boundary is unconstrained: the candidate is accepted unchanged.
/// A non-empty boundary with fewer than 3 vertices is rejected.
pub fn gesture_within_bounds(
    boundary: &[DVec2],
    loc: DVec3,
    projector: &impl GroundProjector,
) -> Result<ClampOutcome, NavError> {
    if boundary.is_empty() {
        return Ok(ClampOutcome {
            valid: true,
            position: loc,
        });
    }
    if boundary.len() < 3 {
        return Err(NavError::DegenerateBoundary {
            vertices: boundary.len(),
        });
    }

    let frame = projector.framebuffer_size();
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(frame.x, 0.0),
        frame,
        DVec2::new(0.0, frame.y),
    ];

    let mut offset = DVec2::ZERO;
    let mut last_tried = loc;
    for attempt in 0..MAX_CLAMP_ATTEMPTS {
        let new_loc = loc + DVec3::new(offset.x, offset.y, 0.0);
        last_tried = new_loc;

        let mut contained = true;
        for corner in corners {
            let Some(plane_pt) = projector.point_on_plane(corner, new_loc) else {
                // No ground intersection for this corner; there is no
                // direction to correct toward
                return Ok(ClampOutcome {
                    valid: false,
                    position: new_loc,
                });
            };
            if !point_in_polygon(boundary, plane_pt) {
                let close_pt = closest_point_on_polygon(boundary, plane_pt);
                offset += CORRECTION_OVERSHOOT * (close_pt - plane_pt);
                contained = false;
                break;
            }
        }

        if contained {
            trace!("clamp accepted {new_loc:?} after {attempt} corrections");
            return Ok(ClampOutcome {
                valid: true,
                position: new_loc,
            });
        }
    }

    trace!("clamp gave up on {loc:?} after {MAX_CLAMP_ATTEMPTS} attempts");
    Ok(ClampOutcome {
        valid: false,
        position: last_tried,
    })
}
