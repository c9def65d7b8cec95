use std::sync::atomic::{AtomicU64, Ordering};

use glam::{DMat4, DVec2, DVec3};

use crate::traits::GroundProjector;

pub const DEFAULT_FOV_Y: f64 = std::f64::consts::FRAC_PI_2;
pub const NEAR_PLANE: f64 = 0.001;
pub const FAR_PLANE: f64 = 1000.0;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Camera/view state shared between the host, the animator, and the renderer.
///
/// The camera sits at `loc` (ground x/y plus height z) looking straight down
/// at the ground plane. The full view-projection transform is derived on
/// demand. Each instance carries a process-unique id so an animation session
/// can detect being handed a different view than the one it started against.
#[derive(Debug, Clone)]
pub struct ViewState {
    id: u64,
    loc: DVec3,
    fov_y: f64,
    frame_size: DVec2,
}

impl ViewState {
    pub fn new(loc: DVec3, frame_size: DVec2) -> Self {
        Self {
            id: NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed),
            loc,
            fov_y: DEFAULT_FOV_Y,
            frame_size,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn loc(&self) -> DVec3 {
        self.loc
    }

    pub fn set_loc(&mut self, loc: DVec3) {
        self.loc = loc;
    }

    pub fn set_fov_y(&mut self, fov_y: f64) {
        self.fov_y = fov_y;
    }

    pub fn resize(&mut self, frame_size: DVec2) {
        self.frame_size = frame_size;
    }

    /// Full view-projection matrix for the current location
    pub fn full_matrix(&self) -> DMat4 {
        self.full_matrix_at(self.loc)
    }

    fn full_matrix_at(&self, loc: DVec3) -> DMat4 {
        let aspect = self.frame_size.x / self.frame_size.y;
        let proj = DMat4::perspective_rh(self.fov_y, aspect, NEAR_PLANE, FAR_PLANE);
        let view = DMat4::look_at_rh(loc, DVec3::new(loc.x, loc.y, 0.0), DVec3::Y);
        proj * view
    }

    /// Project a screen-space point onto the ground plane from the current
    /// camera location
    pub fn point_on_plane_from_screen(&self, screen: DVec2) -> Option<DVec2> {
        self.point_on_plane(screen, self.loc)
    }
}

impl GroundProjector for ViewState {
    fn framebuffer_size(&self) -> DVec2 {
        self.frame_size
    }

    fn point_on_plane(&self, screen: DVec2, loc: DVec3) -> Option<DVec2> {
        if self.frame_size.x <= 0.0 || self.frame_size.y <= 0.0 || loc.z <= NEAR_PLANE {
            return None;
        }

        let inv = self.full_matrix_at(loc).inverse();
        let ndc = DVec2::new(
            screen.x / self.frame_size.x * 2.0 - 1.0,
            1.0 - screen.y / self.frame_size.y * 2.0,
        );

        // Unproject the near- and far-plane hits and intersect the resulting
        // ray with z = 0
        let near_pt = inv.project_point3(DVec3::new(ndc.x, ndc.y, 0.0));
        let far_pt = inv.project_point3(DVec3::new(ndc.x, ndc.y, 1.0));
        let dir = far_pt - near_pt;
        if dir.z.abs() < 1e-12 {
            return None;
        }
        let t = -near_pt.z / dir.z;
        if t < 0.0 {
            return None;
        }
        Some((near_pt + dir * t).truncate())
    }
}
