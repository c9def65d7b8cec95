use glam::{DVec2, DVec3};

/// Screen-to-ground projection abstraction used by boundary clamping
pub trait GroundProjector {
    /// Framebuffer size in physical pixels
    fn framebuffer_size(&self) -> DVec2;

    /// Project a screen-space point onto the ground plane, with the camera
    /// placed at `loc`. Returns None when the ray misses the plane.
    fn point_on_plane(&self, screen: DVec2, loc: DVec3) -> Option<DVec2>;
}
