use glam::DVec2;

/// Renderer seam - the navigation core only sees this surface
pub trait SceneRenderer {
    /// Framebuffer size in physical pixels
    fn framebuffer_size(&self) -> DVec2;

    /// Whether scene content mutated since the last draw
    fn has_pending_scene_changes(&self) -> bool;

    /// Produce a frame; `dt` is the host-supplied frame delta in seconds
    fn draw(&mut self, dt: f64);
}
