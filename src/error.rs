use thiserror::Error;

/// Errors surfaced by the navigation core. Everything here is recoverable;
/// nothing in this crate aborts the host process.
#[derive(Debug, Error)]
pub enum NavError {
    /// A boundary polygon was supplied with too few vertices to enclose area.
    /// An empty boundary means "unconstrained" and is not an error.
    #[error("boundary polygon needs at least 3 vertices, got {vertices}")]
    DegenerateBoundary { vertices: usize },

    /// An animation session was asked to write through a view it was not
    /// started against.
    #[error("view {actual} does not match the active session's view {expected}")]
    StaleView { expected: u64, actual: u64 },

    /// A draw call panicked and poisoned the shared renderer lock.
    #[error("renderer lock poisoned by a failed draw")]
    RendererPoisoned,
}
