pub mod animator;
pub mod bounds;
pub mod cli;
pub mod error;
pub mod host;
pub mod math;
pub mod scheduler;
pub mod traits;
pub mod view;

pub use animator::{AnimState, UpdateOutcome, ViewAnimator};
pub use bounds::{gesture_within_bounds, ClampOutcome, MAX_CLAMP_ATTEMPTS};
pub use error::NavError;
pub use host::{NavHost, TickReport};
pub use scheduler::{FrameScheduler, SchedulerConfig};
pub use view::ViewState;
