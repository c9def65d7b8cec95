// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "map-nav")]
#[command(about = "Map navigation core demo - fly-to animation with boundary clamping", long_about = None)]
pub struct Cli {
    /// Fly-to target, ground x coordinate
    #[arg(long, default_value_t = 50.0)]
    pub target_x: f64,

    /// Fly-to target, ground y coordinate
    #[arg(long, default_value_t = 50.0)]
    pub target_y: f64,

    /// Animation duration in seconds
    #[arg(long, default_value_t = 1.0)]
    pub duration: f64,

    /// Ticks per second of the synthetic host loop
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Total ticks to run
    #[arg(long, default_value_t = 90)]
    pub ticks: u64,

    /// JSON file with the boundary polygon, as [[x, y], ...]
    #[arg(long)]
    pub boundary: Option<String>,

    /// Keep rendering a few frames after the last change
    #[arg(long, default_value_t = false)]
    pub extra_frames: bool,
}
