mod polygon;

pub use polygon::{closest_point_on_polygon, closest_point_on_segment, point_in_polygon};
