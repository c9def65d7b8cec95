use glam::DVec2;

/// Even-odd ray-crossing containment test over an ordered vertex list.
/// The polygon is implicitly closed (last vertex connects back to the first).
/// Callers guarantee at least 3 vertices.
pub fn point_in_polygon(polygon: &[DVec2], point: DVec2) -> bool {
    debug_assert!(polygon.len() >= 3, "polygon needs at least 3 vertices");

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let cross_x = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Perpendicular projection of `point` onto segment `a`-`b`, clamped to the endpoints.
pub fn closest_point_on_segment(a: DVec2, b: DVec2, point: DVec2) -> DVec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Globally closest point on the polygon's boundary, taken over every edge
/// segment including the implicit closing edge. Callers guarantee at least
/// 3 vertices.
pub fn closest_point_on_polygon(polygon: &[DVec2], point: DVec2) -> DVec2 {
    debug_assert!(polygon.len() >= 3, "polygon needs at least 3 vertices");

    let mut best = polygon[0];
    let mut best_dist_sq = f64::INFINITY;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let candidate = closest_point_on_segment(polygon[j], polygon[i], point);
        let dist_sq = candidate.distance_squared(point);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = candidate;
        }
        j = i;
    }
    best
}
