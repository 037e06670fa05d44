use crate::canvas::Point;

/// Radius used when rounding polyline corners for rendering, in canvas units.
pub const CORNER_RADIUS: f64 = 8.0;

/// Renders a waypoint polyline as an SVG path string with rounded corners.
///
/// Straight runs become `L` commands. At every interior waypoint the incoming
/// and outgoing segments are shortened by up to `radius` (capped at half the
/// shorter segment, so tight zig-zags stay well-formed) and bridged with a
/// quadratic curve through the original corner. The waypoints themselves are
/// untouched; rounding is purely a presentation step.
///
/// Fewer than two waypoints produce an empty string; exactly two produce a
/// single line.
pub fn rounded_svg_path(waypoints: &[Point], radius: f64) -> String {
    match waypoints {
        [] | [_] => String::new(),
        [a, b] => format!("M {} {} L {} {}", fmt(a.x), fmt(a.y), fmt(b.x), fmt(b.y)),
        _ => {
            let first = waypoints[0];
            let mut path = format!("M {} {}", fmt(first.x), fmt(first.y));
            for window in waypoints.windows(3) {
                let (prev, corner, next) = (window[0], window[1], window[2]);
                let r_in = trim_radius(prev, corner, radius);
                let r_out = trim_radius(corner, next, radius);
                let r = r_in.min(r_out);
                if r <= f64::EPSILON {
                    path.push_str(&format!(" L {} {}", fmt(corner.x), fmt(corner.y)));
                    continue;
                }
                let approach = point_towards(corner, prev, r);
                let depart = point_towards(corner, next, r);
                path.push_str(&format!(
                    " L {} {} Q {} {} {} {}",
                    fmt(approach.x),
                    fmt(approach.y),
                    fmt(corner.x),
                    fmt(corner.y),
                    fmt(depart.x),
                    fmt(depart.y)
                ));
            }
            let last = waypoints[waypoints.len() - 1];
            path.push_str(&format!(" L {} {}", fmt(last.x), fmt(last.y)));
            path
        }
    }
}

/// Largest rounding radius a segment can absorb: half its length, capped at
/// the requested radius.
fn trim_radius(a: Point, b: Point, radius: f64) -> f64 {
    let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
    radius.min(length / 2.0)
}

/// The point `distance` units from `origin` along the line towards `target`.
fn point_towards(origin: Point, target: Point, distance: f64) -> Point {
    let dx = target.x - origin.x;
    let dy = target.y - origin.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f64::EPSILON {
        return origin;
    }
    Point::new(
        origin.x + dx / length * distance,
        origin.y + dy / length * distance,
    )
}

/// Formats a coordinate without trailing `.0` noise for whole numbers.
fn fmt(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
