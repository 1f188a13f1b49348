use crate::geometry::line::{Line, Point};

/// Split source -> waypoints -> target into consecutive lines.
pub fn create_lines(source: Point, target: Point, route: &[Point]) -> Vec<Line> {
    let mut lines = Vec::with_capacity(route.len() + 1);
    let mut prev = source;
    for &p in route.iter().chain(std::iter::once(&target)) {
        lines.push(Line::new(prev, p));
        prev = p;
    }
    lines
}
