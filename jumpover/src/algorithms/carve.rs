use crate::config::CLOSE_PROXIMITY_PADDING;
use crate::geometry::line::{Line, Point};

/// Split `line` at its sorted `intersections`, replacing a stretch of
/// `jump_size` on each side of a crossing with a jump line.
///
/// Crossings whose windows touch are merged into one wider jump. A jump
/// that would end up within `2 * jump_size + padding` of the line's head,
/// or (for the last crossing) of its tail, is dropped and the line is kept
/// straight there.
pub fn create_jumps(line: Line, intersections: &[Point], jump_size: f64) -> Vec<Line> {
    if intersections.is_empty() {
        return vec![line];
    }
    let min_gap = jump_size * 2.0 + CLOSE_PROXIMITY_PADDING;
    // merged into the previous jump; reset on every call
    let mut skip = vec![false; intersections.len()];
    let mut out: Vec<Line> = Vec::with_capacity(intersections.len() * 3);

    for (idx, &point) in intersections.iter().enumerate() {
        if skip[idx] {
            continue;
        }
        let current = out.pop().unwrap_or(line);

        let jump_start = point.move_from(current.start, -jump_size);
        let mut jump_end = point.move_from(current.start, jump_size);

        if let Some(&next) = intersections.get(idx + 1) {
            let distance = jump_end.distance(next);
            if distance <= jump_size {
                jump_end = next.move_from(current.start, distance);
                skip[idx + 1] = true;
            }
        } else if jump_start.distance(current.end) < min_gap {
            tracing::debug!(x = point.x, y = point.y, "jump too close to line end, drawing straight");
            out.push(current);
            continue;
        }

        if jump_end.distance(current.start) < min_gap {
            tracing::debug!(x = point.x, y = point.y, "jump too close to line start, drawing straight");
            out.push(current);
            continue;
        }

        out.push(Line::new(current.start, jump_start));
        out.push(Line::jump(jump_start, jump_end));
        out.push(Line::new(jump_end, current.end));
    }
    out
}
