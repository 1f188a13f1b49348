// Segment-segment intersection for jump detection.
// Parallel and collinear pairs never intersect; endpoint touches do.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegIntersection {
    None,
    // Crossing point; lies within [0,1] on both AB and CD
    Crossing { x: f64, y: f64 },
}

impl SegIntersection {
    pub fn point(self) -> Option<(f64, f64)> {
        match self {
            SegIntersection::None => None,
            SegIntersection::Crossing { x, y } => Some((x, y)),
        }
    }
}

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 { ax * by - ay * bx }

pub fn intersect_segments(ax: f64, ay: f64, bx: f64, by: f64,
                          cx: f64, cy: f64, dx: f64, dy: f64) -> SegIntersection {
    let r_x = bx - ax; let r_y = by - ay;
    let s_x = dx - cx; let s_y = dy - cy;
    let det = cross(r_x, r_y, s_x, s_y);
    if det == 0.0 {
        return SegIntersection::None;
    }
    let q_x = cx - ax; let q_y = cy - ay;
    // alpha/beta are t*det and u*det; compare in det-space to avoid dividing twice
    let alpha = cross(q_x, q_y, s_x, s_y);
    let beta = cross(q_x, q_y, r_x, r_y);
    if alpha * det < 0.0 || beta * det < 0.0 {
        return SegIntersection::None;
    }
    if det > 0.0 {
        if alpha > det || beta > det { return SegIntersection::None; }
    } else if alpha < det || beta < det {
        return SegIntersection::None;
    }
    SegIntersection::Crossing { x: ax + alpha * r_x / det, y: ay + alpha * r_y / det }
}
