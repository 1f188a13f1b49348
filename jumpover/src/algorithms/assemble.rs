use crate::config::JumpStyle;
use crate::geometry::line::{Line, Point};
use crate::geometry::path::{Path, PathSegment};

type JumpRenderer = fn(&mut Path, &Line, f64);

fn renderer(style: JumpStyle) -> JumpRenderer {
    match style {
        JumpStyle::Arc => arc_jump,
        JumpStyle::Gap => gap_jump,
        JumpStyle::Cubic => cubic_jump,
    }
}

// Jumps bulge up, or right for vertical lines, whichever way the line runs.
#[inline]
fn flips(line: &Line) -> bool {
    let diff = line.start.difference(line.end);
    diff.x < 0.0 || (diff.x == 0.0 && diff.y < 0.0)
}

/// Semicircle approximated by two cubic curves.
fn arc_jump(path: &mut Path, line: &Line, _jump_size: f64) {
    let angle = if flips(line) { 90.0 } else { -90.0 };
    let midpoint = line.midpoint();
    let center = Line::new(midpoint, line.end).rotate(midpoint, angle);

    let half = Line::new(line.start, midpoint);
    path.append(PathSegment::CurveTo {
        c1: half.point_at(2.0 / 3.0).rotate(line.start, angle),
        c2: center.point_at(1.0 / 3.0).rotate(center.end, -angle),
        end: center.end,
    });

    let half = Line::new(midpoint, line.end);
    path.append(PathSegment::CurveTo {
        c1: center.point_at(1.0 / 3.0).rotate(center.end, angle),
        c2: half.point_at(1.0 / 3.0).rotate(line.end, -angle),
        end: line.end,
    });
}

fn gap_jump(path: &mut Path, line: &Line, _jump_size: f64) {
    path.append(PathSegment::MoveTo { end: line.end });
}

/// Semicircle approximated by a single cubic curve.
fn cubic_jump(path: &mut Path, line: &Line, jump_size: f64) {
    let angle = line.start.theta(line.end);
    let x_offset = jump_size * 0.6;
    let mut y_offset = jump_size * 1.35;
    if flips(line) {
        y_offset = -y_offset;
    }
    let (s, e) = (line.start, line.end);
    path.append(PathSegment::CurveTo {
        c1: Point::new(s.x + x_offset, s.y + y_offset).rotate(s, angle),
        c2: Point::new(e.x - x_offset, e.y + y_offset).rotate(e, angle),
        end: e,
    });
}

/// Turn carved lines into path commands, starting with a move to the
/// first line's start.
pub fn build_path(lines: &[Line], jump_size: f64, style: JumpStyle) -> Path {
    let mut path = Path::new();
    let Some(first) = lines.first() else {
        return path;
    };
    path.append(PathSegment::MoveTo { end: first.start });
    let render_jump = renderer(style);
    for line in lines {
        if line.is_jump {
            render_jump(&mut path, line, jump_size);
        } else {
            path.append(PathSegment::LineTo { end: line.end });
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::approx_eq;

    fn carved() -> Vec<Line> {
        vec![
            Line::new(Point::new(0.0, 50.0), Point::new(45.0, 50.0)),
            Line::jump(Point::new(45.0, 50.0), Point::new(55.0, 50.0)),
            Line::new(Point::new(55.0, 50.0), Point::new(100.0, 50.0)),
        ]
    }

    fn close(a: Point, x: f64, y: f64) -> bool {
        approx_eq(a.x, x, 1e-9) && approx_eq(a.y, y, 1e-9)
    }

    #[test]
    fn gap_lifts_the_pen() {
        let p = build_path(&carved(), 5.0, JumpStyle::Gap);
        assert_eq!(p.serialize(), "M 0 50 L 45 50 M 55 50 L 100 50");
    }

    #[test]
    fn cubic_bulges_up() {
        let p = build_path(&carved(), 5.0, JumpStyle::Cubic);
        assert_eq!(p.serialize(), "M 0 50 L 45 50 C 48 43.25 52 43.25 55 50 L 100 50");
    }

    #[test]
    fn cubic_bulges_up_when_reversed() {
        let line = Line::jump(Point::new(55.0, 50.0), Point::new(45.0, 50.0));
        let p = build_path(&[line], 5.0, JumpStyle::Cubic);
        match p.segments[1] {
            PathSegment::CurveTo { c1, c2, end } => {
                assert!(close(c1, 52.0, 43.25), "{:?}", c1);
                assert!(close(c2, 48.0, 43.25), "{:?}", c2);
                assert_eq!(end, Point::new(45.0, 50.0));
            }
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn arc_is_two_curves_through_the_apex() {
        let p = build_path(&carved(), 5.0, JumpStyle::Arc);
        assert_eq!(p.len(), 5);
        match (p.segments[2], p.segments[3]) {
            (PathSegment::CurveTo { c1, c2, end }, PathSegment::CurveTo { c1: d1, c2: d2, end: e2 }) => {
                assert!(close(end, 50.0, 45.0), "{:?}", end);
                assert!(close(c1, 45.0, 50.0 - 10.0 / 3.0), "{:?}", c1);
                assert!(close(c2, 50.0 - 10.0 / 3.0, 45.0), "{:?}", c2);
                assert!(close(d1, 50.0 + 10.0 / 3.0, 45.0), "{:?}", d1);
                assert!(close(d2, 55.0, 50.0 - 10.0 / 3.0), "{:?}", d2);
                assert_eq!(e2, Point::new(55.0, 50.0));
            }
            other => panic!("expected two curves, got {:?}", other),
        }
    }

    #[test]
    fn arc_on_vertical_line_bulges_right() {
        for (a, b) in [(45.0, 55.0), (55.0, 45.0)] {
            let line = Line::jump(Point::new(50.0, a), Point::new(50.0, b));
            let p = build_path(&[line], 5.0, JumpStyle::Arc);
            assert!(close(p.segments[1].end(), 55.0, 50.0), "{:?}", p.segments[1]);
        }
    }

    #[test]
    fn empty_input_is_empty_path() {
        assert!(build_path(&[], 5.0, JumpStyle::Arc).is_empty());
    }

    #[test]
    fn same_input_same_output() {
        for style in JumpStyle::ALL {
            let a = build_path(&carved(), 5.0, style).serialize();
            let b = build_path(&carved(), 5.0, style).serialize();
            assert_eq!(a, b);
        }
    }
}
