//! Drawable path commands and their SVG `d` serialization.

use serde::{Deserialize, Serialize};

use super::line::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PathSegment {
    #[serde(rename = "M")]
    MoveTo { end: Point },
    #[serde(rename = "L")]
    LineTo { end: Point },
    #[serde(rename = "C")]
    CurveTo { c1: Point, c2: Point, end: Point },
}

impl PathSegment {
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::MoveTo { end } | PathSegment::LineTo { end } | PathSegment::CurveTo { end, .. } => end,
        }
    }

    fn write_into(&self, out: &mut String, buf: &mut ryu_js::Buffer) {
        match *self {
            PathSegment::MoveTo { end } => {
                out.push('M');
                push_point(out, end, buf);
            }
            PathSegment::LineTo { end } => {
                out.push('L');
                push_point(out, end, buf);
            }
            PathSegment::CurveTo { c1, c2, end } => {
                out.push('C');
                push_point(out, c1, buf);
                push_point(out, c2, buf);
                push_point(out, end, buf);
            }
        }
    }
}

fn push_point(out: &mut String, p: Point, buf: &mut ryu_js::Buffer) {
    out.push(' ');
    out.push_str(js_number_to_string(p.x, buf));
    out.push(' ');
    out.push_str(js_number_to_string(p.y, buf));
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `M x y L x y C x1 y1 x2 y2 x y`, single-space separated.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.segments.len() * 16);
        let mut buf = ryu_js::Buffer::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            seg.write_into(&mut out, &mut buf);
        }
        out
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

// Number formatting follows ECMAScript Number#toString so serialized paths
// match what a browser host would produce for the same coordinates.
fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}
