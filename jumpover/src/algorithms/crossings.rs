use std::borrow::Cow;

use crate::geometry::line::{Line, Point};
use crate::model::LinkId;

/// One candidate link broken into lines.
#[derive(Clone, Debug)]
pub struct PeerLines<'a> {
    pub id: LinkId,
    pub lines: Cow<'a, [Line]>,
}

pub fn find_line_intersections(line: &Line, cross_check: &[Line]) -> Vec<Point> {
    cross_check.iter().filter_map(|other| line.intersection(other)).collect()
}

/// Crossings of `line` with every peer except `subject`, nearest to
/// `line.start` first. Equal distances keep encounter order.
pub fn segment_crossings(line: &Line, subject: LinkId, peers: &[PeerLines<'_>]) -> Vec<Point> {
    let mut points: Vec<Point> = peers
        .iter()
        .filter(|p| p.id != subject)
        .flat_map(|p| find_line_intersections(line, &p.lines))
        .collect();
    let origin = line.start;
    points.sort_by(|a, b| origin.squared_distance(*a).total_cmp(&origin.squared_distance(*b)));
    tracing::trace!(subject, crossings = points.len(), "segment intersections");
    points
}
