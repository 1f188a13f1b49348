use std::borrow::Cow;

use serde::Serialize;

use super::assemble::build_path;
use super::candidates::filter_candidates;
use super::carve::create_jumps;
use super::crossings::{segment_crossings, PeerLines};
use super::decompose::create_lines;
use crate::config::JumpOptions;
use crate::geometry::line::{Line, Point};
use crate::geometry::path::Path;
use crate::model::{Connector, LinkId, LinkRef};

/// What the routed link shares its surface with.
#[derive(Clone, Copy, Debug)]
pub struct RouteContext<'a> {
    /// Every link on the surface, lowest z first, the subject included.
    pub links: &'a [LinkRef<'a>],
    pub default_connector: Option<&'a Connector>,
}

/// Serialized `d` string, or the path itself when `raw` was requested.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathData {
    Raw(Path),
    Serialized(String),
}

impl PathData {
    pub fn new(path: Path, raw: bool) -> Self {
        if raw { PathData::Raw(path) } else { PathData::Serialized(path.serialize()) }
    }

    pub fn into_path_string(self) -> String {
        match self {
            PathData::Raw(p) => p.serialize(),
            PathData::Serialized(s) => s,
        }
    }
}

/// Route `subject` from `source` through `route` to `target`, jumping over
/// the links it crosses.
pub fn jumpover_path(
    subject: LinkId,
    source: Point,
    target: Point,
    route: &[Point],
    ctx: &RouteContext<'_>,
    opts: &JumpOptions,
) -> Path {
    let this_lines = create_lines(source, target, route);

    if ctx.links.len() <= 1 {
        tracing::debug!(subject, "single link on surface, skipping crossings");
        return build_path(&this_lines, opts.size, opts.jump);
    }

    let candidates = filter_candidates(ctx.links, subject, opts, ctx.default_connector);
    let peers: Vec<PeerLines<'_>> = candidates
        .iter()
        .map(|c| PeerLines {
            id: c.id,
            lines: if c.id == subject {
                Cow::Borrowed(&this_lines[..])
            } else {
                Cow::Owned(create_lines(c.link.source, c.link.target, &c.link.route))
            },
        })
        .collect();

    let mut jumping: Vec<Line> = Vec::with_capacity(this_lines.len());
    for line in &this_lines {
        let crossings = segment_crossings(line, subject, &peers);
        jumping.extend(create_jumps(*line, &crossings, opts.size));
    }

    build_path(&jumping, opts.size, opts.jump)
}

/// `jumpover_path` with the output shape chosen by `opts.raw`.
pub fn jumpover(
    subject: LinkId,
    source: Point,
    target: Point,
    route: &[Point],
    ctx: &RouteContext<'_>,
    opts: &JumpOptions,
) -> PathData {
    PathData::new(jumpover_path(subject, source, target, route, ctx, opts), opts.raw)
}
