pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod geometry {
    pub mod intersect;
    pub mod limits;
    pub mod line;
    pub mod path;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod assemble;
    pub mod candidates;
    pub mod carve;
    pub mod crossings;
    pub mod decompose;
    pub mod jumpover;
}
mod json;
mod svg;

pub use algorithms::jumpover::{jumpover, jumpover_path, PathData, RouteContext};
pub use config::{JumpOptions, JumpStyle};
pub use error::{Error, Result};
pub use geometry::line::{Line, Point};
pub use geometry::path::{Path, PathSegment};
pub use model::{Connector, Link, LinkId, LinkRef};

use std::collections::HashMap;

use algorithms::assemble::build_path;
use algorithms::decompose::create_lines;
use geometry::limits;
use registry::UpdateRegistry;

/// A diagram surface: links in z-order plus the bookkeeping that keeps
/// jump-over links in step with their peers.
pub struct Surface {
    pub(crate) links: Vec<Option<Link>>, // id is index
    pub(crate) default_connector: Option<Connector>,
    pub(crate) registry: UpdateRegistry<LinkId>,
    pub(crate) rendered: HashMap<LinkId, String>, // last drawn `d` per link
    pub(crate) geom_ver: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

fn check_point(param: &'static str, p: Point) -> Result<()> {
    for v in [p.x, p.y] {
        if !v.is_finite() {
            return Err(Error::NonFinite { param });
        }
        if !limits::in_coord_bounds(v) {
            return Err(Error::OutOfBounds { param, value: v });
        }
    }
    Ok(())
}

fn check_connector(connector: Option<&Connector>) -> Result<()> {
    match connector {
        Some(c) if c.is_jumpover() => JumpOptions::from_value(&c.args).map(|_| ()),
        _ => Ok(()),
    }
}

fn check_route(route: &[Point]) -> Result<()> {
    if route.len() > limits::MAX_ROUTE_POINTS {
        return Err(Error::RouteTooLong { len: route.len(), max: limits::MAX_ROUTE_POINTS });
    }
    route.iter().try_for_each(|p| check_point("route", *p))
}

impl Surface {
    pub fn new() -> Self {
        Surface {
            links: Vec::new(),
            default_connector: None,
            registry: UpdateRegistry::new(),
            rendered: HashMap::new(),
            geom_ver: 1,
        }
    }

    /// Monotonic geometry version; increments on link edits
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    fn link_mut(&mut self, id: LinkId) -> Result<&mut Link> {
        self.links
            .get_mut(id as usize)
            .and_then(|l| l.as_mut())
            .ok_or(Error::UnknownLink { id })
    }

    // Links
    pub fn add_link(&mut self, source: Point, target: Point) -> Result<LinkId> {
        check_point("source", source)?;
        check_point("target", target)?;
        if self.link_count() as usize >= limits::MAX_LINKS {
            return Err(Error::TooManyLinks { max: limits::MAX_LINKS });
        }
        // new links go on top
        let z = self.links.iter().flatten().map(|l| l.z).max().map_or(0, |z| z.saturating_add(1));
        let id = self.links.len() as LinkId;
        self.links.push(Some(Link { z, ..Link::new(source, target) }));
        self.bump();
        Ok(id)
    }

    pub fn remove_link(&mut self, id: LinkId) -> bool {
        match self.links.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.registry.unregister(id);
                self.rendered.remove(&id);
                self.bump();
                true
            }
            _ => false,
        }
    }

    pub fn get_link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id as usize).and_then(|l| l.as_ref())
    }

    pub fn link_count(&self) -> u32 {
        self.links.iter().filter(|l| l.is_some()).count() as u32
    }

    pub fn set_link_endpoints(&mut self, id: LinkId, source: Point, target: Point) -> Result<()> {
        check_point("source", source)?;
        check_point("target", target)?;
        let link = self.link_mut(id)?;
        link.source = source;
        link.target = target;
        self.bump();
        Ok(())
    }

    pub fn set_link_route(&mut self, id: LinkId, route: Vec<Point>) -> Result<()> {
        check_route(&route)?;
        self.link_mut(id)?.route = route;
        self.bump();
        Ok(())
    }

    pub fn set_link_z(&mut self, id: LinkId, z: i32) -> Result<()> {
        self.link_mut(id)?.z = z;
        self.bump();
        Ok(())
    }

    /// Replace the link's connector. The link leaves the update registry;
    /// a link already drawn is redrawn at once, which puts a jump-over link
    /// back at the end of the registration order. Invalid jump options are
    /// rejected before anything changes.
    pub fn set_connector(&mut self, id: LinkId, connector: Option<Connector>) -> Result<()> {
        check_connector(connector.as_ref())?;
        let link = self.link_mut(id)?;
        if link.connector == connector {
            return Ok(());
        }
        link.connector = connector;
        self.registry.unregister(id);
        self.bump();
        if self.rendered.contains_key(&id) {
            self.render_link(id)?;
        }
        Ok(())
    }

    /// Connector used by links that have none of their own. Drawn links
    /// that fall back to it are unregistered and redrawn like in
    /// `set_connector`.
    pub fn set_default_connector(&mut self, connector: Option<Connector>) -> Result<()> {
        check_connector(connector.as_ref())?;
        if self.default_connector == connector {
            return Ok(());
        }
        self.default_connector = connector;
        self.bump();
        let affected: Vec<LinkId> = self
            .links
            .iter()
            .enumerate()
            .filter(|(_, l)| l.as_ref().map_or(false, |l| l.connector.is_none()))
            .map(|(i, _)| i as LinkId)
            .collect();
        for id in affected {
            self.registry.unregister(id);
            if self.rendered.contains_key(&id) {
                self.render_link(id)?;
            }
        }
        Ok(())
    }

    pub fn default_connector(&self) -> Option<&Connector> {
        self.default_connector.as_ref()
    }

    /// Live links, lowest z first; ties keep id order.
    pub fn links_in_z_order(&self) -> Vec<LinkRef<'_>> {
        let mut out: Vec<LinkRef<'_>> = self
            .links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|link| LinkRef { id: i as LinkId, link }))
            .collect();
        out.sort_by_key(|r| r.link.z);
        out
    }

    pub(crate) fn compute_path(&self, id: LinkId) -> Result<(PathData, bool)> {
        let link = self.get_link(id).ok_or(Error::UnknownLink { id })?;
        match link.effective_connector(self.default_connector.as_ref()) {
            Some(c) if c.is_jumpover() => {
                let opts = JumpOptions::from_value(&c.args)?;
                let ordered = self.links_in_z_order();
                let ctx = RouteContext { links: &ordered, default_connector: self.default_connector.as_ref() };
                Ok((jumpover(id, link.source, link.target, &link.route, &ctx, &opts), true))
            }
            _ => {
                let lines = create_lines(link.source, link.target, &link.route);
                Ok((PathData::Serialized(build_path(&lines, 0.0, JumpStyle::default()).serialize()), false))
            }
        }
    }

    /// Draw one link through its connector. Jump-over links join the update
    /// registry on their first draw; any other link leaves it.
    pub fn render_link(&mut self, id: LinkId) -> Result<PathData> {
        let (data, jumps) = self.compute_path(id)?;
        if jumps {
            self.registry.register(id);
        } else {
            self.registry.unregister(id);
        }
        self.rendered.insert(id, data.clone().into_path_string());
        Ok(data)
    }

    /// Last drawn path of a link, if it has been rendered.
    pub fn rendered_path(&self, id: LinkId) -> Option<&str> {
        self.rendered.get(&id).map(String::as_str)
    }

    pub fn registered_links(&self) -> &[LinkId] {
        self.registry.handles()
    }

    /// End of a pointer interaction or programmatic batch: redraw every
    /// registered jump-over link against the committed geometry. Returns the
    /// ids redrawn, in registration order.
    pub fn batch_complete(&mut self) -> Vec<LinkId> {
        let mut pending = Vec::with_capacity(self.registry.len());
        self.registry.notify_batch_complete(|id| pending.push(id));
        pending
            .into_iter()
            .filter(|&id| match self.render_link(id) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(link = id, error = %e, "jump-over update failed");
                    false
                }
            })
            .collect()
    }

    /// Drop every link along with the registry and drawn paths.
    pub fn reset(&mut self) {
        self.links.clear();
        self.registry.clear();
        self.rendered.clear();
        self.bump();
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    /// Replace the surface with a persisted document. Nothing changes on error.
    pub fn from_json_value_strict(&mut self, v: serde_json::Value) -> Result<()> {
        json::from_json_impl_strict(self, v)
    }

    /// `d` string of every live link in z-order, without registering anything.
    pub fn to_svg_paths(&self) -> Vec<String> {
        svg::to_svg_paths_impl(self)
    }
}
