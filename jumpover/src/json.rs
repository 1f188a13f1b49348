use crate::geometry::limits;
use crate::model::{Connector, Link, LinkId};
use crate::{check_point, check_route, Error, Result, Surface};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct LinkSer {
    id: LinkId,
    #[serde(flatten)]
    link: Link,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurfaceSer {
    version: u32,
    #[serde(default)]
    default_connector: Option<Connector>,
    links: Vec<LinkSer>,
}

pub fn to_json_impl(s: &Surface) -> Value {
    let links = s
        .links
        .iter()
        .enumerate()
        .filter_map(|(i, l)| l.as_ref().map(|link| LinkSer { id: i as LinkId, link: link.clone() }))
        .collect();
    let doc = SurfaceSer { version: FORMAT_VERSION, default_connector: s.default_connector.clone(), links };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl_strict(s: &mut Surface, v: Value) -> Result<()> {
    let doc: SurfaceSer = serde_json::from_value(v)?;
    if doc.version != FORMAT_VERSION {
        return Err(Error::Invalid { message: format!("unsupported version {}", doc.version) });
    }
    if doc.links.len() > limits::MAX_LINKS {
        return Err(Error::TooManyLinks { max: limits::MAX_LINKS });
    }
    let mut links: Vec<Option<Link>> = Vec::new();
    for LinkSer { id, link } in doc.links {
        if id as usize >= limits::MAX_LINKS {
            return Err(Error::OutOfBounds { param: "id", value: id as f64 });
        }
        check_point("source", link.source)?;
        check_point("target", link.target)?;
        check_route(&link.route)?;
        let idx = id as usize;
        if links.len() <= idx {
            links.resize(idx + 1, None);
        }
        if links[idx].is_some() {
            return Err(Error::Invalid { message: format!("duplicate link id {}", id) });
        }
        links[idx] = Some(link);
    }
    s.links = links;
    s.default_connector = doc.default_connector;
    s.registry.clear();
    s.rendered.clear();
    s.geom_ver = s.geom_ver.wrapping_add(1);
    Ok(())
}
