use serde::{Deserialize, Serialize};

use crate::config::JUMPOVER_CONNECTOR;
use crate::geometry::line::Point;

pub type LinkId = u32;

/// Named connector plus its connector-specific arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

impl Connector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), args: serde_json::Value::Null }
    }

    pub fn with_args(name: impl Into<String>, args: serde_json::Value) -> Self {
        Self { name: name.into(), args }
    }

    pub fn jumpover(args: serde_json::Value) -> Self {
        Self::with_args(JUMPOVER_CONNECTOR, args)
    }

    pub fn is_jumpover(&self) -> bool {
        self.name == JUMPOVER_CONNECTOR
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Point,
    pub target: Point,
    #[serde(default)]
    pub route: Vec<Point>,
    #[serde(default)]
    pub connector: Option<Connector>,
    #[serde(default)]
    pub z: i32,
}

impl Link {
    pub fn new(source: Point, target: Point) -> Self {
        Self { source, target, route: Vec::new(), connector: None, z: 0 }
    }

    /// The connector in effect, falling back to the surface default.
    pub fn effective_connector<'a>(&'a self, default: Option<&'a Connector>) -> Option<&'a Connector> {
        self.connector.as_ref().or(default)
    }
}

/// Borrowed view of one link as the routing pipeline sees it.
#[derive(Clone, Copy, Debug)]
pub struct LinkRef<'a> {
    pub id: LinkId,
    pub link: &'a Link,
}
