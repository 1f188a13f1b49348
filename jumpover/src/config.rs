//! Jump-over options and their parsing from connector arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::limits::in_jump_size_bounds;

/// Default jump half-width.
pub const JUMP_SIZE: f64 = 5.0;

/// Keeps a jump from being squeezed against the end of its line.
pub const CLOSE_PROXIMITY_PADDING: f64 = 1.0;

pub const JUMPOVER_CONNECTOR: &str = "jumpover";

/// Connectors never jumped over; arcs over curves look wrong.
pub const IGNORED_CONNECTORS: &[&str] = &["smooth"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpStyle {
    #[default]
    Arc,
    Gap,
    Cubic,
}

impl JumpStyle {
    pub const ALL: [JumpStyle; 3] = [JumpStyle::Arc, JumpStyle::Gap, JumpStyle::Cubic];

    pub fn as_str(self) -> &'static str {
        match self {
            JumpStyle::Arc => "arc",
            JumpStyle::Gap => "gap",
            JumpStyle::Cubic => "cubic",
        }
    }

    /// Case-insensitive; anything unrecognized becomes the default style.
    pub fn parse_lenient(s: &str) -> JumpStyle {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(style = s, "unknown jump style, using {}", JumpStyle::default());
            JumpStyle::default()
        })
    }
}

impl fmt::Display for JumpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJumpStyle(pub String);

impl fmt::Display for UnknownJumpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown jump style '{}'", self.0)
    }
}

impl std::error::Error for UnknownJumpStyle {}

impl FromStr for JumpStyle {
    type Err = UnknownJumpStyle;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        JumpStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownJumpStyle(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JumpOptions {
    pub size: f64,
    pub jump: JumpStyle,
    pub ignore_connectors: Vec<String>,
    /// Hand back the path object instead of its `d` string.
    pub raw: bool,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            size: JUMP_SIZE,
            jump: JumpStyle::default(),
            ignore_connectors: IGNORED_CONNECTORS.iter().map(|s| s.to_string()).collect(),
            raw: false,
        }
    }
}

impl JumpOptions {
    /// Checked constructor for callers building options in code.
    pub fn new(size: f64, jump: JumpStyle) -> Result<Self> {
        check_size(size)?;
        Ok(Self { size, jump, ..Self::default() })
    }

    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_connectors = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn ignores(&self, connector_name: &str) -> bool {
        self.ignore_connectors.iter().any(|n| n == connector_name)
    }

    /// Parse `{ size, jump, ignoreConnectors, raw }`. `null` yields defaults.
    pub fn from_value(v: &Value) -> Result<Self> {
        let obj = match v {
            Value::Null => return Ok(Self::default()),
            Value::Object(obj) => obj,
            other => {
                return Err(Error::Invalid {
                    message: format!("jump options must be an object, got {}", other),
                })
            }
        };
        let mut opts = Self::default();
        match obj.get("size") {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) => {
                let size = n.as_f64().unwrap_or(f64::NAN);
                check_size(size)?;
                opts.size = size;
            }
            Some(other) => {
                tracing::debug!(size = %other, "non-numeric jump size, using default");
            }
        }
        if let Some(jump) = obj.get("jump") {
            opts.jump = match jump {
                Value::String(s) => JumpStyle::parse_lenient(s),
                Value::Null => JumpStyle::default(),
                other => JumpStyle::parse_lenient(&other.to_string()),
            };
        }
        match obj.get("ignoreConnectors") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => opts.ignore_connectors = vec![s.clone()],
            Some(Value::Array(items)) => {
                opts.ignore_connectors =
                    items.iter().filter_map(|i| i.as_str().map(str::to_string)).collect();
            }
            Some(other) => {
                tracing::debug!(ignore = %other, "unusable ignoreConnectors, using defaults");
            }
        }
        if let Some(raw) = obj.get("raw") {
            opts.raw = raw.as_bool().unwrap_or(false);
        }
        Ok(opts)
    }
}

fn check_size(size: f64) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(Error::InvalidJumpSize { size });
    }
    if !in_jump_size_bounds(size) {
        return Err(Error::OutOfBounds { param: "size", value: size });
    }
    Ok(())
}
