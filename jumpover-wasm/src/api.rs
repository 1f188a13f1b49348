use crate::Surface;
use jumpover::{Connector, Point};
use js_sys::Uint32Array;
use wasm_bindgen::prelude::*;
use crate::error;
use crate::interop::to_js;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn connector_from_js(name: Option<String>, args: JsValue) -> Result<Option<Connector>, JsValue> {
    let Some(name) = name else { return Ok(None) };
    let args = crate::interop::json_from_js(args)
        .map_err(|e| error::err("invalid_args", e.to_string(), None))?;
    Ok(Some(Connector::with_args(name, args)))
}

#[wasm_bindgen]
impl Surface {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Surface {
        crate::Surface::rs_new()
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Links
    pub fn add_link(&mut self, sx: f64, sy: f64, tx: f64, ty: f64) -> Option<u32> {
        self.inner.add_link(Point::new(sx, sy), Point::new(tx, ty)).ok()
    }
    pub fn add_link_res(&mut self, sx: f64, sy: f64, tx: f64, ty: f64) -> JsValue {
        match self.inner.add_link(Point::new(sx, sy), Point::new(tx, ty)) {
            Ok(id) => error::ok(JsValue::from_f64(id as f64)),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn remove_link(&mut self, id: u32) -> bool {
        self.inner.remove_link(id)
    }
    pub fn link_count(&self) -> u32 {
        self.inner.link_count()
    }
    pub fn set_link_endpoints_res(&mut self, id: u32, sx: f64, sy: f64, tx: f64, ty: f64) -> JsValue {
        match self.inner.set_link_endpoints(id, Point::new(sx, sy), Point::new(tx, ty)) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }
    /// `route` is a flat `[x0, y0, x1, y1, ...]` list of waypoints.
    pub fn set_link_route_res(&mut self, id: u32, route: &[f64]) -> JsValue {
        if route.iter().any(|v| !v.is_finite()) {
            return error::non_finite("route");
        }
        let Some(points) = crate::interop::points_from_flat(route) else {
            return error::odd_coords("route", route.len());
        };
        match self.inner.set_link_route(id, points) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn set_link_z_res(&mut self, id: u32, z: i32) -> JsValue {
        match self.inner.set_link_z(id, z) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    // Connectors
    /// `name` of `undefined` clears the link's own connector.
    pub fn set_connector_res(&mut self, id: u32, name: Option<String>, args: JsValue) -> JsValue {
        let connector = match connector_from_js(name, args) {
            Ok(c) => c,
            Err(e) => return e,
        };
        match self.inner.set_connector(id, connector) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn set_default_connector_res(&mut self, name: Option<String>, args: JsValue) -> JsValue {
        let connector = match connector_from_js(name, args) {
            Ok(c) => c,
            Err(e) => return e,
        };
        match self.inner.set_default_connector(connector) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    // Rendering
    /// `{ ok, value }` where value is the `d` string, or the path object for
    /// connectors asking for `raw`.
    pub fn render_link_res(&mut self, id: u32) -> JsValue {
        match self.inner.render_link(id) {
            Ok(data) => match to_js(&data) {
                Ok(v) => error::ok(v),
                Err(e) => error::err("serialize", e.to_string(), None),
            },
            Err(e) => error::from_core(&e),
        }
    }
    pub fn rendered_path(&self, id: u32) -> Option<String> {
        self.inner.rendered_path(id).map(str::to_string)
    }
    pub fn registered_links(&self) -> Uint32Array {
        crate::interop::arr_u32(self.inner.registered_links())
    }
    /// Call once a pointer interaction or batch of edits has finished.
    /// Returns the ids of the links that were redrawn.
    pub fn batch_complete(&mut self) -> Uint32Array {
        let expected = self.inner.registered_links().len();
        let updated = self.inner.batch_complete();
        if updated.len() != expected {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "jumpover: {} of {} links failed to redraw",
                expected - updated.len(),
                expected
            )));
        }
        crate::interop::arr_u32(&updated)
    }
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    // JSON + SVG
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value()).unwrap_or(JsValue::NULL)
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(val) {
                Ok(()) => error::ok(JsValue::TRUE),
                Err(e) => error::from_core(&e),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
    pub fn to_svg_paths(&self) -> JsValue {
        to_js(&self.inner.to_svg_paths()).unwrap_or(JsValue::NULL)
    }
}
