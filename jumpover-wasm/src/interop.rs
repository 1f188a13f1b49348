use js_sys::{Object, Reflect, Uint32Array};
use jumpover::Point;
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

/// `[x0, y0, x1, y1, ...]` into points; `None` on odd length.
pub fn points_from_flat(xy: &[f64]) -> Option<Vec<Point>> {
    if xy.len() % 2 != 0 { return None; }
    Some(xy.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// Plain objects rather than `Map`s for JSON-shaped output.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Host objects (or `undefined`) into JSON; `undefined`/`null` become `null`.
pub fn json_from_js(v: JsValue) -> Result<serde_json::Value, serde_wasm_bindgen::Error> {
    if v.is_undefined() || v.is_null() { return Ok(serde_json::Value::Null); }
    serde_wasm_bindgen::from_value(v)
}
