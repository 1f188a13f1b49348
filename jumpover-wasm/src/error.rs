use wasm_bindgen::prelude::*;
use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Map a core error onto `{ ok: false, error: { code, message, data? } }`.
pub fn from_core(e: &jumpover::Error) -> JsValue {
    use jumpover::Error;
    let d = new_obj();
    let data = match e {
        Error::InvalidJumpSize { size } => { set_kv(&d, "got", &JsValue::from_f64(*size)); true }
        Error::NonFinite { param } => { set_kv(&d, "param", &JsValue::from_str(param)); true }
        Error::OutOfBounds { param, value } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "got", &JsValue::from_f64(*value));
            true
        }
        Error::UnknownLink { id } => {
            set_kv(&d, "kind", &JsValue::from_str("link"));
            set_kv(&d, "id", &JsValue::from_f64(*id as f64));
            true
        }
        Error::RouteTooLong { len, max } => {
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            true
        }
        _ => false,
    };
    err(e.code(), e.to_string(), if data { Some(d.into()) } else { None })
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn odd_coords(param: &str, len: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err("odd_coords", format!("parameter '{}' must hold x,y pairs", param), Some(d.into()))
}
