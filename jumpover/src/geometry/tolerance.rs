// Centralized tolerances and helpers for the jump geometry

pub const EPS_LEN: f64 = 1e-12; // zero-length vector threshold
pub const EPS_POS: f64 = 1e-9;  // point coincidence threshold for tests/invariants

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn norm2(x: f64, y: f64) -> Option<((f64, f64), f64)> {
    let len = (x * x + y * y).sqrt();
    if len > EPS_LEN { Some(((x / len, y / len), len)) } else { None }
}

// Degrees are reduced modulo 360 before conversion, matching the screen-space
// rotation helpers.
#[inline]
pub fn to_rad(deg: f64) -> f64 { (deg % 360.0) * std::f64::consts::PI / 180.0 }

#[inline]
pub fn normalize_angle(deg: f64) -> f64 { (deg % 360.0) + if deg < 0.0 { 360.0 } else { 0.0 } }
