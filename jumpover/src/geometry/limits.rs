// Centralized ingestion limits to harden against untrusted input (API/JSON)

// Surface size caps
pub const MAX_LINKS: usize = 100_000;

// Waypoints per link route
pub const MAX_ROUTE_POINTS: usize = 8_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const JUMP_SIZE_MAX: f64 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_jump_size_bounds(s: f64) -> bool { s.is_finite() && s > 0.0 && s <= JUMP_SIZE_MAX }
