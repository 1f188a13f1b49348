use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Surface { pub(crate) inner: jumpover::Surface }

impl Surface {
    pub fn rs_new() -> Surface { Surface { inner: jumpover::Surface::new() } }
    pub fn rs_geom_version(&self) -> u64 { self.inner.geom_version() }
}
