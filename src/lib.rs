//! Block Layout WASM Module
//!
//! Computes the geometry of visual programming blocks: which elements
//! share a row, the spacing between them, alignment, and the absolute
//! position of every element, ready for a drawing pass.

pub mod api;
pub mod block_layout;
pub mod models;

// Re-export commonly used types
pub use block_layout::{
    layout_block_json, BlockLayoutEngine, ConstantProvider, LayoutError, RenderInfo,
};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("Logger already initialized");
    }

    log::info!("Block layout WASM module initialized");
}
