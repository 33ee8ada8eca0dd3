//! Block Layout WASM API
//!
//! This module provides the JavaScript-facing API for the block layout
//! engine.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error conversion
//! - `layout`: Layout entry points and the `BlockLayoutEngine` class

pub mod helpers;
pub mod layout;

pub use layout::{compute_block_layout, compute_block_layout_json, BlockLayoutEngineHandle};
