//! Models module for the block layout engine
//!
//! This module contains the read-only content model the layout
//! engine measures: blocks, inputs, fields, icons and connections.

pub mod block;
pub mod elements;

// Re-export commonly used types
pub use block::*;
pub use elements::*;
