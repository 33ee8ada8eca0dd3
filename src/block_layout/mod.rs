//! Block layout module
//!
//! Converts a block's content model into positioned rows and elements,
//! ready for a drawing pass. The passes run in order: row building,
//! in-row spacing, bounds, alignment, between-row spacing and finalizing.

pub mod alignment;
pub mod bounds;
pub mod constants;
pub mod engine;
pub mod error;
pub mod finalize;
pub mod measurables;
pub mod render_info;
pub mod row_builder;
pub mod row_spacing;
pub mod rows;
pub mod spacing;

// Re-export commonly used types
pub use constants::ConstantProvider;
pub use engine::{layout_block_json, BlockLayoutEngine};
pub use error::{LayoutError, Result};
pub use measurables::{ElementKind, InputSocket, Measurable, SourceRef};
pub use render_info::{OutputConnectionInfo, RenderInfo};
pub use rows::{Row, RowKind};
