//! Block layout engine
//!
//! Runs the layout passes over one block and returns its `RenderInfo`.
//! Each call builds a fresh result; the engine itself only holds the
//! theme constants and can be shared freely.

use super::alignment::align_rows;
use super::bounds::compute_bounds;
use super::constants::ConstantProvider;
use super::error::{LayoutError, Result};
use super::finalize::finalize_rows;
use super::render_info::{OutputConnectionInfo, RenderInfo};
use super::row_builder::RowBuilder;
use super::row_spacing::add_row_spacing;
use super::spacing::add_elem_spacing;
use crate::models::Block;

/// Main layout engine for computing block geometry
#[derive(Debug, Clone, Default)]
pub struct BlockLayoutEngine {
    constants: ConstantProvider,
}

impl BlockLayoutEngine {
    /// Create an engine for a validated theme
    pub fn new(constants: ConstantProvider) -> Result<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    pub fn constants(&self) -> &ConstantProvider {
        &self.constants
    }

    /// Compute the complete layout for a block
    ///
    /// Attached children must already be laid out: their sizes are read
    /// from the block's connections, never recomputed here.
    ///
    /// # Errors
    /// Fails on a malformed block: a disposed icon, a negative or
    /// non-finite size, or a statement row without its socket.
    pub fn compute_layout(&self, block: &Block) -> Result<RenderInfo> {
        let constants = &self.constants;

        let built = RowBuilder::new(block, constants).build()?;
        let mut rows = built.rows;

        add_elem_spacing(&mut rows, block.rtl, constants);
        let bounds = compute_bounds(&mut rows, constants)?;
        align_rows(&mut rows, bounds.width, constants);

        let mut rows = add_row_spacing(rows, bounds.width, constants);
        let height = finalize_rows(&mut rows, constants);

        let footer_index = rows.len() - 1;
        log::debug!(
            "laid out block '{}': {}x{} ({} rows, statement edge {})",
            block.block_type,
            bounds.width,
            height,
            rows.len(),
            bounds.statement_edge
        );

        Ok(RenderInfo {
            rows,
            header_index: 0,
            footer_index,
            width: bounds.width,
            height,
            width_with_children: bounds.width_with_children,
            statement_edge: bounds.statement_edge,
            hidden_icons: built.hidden_icons,
            rtl: block.rtl,
            is_collapsed: block.collapsed,
            is_inline: block.is_inline(),
            is_insertion_marker: block.insertion_marker,
            output_connection: block
                .output_connection
                .as_ref()
                .map(|_| OutputConnectionInfo::new(constants)),
        })
    }
}

/// Lay out a block given as JSON, optionally with a JSON theme, and return
/// the `RenderInfo` as JSON
pub fn layout_block_json(block_json: &str, theme_json: Option<&str>) -> Result<String> {
    let block: Block =
        serde_json::from_str(block_json).map_err(|e| LayoutError::BlockParse(e.to_string()))?;

    let constants = match theme_json {
        Some(json) => ConstantProvider::from_json(json)?,
        None => ConstantProvider::default(),
    };

    let info = BlockLayoutEngine::new(constants)?.compute_layout(&block)?;
    serde_json::to_string(&info).map_err(|e| LayoutError::BlockParse(e.to_string()))
}
