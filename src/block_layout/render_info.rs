//! Layout result for one block
//!
//! `RenderInfo` is what a drawing pass consumes: the finalized rows with
//! every element positioned, plus the block-level extents.

use serde::{Deserialize, Serialize};

use super::constants::ConstantProvider;
use super::measurables::Measurable;
use super::rows::Row;

/// Geometry of the output tab on the block's left edge
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputConnectionInfo {
    pub width: f32,
    pub height: f32,

    /// Distance from the block's top edge to the top of the tab
    pub connection_offset_y: f32,
}

impl OutputConnectionInfo {
    pub fn new(constants: &ConstantProvider) -> Self {
        Self {
            width: constants.tab_width,
            height: constants.tab_height,
            connection_offset_y: constants.tab_offset_from_top,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderInfo {
    /// Every row top to bottom, spacer rows included
    pub rows: Vec<Row>,
    pub header_index: usize,
    pub footer_index: usize,

    pub width: f32,
    pub height: f32,

    /// Width including external and statement children
    pub width_with_children: f32,

    /// Inner edge of the statement inputs, 0 when there are none
    pub statement_edge: f32,

    /// Icons left out of the layout while the block is collapsed
    pub hidden_icons: Vec<Measurable>,

    pub rtl: bool,
    pub is_collapsed: bool,
    pub is_inline: bool,
    pub is_insertion_marker: bool,
    pub output_connection: Option<OutputConnectionInfo>,
}

impl RenderInfo {
    pub fn header(&self) -> &Row {
        &self.rows[self.header_index]
    }

    pub fn footer(&self) -> &Row {
        &self.rows[self.footer_index]
    }

    /// Rows other than the between-row spacers
    pub fn content_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_spacer())
    }

    pub fn has_statement(&self) -> bool {
        self.rows.iter().any(|row| row.has_statement)
    }
}
