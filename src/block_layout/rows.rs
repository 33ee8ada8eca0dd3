//! Rows of measurable elements
//!
//! A row groups elements that share a vertical extent. Header and footer
//! rows hold the block's corners and notches, content rows hold icons,
//! fields and sockets, and between-row spacers pad the gaps.

use serde::{Deserialize, Serialize};

use super::measurables::{ElementKind, Measurable};
use crate::models::Align;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    Header,
    Footer,
    Content,
    BetweenSpacer,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub kind: RowKind,
    pub elements: Vec<Measurable>,

    /// Sum of element widths
    pub width: f32,
    pub height: f32,
    pub min_height: f32,

    /// Width including external and statement children
    pub width_with_connected_blocks: f32,

    /// Top edge relative to the block origin, set by the finalizer
    pub y_pos: f32,

    pub has_statement: bool,
    pub has_inline_input: bool,
    pub has_external_input: bool,
    pub has_dummy_input: bool,
    pub has_jagged_edge: bool,

    /// Between-row spacer directly below a statement input
    pub follows_statement: bool,

    /// Footer whose width is pinned to the theme's maximum bottom width
    pub has_fixed_width: bool,

    /// Inner edge of statement inputs, shared by every statement row
    pub statement_edge: f32,

    /// Alignment declared by the last input placed on this row
    pub last_input_align: Option<Align>,

    /// Header only: how far a hat rises above the top edge
    pub ascender_height: f32,

    /// Footer only: how far a next notch hangs below the bottom edge
    pub descender_height: f32,

    /// Footer only: y of the bottom edge, set by the finalizer
    pub baseline: f32,
}

impl Row {
    pub fn new(kind: RowKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            width: 0.0,
            height: 0.0,
            min_height: 0.0,
            width_with_connected_blocks: 0.0,
            y_pos: 0.0,
            has_statement: false,
            has_inline_input: false,
            has_external_input: false,
            has_dummy_input: false,
            has_jagged_edge: false,
            follows_statement: false,
            has_fixed_width: false,
            statement_edge: 0.0,
            last_input_align: None,
            ascender_height: 0.0,
            descender_height: 0.0,
            baseline: 0.0,
        }
    }

    pub fn header() -> Self {
        Self::new(RowKind::Header)
    }

    pub fn footer() -> Self {
        Self::new(RowKind::Footer)
    }

    pub fn content() -> Self {
        Self::new(RowKind::Content)
    }

    /// A vertical spacer; its size is fixed at creation
    pub fn between_spacer(width: f32, height: f32) -> Self {
        let mut row = Self::new(RowKind::BetweenSpacer);
        row.elements.push(Measurable::spacer(width));
        row.width = width;
        row.height = height;
        row
    }

    pub fn is_header(&self) -> bool {
        self.kind == RowKind::Header
    }

    pub fn is_footer(&self) -> bool {
        self.kind == RowKind::Footer
    }

    pub fn is_header_or_footer(&self) -> bool {
        self.is_header() || self.is_footer()
    }

    pub fn is_spacer(&self) -> bool {
        self.kind == RowKind::BetweenSpacer
    }

    /// Header and footer rows start with their corner at x = 0
    pub fn starts_with_elem_spacer(&self) -> bool {
        self.kind == RowKind::Content
    }

    /// Nothing goes after a trailing external or statement socket
    pub fn ends_with_elem_spacer(&self) -> bool {
        !self
            .elements
            .last()
            .map_or(false, |elem| elem.is_external_input() || elem.is_statement_input())
    }

    pub fn element_width_sum(&self) -> f32 {
        self.elements.iter().map(|elem| elem.width).sum()
    }

    /// Index of the last socket on the row
    pub fn last_input_index(&self) -> Option<usize> {
        self.elements.iter().rposition(Measurable::is_input)
    }

    pub fn last_input(&self) -> Option<&Measurable> {
        self.last_input_index().map(|index| &self.elements[index])
    }

    pub fn first_spacer_index(&self) -> Option<usize> {
        self.elements.iter().position(Measurable::is_spacer)
    }

    pub fn last_spacer_index(&self) -> Option<usize> {
        self.elements.iter().rposition(Measurable::is_spacer)
    }

    /// Populate width, height and connected width from the elements
    pub fn measure(&mut self) {
        self.width = self.element_width_sum();
        match self.kind {
            RowKind::Header => {
                let mut height: f32 = 0.0;
                let mut ascender: f32 = 0.0;
                for elem in self.elements.iter().filter(|elem| !elem.is_spacer()) {
                    match elem.kind {
                        ElementKind::Hat { ascender_height } => ascender = ascender.max(ascender_height),
                        _ => height = height.max(elem.height),
                    }
                }
                self.ascender_height = ascender;
                self.height = self.min_height.max(height) + ascender;
                self.width_with_connected_blocks = self.width;
            }
            RowKind::Footer => {
                let mut height: f32 = 0.0;
                let mut descender: f32 = 0.0;
                for elem in self.elements.iter().filter(|elem| !elem.is_spacer()) {
                    // Next notches sit entirely below the bottom edge
                    if elem.is_next_connection() {
                        descender = descender.max(elem.height);
                    } else {
                        height = height.max(elem.height);
                    }
                }
                self.descender_height = descender;
                self.height = self.min_height.max(height) + descender;
                self.width_with_connected_blocks = self.width;
            }
            RowKind::Content => {
                self.height = self
                    .elements
                    .iter()
                    .filter(|elem| !elem.is_spacer())
                    .fold(self.min_height, |acc, elem| acc.max(elem.height));
                self.width_with_connected_blocks = self
                    .elements
                    .iter()
                    .map(Measurable::width_with_connected_block)
                    .sum();
            }
            RowKind::BetweenSpacer => {}
        }
    }
}
