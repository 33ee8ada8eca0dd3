//! Measurable elements
//!
//! A `Measurable` is the atomic sizeable unit of a row: a field, a socket,
//! an icon, a corner, a notch, a hat, a jagged edge or a spacer. Its kind is
//! a closed enum; the spacing rules query it through the capability
//! predicates below.

use serde::{Deserialize, Serialize};

use super::constants::ConstantProvider;
use super::error::{LayoutError, Result};
use crate::models::{Align, ConnectionType, Field, Icon, Input};

/// Non-owning reference back into the block a measurable was built from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SourceRef {
    /// Index into `Block::inputs`
    Input { input: usize },

    /// Field `field` of input `input`
    Field { input: usize, field: usize },

    /// Index into `Block::icons`
    Icon { icon: usize },

    /// One of the block's own connections
    Connection { connection: ConnectionType },
}

/// Socket data shared by the three input kinds
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputSocket {
    pub align: Align,

    /// Width of the connection shape (tab or notch)
    pub connection_width: f32,

    /// Width of the attached child block, if any
    pub connected_width: Option<f32>,
}

/// Closed set of element kinds
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    Field { editable: bool },
    Icon,
    Hat { ascender_height: f32 },
    SquareCorner,
    RoundCorner,
    PreviousConnection,
    NextConnection,
    JaggedEdge,
    InlineInput(InputSocket),
    ExternalValueInput(InputSocket),
    StatementInput(InputSocket),
    InRowSpacer,
}

/// A sized element placed in a row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurable {
    pub kind: ElementKind,
    pub width: f32,
    pub height: f32,
    pub source: Option<SourceRef>,

    /// Set by the finalizer: left edge relative to the block origin
    pub x_pos: f32,

    /// Set by the finalizer: vertical center relative to the block origin
    pub centerline: f32,
}

fn check_dimension(what: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension {
            what: what.to_string(),
            value,
        })
    }
}

impl Measurable {
    fn new(kind: ElementKind, width: f32, height: f32, source: Option<SourceRef>) -> Self {
        Self {
            kind,
            width,
            height,
            source,
            x_pos: 0.0,
            centerline: 0.0,
        }
    }

    pub fn field(input: usize, index: usize, field: &Field) -> Result<Self> {
        Ok(Self::new(
            ElementKind::Field { editable: field.editable },
            check_dimension("field width", field.width)?,
            check_dimension("field height", field.height)?,
            Some(SourceRef::Field { input, field: index }),
        ))
    }

    pub fn icon(index: usize, icon: &Icon) -> Result<Self> {
        if icon.disposed {
            return Err(LayoutError::DisposedIcon { index });
        }
        Ok(Self::new(
            ElementKind::Icon,
            check_dimension("icon width", icon.width)?,
            check_dimension("icon height", icon.height)?,
            Some(SourceRef::Icon { icon: index }),
        ))
    }

    pub fn hat(constants: &ConstantProvider) -> Self {
        Self::new(
            ElementKind::Hat { ascender_height: constants.start_hat_height },
            constants.start_hat_width,
            constants.start_hat_height,
            None,
        )
    }

    pub fn square_corner(constants: &ConstantProvider) -> Self {
        Self::new(ElementKind::SquareCorner, constants.no_padding, constants.notch_height, None)
    }

    /// The rounded corner extends into the next row, so only half of it
    /// is measured here
    pub fn round_corner(constants: &ConstantProvider) -> Self {
        Self::new(
            ElementKind::RoundCorner,
            constants.corner_radius,
            constants.corner_radius / 2.0,
            None,
        )
    }

    pub fn previous_connection(constants: &ConstantProvider) -> Self {
        Self::new(
            ElementKind::PreviousConnection,
            constants.notch_width,
            constants.notch_height,
            Some(SourceRef::Connection { connection: ConnectionType::Previous }),
        )
    }

    pub fn next_connection(constants: &ConstantProvider) -> Self {
        Self::new(
            ElementKind::NextConnection,
            constants.notch_width,
            constants.notch_height,
            Some(SourceRef::Connection { connection: ConnectionType::Next }),
        )
    }

    pub fn jagged_edge(constants: &ConstantProvider) -> Self {
        Self::new(
            ElementKind::JaggedEdge,
            constants.jagged_teeth_width,
            constants.jagged_teeth_height,
            None,
        )
    }

    pub fn spacer(width: f32) -> Self {
        Self::new(ElementKind::InRowSpacer, width, 0.0, None)
    }

    pub fn inline_input(index: usize, input: &Input, constants: &ConstantProvider) -> Result<Self> {
        let connection_width = constants.tab_width;
        let (width, height, connected_width) = match input.connected_block() {
            Some(child) => {
                let child_width = check_dimension("connected block width", child.width)?;
                let child_height = check_dimension("connected block height", child.height)?;
                (
                    child_width + connection_width,
                    child_height.max(constants.empty_inline_input_height),
                    Some(child_width),
                )
            }
            None => (
                constants.empty_inline_input_padding + connection_width,
                constants.empty_inline_input_height,
                None,
            ),
        };
        let socket = InputSocket { align: input.align, connection_width, connected_width };
        Ok(Self::new(
            ElementKind::InlineInput(socket),
            width,
            height,
            Some(SourceRef::Input { input: index }),
        ))
    }

    pub fn external_value_input(
        index: usize,
        input: &Input,
        constants: &ConstantProvider,
    ) -> Result<Self> {
        let connection_width = constants.tab_width;
        let (height, connected_width) = match input.connected_block() {
            Some(child) => {
                let child_width = check_dimension("connected block width", child.width)?;
                let child_height = check_dimension("connected block height", child.height)?;
                let inner = child_height - constants.tab_offset_from_top - constants.medium_padding;
                (inner.max(constants.tab_height), Some(child_width))
            }
            None => (constants.tab_height, None),
        };
        let socket = InputSocket { align: input.align, connection_width, connected_width };
        Ok(Self::new(
            ElementKind::ExternalValueInput(socket),
            connection_width + constants.external_value_input_padding,
            height,
            Some(SourceRef::Input { input: index }),
        ))
    }

    pub fn statement_input(
        index: usize,
        input: &Input,
        constants: &ConstantProvider,
    ) -> Result<Self> {
        let (height, connected_width) = match input.connected_block() {
            Some(child) => {
                let child_width = check_dimension("connected block width", child.width)?;
                let child_height = check_dimension("connected block height", child.height)?;
                (child_height + constants.statement_bottom_spacer, Some(child_width))
            }
            None => (constants.empty_statement_input_height, None),
        };
        let socket = InputSocket {
            align: input.align,
            connection_width: constants.notch_width,
            connected_width,
        };
        Ok(Self::new(
            ElementKind::StatementInput(socket),
            constants.statement_input_width(),
            height,
            Some(SourceRef::Input { input: index }),
        ))
    }

    pub fn is_field(&self) -> bool {
        matches!(self.kind, ElementKind::Field { .. })
    }

    /// Editable fields only; every other kind counts as non-editable
    pub fn is_editable(&self) -> bool {
        matches!(self.kind, ElementKind::Field { editable: true })
    }

    pub fn is_input(&self) -> bool {
        self.socket().is_some()
    }

    pub fn is_inline_input(&self) -> bool {
        matches!(self.kind, ElementKind::InlineInput(_))
    }

    pub fn is_external_input(&self) -> bool {
        matches!(self.kind, ElementKind::ExternalValueInput(_))
    }

    pub fn is_statement_input(&self) -> bool {
        matches!(self.kind, ElementKind::StatementInput(_))
    }

    pub fn is_icon(&self) -> bool {
        matches!(self.kind, ElementKind::Icon)
    }

    pub fn is_hat(&self) -> bool {
        matches!(self.kind, ElementKind::Hat { .. })
    }

    pub fn is_previous_connection(&self) -> bool {
        matches!(self.kind, ElementKind::PreviousConnection)
    }

    pub fn is_next_connection(&self) -> bool {
        matches!(self.kind, ElementKind::NextConnection)
    }

    pub fn is_rounded_corner(&self) -> bool {
        matches!(self.kind, ElementKind::RoundCorner)
    }

    pub fn is_square_corner(&self) -> bool {
        matches!(self.kind, ElementKind::SquareCorner)
    }

    pub fn is_jagged_edge(&self) -> bool {
        matches!(self.kind, ElementKind::JaggedEdge)
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.kind, ElementKind::InRowSpacer)
    }

    /// Socket data for input elements
    pub fn socket(&self) -> Option<&InputSocket> {
        match &self.kind {
            ElementKind::InlineInput(socket)
            | ElementKind::ExternalValueInput(socket)
            | ElementKind::StatementInput(socket) => Some(socket),
            ElementKind::Field { .. }
            | ElementKind::Icon
            | ElementKind::Hat { .. }
            | ElementKind::SquareCorner
            | ElementKind::RoundCorner
            | ElementKind::PreviousConnection
            | ElementKind::NextConnection
            | ElementKind::JaggedEdge
            | ElementKind::InRowSpacer => None,
        }
    }

    /// Width this element occupies once attached children are drawn.
    /// Inline sockets already contain their child.
    pub fn width_with_connected_block(&self) -> f32 {
        match &self.kind {
            ElementKind::ExternalValueInput(socket) | ElementKind::StatementInput(socket) => {
                socket.connected_width.unwrap_or(self.width)
            }
            _ => self.width,
        }
    }
}
