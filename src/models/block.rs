//! Read-only block content model
//!
//! These structures describe what a block contains: its inputs, fields,
//! icons and connections. The layout engine only ever reads them; the
//! editor owns and mutates them. Attached child blocks are represented by
//! their already-computed size, so children must be laid out first.

use serde::{Deserialize, Serialize};

pub use super::elements::{Align, ConnectionType, HatStyle, InputType};

fn default_true() -> bool {
    true
}

/// A block as seen by the layout engine
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    /// Block type name, used for diagnostics only
    pub block_type: String,

    /// Ordered inputs (hidden inputs are skipped during layout)
    pub inputs: Vec<Input>,

    /// Icons (comment, warning, mutator...)
    pub icons: Vec<Icon>,

    /// Content hidden behind one summary row
    pub collapsed: bool,

    /// Value inputs render inside their row instead of on the right edge
    pub inputs_inline: bool,

    /// Right-to-left rendering
    pub rtl: bool,

    /// Insertion markers keep the block shape but hide fields when drawn
    pub insertion_marker: bool,

    /// Explicit hat request; `None` falls back to the theme default
    pub hat: Option<HatStyle>,

    pub previous_connection: Option<Connection>,
    pub next_connection: Option<Connection>,
    pub output_connection: Option<Connection>,
}

impl Block {
    /// Create an empty block of the given type
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            ..Self::default()
        }
    }

    /// Visible inputs with their index in `inputs`
    pub fn visible_inputs(&self) -> impl Iterator<Item = (usize, &Input)> {
        self.inputs.iter().enumerate().filter(|(_, input)| input.visible)
    }

    /// Whether value inputs are drawn inline. Collapsed blocks never are.
    pub fn is_inline(&self) -> bool {
        self.inputs_inline && !self.collapsed
    }

    /// Whether the block sits directly beneath another block's next notch
    pub fn is_chained_below(&self) -> bool {
        self.previous_connection
            .as_ref()
            .and_then(|c| c.target.as_ref())
            .map_or(false, |target| target.connection == ConnectionType::Next)
    }

    /// Whether another block hangs off this block's next notch
    pub fn has_next_block(&self) -> bool {
        self.next_connection
            .as_ref()
            .map_or(false, Connection::is_connected)
    }

    pub fn add_input(mut self, input: Input) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn add_icon(mut self, icon: Icon) -> Self {
        self.icons.push(icon);
        self
    }
}

/// An input row entry: fields followed by an optional socket
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub name: String,

    pub kind: InputType,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default)]
    pub align: Align,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub connection: Option<Connection>,
}

impl Input {
    pub fn new(kind: InputType) -> Self {
        let connection = match kind {
            InputType::Dummy => None,
            InputType::Value | InputType::Statement => Some(Connection::new(ConnectionType::Input)),
        };
        Self {
            name: String::new(),
            kind,
            visible: true,
            align: Align::Start,
            fields: Vec::new(),
            connection,
        }
    }

    pub fn value() -> Self {
        Self::new(InputType::Value)
    }

    pub fn statement() -> Self {
        Self::new(InputType::Statement)
    }

    pub fn dummy() -> Self {
        Self::new(InputType::Dummy)
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Attach an already-rendered child block to this input's socket
    pub fn with_child(mut self, width: f32, height: f32) -> Self {
        let target = ConnectedBlock {
            width,
            height,
            connection: match self.kind {
                InputType::Statement => ConnectionType::Previous,
                InputType::Value | InputType::Dummy => ConnectionType::Output,
            },
        };
        let mut connection = self
            .connection
            .take()
            .unwrap_or_else(|| Connection::new(ConnectionType::Input));
        connection.target = Some(target);
        self.connection = Some(connection);
        self
    }

    /// Attached child block, if any
    pub fn connected_block(&self) -> Option<&ConnectedBlock> {
        self.connection.as_ref().and_then(|c| c.target.as_ref())
    }
}

/// A measured field (label, text input, dropdown...)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub width: f32,
    pub height: f32,

    #[serde(default)]
    pub editable: bool,
}

impl Field {
    pub fn label(width: f32, height: f32) -> Self {
        Self { width, height, editable: false }
    }

    pub fn editable(width: f32, height: f32) -> Self {
        Self { width, height, editable: true }
    }
}

/// A measured icon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub width: f32,
    pub height: f32,

    /// Hidden while the block is collapsed
    #[serde(default)]
    pub collapse_hidden: bool,

    /// Icon has been disposed but not removed from the block
    #[serde(default)]
    pub disposed: bool,
}

impl Icon {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, collapse_hidden: false, disposed: false }
    }

    pub fn collapse_hidden(mut self) -> Self {
        self.collapse_hidden = true;
        self
    }
}

/// A connection point and whatever is attached to it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub kind: ConnectionType,

    #[serde(default)]
    pub target: Option<ConnectedBlock>,
}

impl Connection {
    pub fn new(kind: ConnectionType) -> Self {
        Self { kind, target: None }
    }

    pub fn previous() -> Self {
        Self::new(ConnectionType::Previous)
    }

    pub fn next() -> Self {
        Self::new(ConnectionType::Next)
    }

    pub fn output() -> Self {
        Self::new(ConnectionType::Output)
    }

    pub fn connected_to(mut self, target: ConnectedBlock) -> Self {
        self.target = Some(target);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.target.is_some()
    }
}

/// The block on the other side of a connection, already laid out
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedBlock {
    /// Rendered width including that block's own children
    pub width: f32,

    /// Rendered height including that block's own children
    pub height: f32,

    /// Type of the connection on the other block this one is attached to
    pub connection: ConnectionType,
}

impl ConnectedBlock {
    pub fn new(width: f32, height: f32, connection: ConnectionType) -> Self {
        Self { width, height, connection }
    }
}
