//! Error types for block layout
//!
//! Structural errors mean the content model handed to the engine is
//! malformed. They are programming errors on the caller's side; the engine
//! stops at the first one instead of producing wrong geometry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A row flagged as holding a statement input has no statement socket
    #[error("statement row {row} has no statement socket")]
    MissingStatementSocket { row: usize },

    /// A disposed icon was left in the block's icon list
    #[error("icon {index} is disposed but still attached to the block")]
    DisposedIcon { index: usize },

    /// A field, icon or child block reported an unusable size
    #[error("invalid {what} dimension: {value}")]
    InvalidDimension { what: String, value: f32 },

    /// A theme constant is negative or not finite
    #[error("invalid theme constant: {0}")]
    InvalidTheme(String),

    #[error("theme parse error: {0}")]
    ThemeParse(String),

    #[error("block parse error: {0}")]
    BlockParse(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
