//! Enumerations for the block content model
//!
//! This module defines the closed sets of input types, alignments,
//! connection types and hat styles a block can declare.

use serde::{Deserialize, Serialize};

/// Kind of an input on a block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// Accepts a single value block (rendered inline or external)
    Value,

    /// Accepts a vertical stack of statement blocks
    Statement,

    /// No connection; only carries fields
    Dummy,
}

impl InputType {
    pub fn is_statement(self) -> bool {
        matches!(self, InputType::Statement)
    }

    pub fn is_value(self) -> bool {
        matches!(self, InputType::Value)
    }

    pub fn is_dummy(self) -> bool {
        matches!(self, InputType::Dummy)
    }
}

/// Declared alignment of an input's content within its row
///
/// Alignment names where the content sits; leftover width goes to the
/// opposite side of the row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Type of a connection point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Top notch of a statement block
    Previous,

    /// Bottom notch of a statement block
    Next,

    /// Left tab of a value block
    Output,

    /// Socket on an input (value or statement)
    Input,
}

/// Hat request on a block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HatStyle {
    /// Draw a start hat
    Cap,

    /// Never draw a hat, even if the theme adds them by default
    None,
}
