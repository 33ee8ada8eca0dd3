//! Rendering constants
//!
//! `ConstantProvider` is the theme: every padding, notch and minimum size the
//! layout passes consult. It is passed explicitly into the engine so several
//! themes can coexist. Defaults match the classic renderer.

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// Named pixel constants consumed by the layout passes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConstantProvider {
    pub no_padding: f32,
    pub small_padding: f32,
    pub medium_padding: f32,
    pub medium_large_padding: f32,
    pub large_padding: f32,

    /// Offset from the top of the row for fields on inline input rows
    /// and statement input rows
    pub tall_input_field_offset_y: f32,

    /// The dark path is the block path translated down and right by this
    pub dark_path_offset: f32,

    pub tab_height: f32,
    pub tab_offset_from_top: f32,
    pub tab_width: f32,

    pub notch_width: f32,
    pub notch_height: f32,

    /// Offset from the left side of a block or the inside of a statement
    /// input to the left side of the notch
    pub notch_offset_left: f32,

    /// From the end of a rounded corner to the start of a previous connection
    pub notch_offset_rounded_corner_prev: f32,

    pub corner_radius: f32,

    /// Minimum width of a block measured from the end of a rounded corner
    pub min_block_width: f32,
    pub min_block_height: f32,
    pub empty_block_spacer_height: f32,

    pub dummy_input_min_height: f32,
    pub top_row_min_height: f32,
    pub top_row_precedes_statement_min_height: f32,
    pub bottom_row_min_height: f32,
    pub bottom_row_after_statement_min_height: f32,

    pub statement_bottom_spacer: f32,
    pub statement_input_padding_left: f32,
    pub between_statement_padding_y: f32,
    pub empty_statement_input_height: f32,

    /// Width of a bottom row that follows a statement input on an inline block
    pub max_bottom_width: f32,

    /// Draw hats on blocks without output or previous connections unless
    /// the block opts out
    pub add_start_hats: bool,
    pub start_hat_height: f32,
    pub start_hat_width: f32,

    pub empty_inline_input_padding: f32,
    pub empty_inline_input_height: f32,
    pub external_value_input_padding: f32,

    pub jagged_teeth_height: f32,
    pub jagged_teeth_width: f32,
}

impl Default for ConstantProvider {
    fn default() -> Self {
        let medium_padding = 5.0;
        let large_padding = 10.0;
        let tab_height = 15.0;
        let min_block_height = 24.0;

        Self {
            no_padding: 0.0,
            small_padding: 3.0,
            medium_padding,
            medium_large_padding: 8.0,
            large_padding,
            tall_input_field_offset_y: medium_padding,
            dark_path_offset: 1.0,
            tab_height,
            tab_offset_from_top: 5.0,
            tab_width: 8.0,
            notch_width: 15.0,
            notch_height: 4.0,
            notch_offset_left: 15.0,
            notch_offset_rounded_corner_prev: 7.0,
            corner_radius: 8.0,
            min_block_width: 12.0,
            min_block_height,
            empty_block_spacer_height: 16.0,
            dummy_input_min_height: tab_height,
            top_row_min_height: medium_padding,
            top_row_precedes_statement_min_height: large_padding,
            bottom_row_min_height: medium_padding - 1.0,
            bottom_row_after_statement_min_height: large_padding,
            statement_bottom_spacer: 0.0,
            statement_input_padding_left: 20.0,
            between_statement_padding_y: 4.0,
            empty_statement_input_height: min_block_height,
            max_bottom_width: 66.5,
            add_start_hats: false,
            start_hat_height: 15.0,
            start_hat_width: 100.0,
            empty_inline_input_padding: 14.5,
            empty_inline_input_height: tab_height + 11.0,
            external_value_input_padding: 2.0,
            jagged_teeth_height: 12.0,
            jagged_teeth_width: 6.0,
        }
    }
}

impl ConstantProvider {
    /// Load a theme from YAML. Missing keys keep their default value.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let constants: Self =
            serde_yaml::from_str(yaml).map_err(|e| LayoutError::ThemeParse(e.to_string()))?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load a theme from JSON. Missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let constants: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::ThemeParse(e.to_string()))?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn to_yaml(&self) -> Result<String, LayoutError> {
        serde_yaml::to_string(self).map_err(|e| LayoutError::ThemeParse(e.to_string()))
    }

    /// Reject negative or non-finite constants, and combinations that
    /// would produce negative in-row gaps
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidTheme(format!("{} = {}", name, value)));
            }
        }

        // The field-to-statement gap is one pixel short of LARGE
        if self.large_padding < 1.0 {
            return Err(LayoutError::InvalidTheme(format!(
                "large_padding = {} (must be at least 1)",
                self.large_padding
            )));
        }

        // Next notches shift by half the dark path offset
        let shift = self.dark_path_offset / 2.0;
        for (name, value) in [
            ("notch_offset_left", self.notch_offset_left),
            ("notch_offset_rounded_corner_prev", self.notch_offset_rounded_corner_prev),
        ] {
            if value < shift {
                return Err(LayoutError::InvalidTheme(format!(
                    "{} = {} (must be at least half of dark_path_offset)",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Statement input socket width: notch offset plus the notch itself
    pub fn statement_input_width(&self) -> f32 {
        self.notch_offset_left + self.notch_width
    }

    /// Shift applied to next notches so the dark path under the previous
    /// connection shows through. Leftwards in both directions, so the sign
    /// follows the text direction.
    pub fn next_notch_dark_path_shift(&self, rtl: bool) -> f32 {
        let sign = if rtl { 1.0 } else { -1.0 };
        sign * self.dark_path_offset / 2.0
    }

    fn named_values(&self) -> [(&'static str, f32); 35] {
        [
            ("no_padding", self.no_padding),
            ("small_padding", self.small_padding),
            ("medium_padding", self.medium_padding),
            ("medium_large_padding", self.medium_large_padding),
            ("large_padding", self.large_padding),
            ("tall_input_field_offset_y", self.tall_input_field_offset_y),
            ("dark_path_offset", self.dark_path_offset),
            ("tab_height", self.tab_height),
            ("tab_offset_from_top", self.tab_offset_from_top),
            ("tab_width", self.tab_width),
            ("notch_width", self.notch_width),
            ("notch_height", self.notch_height),
            ("notch_offset_left", self.notch_offset_left),
            ("notch_offset_rounded_corner_prev", self.notch_offset_rounded_corner_prev),
            ("corner_radius", self.corner_radius),
            ("min_block_width", self.min_block_width),
            ("min_block_height", self.min_block_height),
            ("empty_block_spacer_height", self.empty_block_spacer_height),
            ("dummy_input_min_height", self.dummy_input_min_height),
            ("top_row_min_height", self.top_row_min_height),
            ("top_row_precedes_statement_min_height", self.top_row_precedes_statement_min_height),
            ("bottom_row_min_height", self.bottom_row_min_height),
            ("bottom_row_after_statement_min_height", self.bottom_row_after_statement_min_height),
            ("statement_bottom_spacer", self.statement_bottom_spacer),
            ("statement_input_padding_left", self.statement_input_padding_left),
            ("between_statement_padding_y", self.between_statement_padding_y),
            ("empty_statement_input_height", self.empty_statement_input_height),
            ("max_bottom_width", self.max_bottom_width),
            ("start_hat_height", self.start_hat_height),
            ("start_hat_width", self.start_hat_width),
            ("empty_inline_input_padding", self.empty_inline_input_padding),
            ("empty_inline_input_height", self.empty_inline_input_height),
            ("external_value_input_padding", self.external_value_input_padding),
            ("jagged_teeth_height", self.jagged_teeth_height),
            ("jagged_teeth_width", self.jagged_teeth_width),
        ]
    }
}
