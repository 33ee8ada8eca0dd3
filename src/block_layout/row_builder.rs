//! Row construction
//!
//! Partitions a block's visible icons and inputs into rows, bracketed by a
//! header row (corner plus hat or previous notch) and a footer row (corner
//! plus next notch). No spacing is applied here.

use super::constants::ConstantProvider;
use super::error::Result;
use super::measurables::Measurable;
use super::rows::Row;
use crate::models::{Block, HatStyle, Input, InputType};

/// Rows produced by the builder, in top-to-bottom order
#[derive(Debug, Clone)]
pub struct BuiltRows {
    /// Header first, footer last, content rows between
    pub rows: Vec<Row>,

    /// Icons excluded from layout while the block is collapsed
    pub hidden_icons: Vec<Measurable>,
}

/// Builds the unspaced rows of one block
pub struct RowBuilder<'a> {
    block: &'a Block,
    constants: &'a ConstantProvider,
}

impl<'a> RowBuilder<'a> {
    pub fn new(block: &'a Block, constants: &'a ConstantProvider) -> Self {
        Self { block, constants }
    }

    pub fn build(&self) -> Result<BuiltRows> {
        let mut rows = vec![self.header_row()];
        let mut hidden_icons = Vec::new();
        let mut active_row = Row::content();

        // Icons always go on the first row, before anything else
        for (index, icon) in self.block.icons.iter().enumerate() {
            let measurable = Measurable::icon(index, icon)?;
            if self.block.collapsed && icon.collapse_hidden {
                hidden_icons.push(measurable);
            } else {
                active_row.elements.push(measurable);
            }
        }

        let mut last_input: Option<&Input> = None;
        for (index, input) in self.block.visible_inputs() {
            if self.should_start_new_row(input, last_input) {
                rows.push(std::mem::replace(&mut active_row, Row::content()));
            }

            // All of the fields in an input go on the same row
            for (field_index, field) in input.fields.iter().enumerate() {
                active_row
                    .elements
                    .push(Measurable::field(index, field_index, field)?);
            }
            self.add_input(index, input, &mut active_row)?;
            last_input = Some(input);
        }

        if self.block.collapsed {
            active_row.has_jagged_edge = true;
            active_row.elements.push(Measurable::jagged_edge(self.constants));
        }

        if !active_row.elements.is_empty() || active_row.has_dummy_input {
            rows.push(active_row);
        }
        rows.push(self.footer_row());

        log::trace!(
            "built {} rows for block '{}' ({} hidden icons)",
            rows.len(),
            self.block.block_type,
            hidden_icons.len()
        );

        Ok(BuiltRows { rows, hidden_icons })
    }

    /// Whether the block starts with a hat instead of a previous notch
    fn has_hat(&self) -> bool {
        let wants_hat = match self.block.hat {
            Some(HatStyle::Cap) => true,
            Some(HatStyle::None) => false,
            None => self.constants.add_start_hats,
        };
        wants_hat && self.block.output_connection.is_none() && self.block.previous_connection.is_none()
    }

    fn first_visible_input(&self) -> Option<&Input> {
        self.block.visible_inputs().map(|(_, input)| input).next()
    }

    fn last_visible_input(&self) -> Option<&Input> {
        self.block.visible_inputs().map(|(_, input)| input).last()
    }

    fn header_row(&self) -> Row {
        let mut row = Row::header();
        let has_hat = self.has_hat();
        let square_corner =
            self.block.output_connection.is_some() || has_hat || self.block.is_chained_below();

        if square_corner {
            row.elements.push(Measurable::square_corner(self.constants));
        } else {
            row.elements.push(Measurable::round_corner(self.constants));
        }

        if has_hat {
            row.elements.push(Measurable::hat(self.constants));
        } else if self.block.previous_connection.is_some() {
            row.elements.push(Measurable::previous_connection(self.constants));
        }

        let precedes_statement = !self.block.collapsed
            && self
                .first_visible_input()
                .map_or(false, |input| input.kind.is_statement());
        row.min_height = if precedes_statement {
            self.constants.top_row_precedes_statement_min_height
        } else {
            self.constants.top_row_min_height
        };
        row
    }

    fn footer_row(&self) -> Row {
        let mut row = Row::footer();
        let square_corner = self.block.output_connection.is_some() || self.block.has_next_block();

        if square_corner {
            row.elements.push(Measurable::square_corner(self.constants));
        } else {
            row.elements.push(Measurable::round_corner(self.constants));
        }

        if self.block.next_connection.is_some() {
            row.elements.push(Measurable::next_connection(self.constants));
        }

        let follows_statement = !self.block.collapsed
            && self
                .last_visible_input()
                .map_or(false, |input| input.kind.is_statement());
        row.min_height = if follows_statement {
            self.constants.bottom_row_after_statement_min_height
        } else {
            self.constants.bottom_row_min_height
        };
        row.has_fixed_width = follows_statement && self.block.is_inline();
        row
    }

    /// Decide whether `input` starts a new row after `last_input`
    fn should_start_new_row(&self, input: &Input, last_input: Option<&Input>) -> bool {
        // The first input joins the row that may already hold icons
        if last_input.is_none() || self.block.collapsed {
            return false;
        }
        match input.kind {
            InputType::Statement => true,
            InputType::Value | InputType::Dummy => !self.block.is_inline(),
        }
    }

    /// Add the socket for `input` to the row and record its type
    fn add_input(&self, index: usize, input: &Input, row: &mut Row) -> Result<()> {
        row.last_input_align = Some(input.align);
        if self.block.collapsed {
            return Ok(());
        }
        match input.kind {
            InputType::Value if self.block.is_inline() => {
                row.elements
                    .push(Measurable::inline_input(index, input, self.constants)?);
                row.has_inline_input = true;
            }
            InputType::Value => {
                row.elements
                    .push(Measurable::external_value_input(index, input, self.constants)?);
                row.has_external_input = true;
            }
            InputType::Statement => {
                row.elements
                    .push(Measurable::statement_input(index, input, self.constants)?);
                row.has_statement = true;
            }
            InputType::Dummy => {
                // No visual representation, but the row still needs the height
                row.has_dummy_input = true;
                row.min_height = row.min_height.max(self.constants.dummy_input_min_height);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connection, ConnectedBlock, ConnectionType, Field, Icon};

    fn build(block: &Block) -> BuiltRows {
        RowBuilder::new(block, &ConstantProvider::default()).build().unwrap()
    }

    #[test]
    fn test_empty_block_has_only_header_and_footer() {
        let built = build(&Block::new("empty"));
        assert_eq!(built.rows.len(), 2);
        assert!(built.rows[0].is_header());
        assert!(built.rows[1].is_footer());
        assert!(built.rows[0].elements[0].is_rounded_corner());
    }

    #[test]
    fn test_statement_always_starts_new_row_even_inline() {
        let mut block = Block::new("if")
            .add_input(Input::value().with_field(Field::label(10.0, 10.0)))
            .add_input(Input::statement())
            .add_input(Input::value());
        block.inputs_inline = true;
        let built = build(&block);
        // header, value row, statement row (+ trailing inline value), footer
        assert_eq!(built.rows.len(), 4);
        assert!(built.rows[1].has_inline_input);
        assert!(built.rows[2].has_statement);
        assert!(built.rows[2].has_inline_input);
    }

    #[test]
    fn test_external_inputs_each_get_a_row() {
        let block = Block::new("list")
            .add_input(Input::value())
            .add_input(Input::value())
            .add_input(Input::dummy().with_field(Field::label(5.0, 5.0)));
        let built = build(&block);
        assert_eq!(built.rows.len(), 5);
        assert!(built.rows[1].has_external_input);
        assert!(built.rows[3].has_dummy_input);
        assert_eq!(built.rows[3].min_height, 15.0);
    }

    #[test]
    fn test_hidden_inputs_are_skipped() {
        let block = Block::new("hidden")
            .add_input(Input::dummy().with_field(Field::label(5.0, 5.0)))
            .add_input(Input::value().hidden());
        let built = build(&block);
        assert_eq!(built.rows.len(), 3);
        assert!(!built.rows[1].has_external_input);
    }

    #[test]
    fn test_icons_lead_first_row() {
        let block = Block::new("commented")
            .add_icon(Icon::new(16.0, 16.0))
            .add_input(Input::dummy().with_field(Field::label(20.0, 10.0)));
        let built = build(&block);
        assert!(built.rows[1].elements[0].is_icon());
        assert!(built.rows[1].elements[1].is_field());
    }

    #[test]
    fn test_collapsed_block_single_row_with_jagged_edge() {
        let mut block = Block::new("collapsed")
            .add_icon(Icon::new(16.0, 16.0).collapse_hidden())
            .add_icon(Icon::new(16.0, 16.0))
            .add_input(Input::value().with_field(Field::label(10.0, 10.0)))
            .add_input(Input::statement())
            .add_input(Input::dummy().with_field(Field::label(10.0, 10.0)));
        block.collapsed = true;
        let built = build(&block);
        assert_eq!(built.rows.len(), 3);
        assert_eq!(built.hidden_icons.len(), 1);
        let content = &built.rows[1];
        assert!(content.has_jagged_edge);
        assert!(content.elements.last().unwrap().is_jagged_edge());
        assert!(!content.has_statement);
        assert_eq!(content.elements.iter().filter(|e| e.is_icon()).count(), 1);
    }

    #[test]
    fn test_chained_block_gets_square_top_corner() {
        let mut block = Block::new("chained");
        block.previous_connection = Some(
            Connection::previous().connected_to(ConnectedBlock::new(50.0, 30.0, ConnectionType::Next)),
        );
        let built = build(&block);
        assert!(built.rows[0].elements[0].is_square_corner());
        assert!(built.rows[0].elements[1].is_previous_connection());

        // Nested in a statement input instead of chained: rounded
        block.previous_connection = Some(
            Connection::previous().connected_to(ConnectedBlock::new(50.0, 30.0, ConnectionType::Input)),
        );
        let built = build(&block);
        assert!(built.rows[0].elements[0].is_rounded_corner());
    }

    #[test]
    fn test_hat_only_without_previous_or_output() {
        let mut block = Block::new("when_run");
        block.hat = Some(HatStyle::Cap);
        let built = build(&block);
        assert!(built.rows[0].elements[0].is_square_corner());
        assert!(built.rows[0].elements[1].is_hat());

        block.previous_connection = Some(Connection::previous());
        let built = build(&block);
        assert!(built.rows[0].elements[1].is_previous_connection());
    }

    #[test]
    fn test_footer_corner_and_fixed_width() {
        let mut block = Block::new("loop").add_input(Input::statement());
        block.inputs_inline = true;
        block.next_connection = Some(
            Connection::next().connected_to(ConnectedBlock::new(40.0, 24.0, ConnectionType::Previous)),
        );
        let built = build(&block);
        let footer = built.rows.last().unwrap();
        assert!(footer.elements[0].is_square_corner());
        assert!(footer.elements[1].is_next_connection());
        assert!(footer.has_fixed_width);
        assert_eq!(footer.min_height, 10.0);
    }
}
